pub mod generate;
pub mod interactive;
pub mod job;
pub mod silent;

pub use generate::*;
pub use interactive::execute_interactive;
pub use job::{JobDriver, JobOptions, JobReport};
pub use silent::{execute_silent, SilentOverrides};
