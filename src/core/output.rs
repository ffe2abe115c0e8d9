//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings, green for success
//! - **Standardized spacing**: Newline before messages that start a new step
//! - **Numbered listings**: Pages are shown with the zero-based index used for ordering

use crate::core::pages::Page;
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a warning that does not stop the run
pub fn print_warning(message: &str) {
    println!("{} {}", "!".yellow(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Format one numbered page line, e.g. `   [2] Setup.md`
pub fn format_page_line(index: usize, page: &Page) -> String {
    format!("   {} {}", format!("[{index}]").bright_black(), page.name().white())
}

/// Print pages with the indices accepted by the order prompt
pub fn print_page_list(pages: &[Page]) {
    for (index, page) in pages.iter().enumerate() {
        println!("{}", format_page_line(index, page));
    }
}
