//! Consolidated test utilities for wiki-sidebar
//!
//! This module provides unified testing utilities for integration tests:
//! throwaway wiki directories, fake renderer programs and git repositories.

pub mod assertions;
pub mod repository;
pub mod workspace;
