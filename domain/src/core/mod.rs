//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: truncation and URL helpers for page names

pub mod error;
pub mod string;
