//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod discussion_index;
pub mod page_content;
pub mod progress;
