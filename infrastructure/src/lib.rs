//! Infrastructure layer for afdstats
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod mediawiki;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAnalysisConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FileWikiConfig,
};
pub use mediawiki::{
    ClientSettings, MediaWikiClient, MediaWikiDiscussionIndex, MediaWikiError,
    MediaWikiPageContent,
};
