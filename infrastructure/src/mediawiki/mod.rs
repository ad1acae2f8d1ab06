//! MediaWiki Action API adapters
//!
//! - [`MediaWikiDiscussionIndex`] implements `DiscussionIndexPort`
//! - [`MediaWikiPageContent`] implements `PageContentPort`
//!
//! Both share one [`MediaWikiClient`].

pub mod client;
pub mod content;
pub mod error;
pub mod index;
pub mod titles;
pub mod types;

pub use client::{ClientSettings, MediaWikiClient};
pub use content::MediaWikiPageContent;
pub use error::MediaWikiError;
pub use index::MediaWikiDiscussionIndex;
