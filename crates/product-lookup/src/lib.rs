#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: Domain error types (`ProductLookupError`)
//! - [`config`]: Lookup settings derived from `[lookup]` (`LookupSettings`)
//! - [`source`]: Lookup collaborators (`ProductLookup`, `DirectoryLookup`, `InMemoryLookup`)
//! - [`service`]: Lookup + assembly orchestration (`ScanService`, `ScanOutcome`)

pub mod config;
pub mod error;
pub mod service;
pub mod source;

pub use config::{LookupSettings, LookupSettingsBuilder};
pub use error::ProductLookupError;
pub use service::{ScanOutcome, ScanService};
pub use source::{DirectoryLookup, InMemoryLookup, LookupOutcome, ProductLookup};
