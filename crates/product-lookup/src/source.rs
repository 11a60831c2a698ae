//! Product lookup collaborators.
//!
//! The [`ProductLookup`] trait abstracts "barcode in, raw record or not-found out",
//! so [`ScanService`](crate::ScanService) works the same against saved responses on
//! disk ([`DirectoryLookup`]) and fixtures held in memory ([`InMemoryLookup`]).
//!
//! ```text
//!   ┌─────────────┐
//!   │ ScanService │
//!   └──────┬──────┘
//!          ▼
//!   ┌───────────────┐
//!   │ ProductLookup │ (trait)
//!   └───────────────┘
//!       │        │
//!       ▼        ▼
//!  ┌─────────┐ ┌──────────┐
//!  │Directory│ │ InMemory │
//!  └────┬────┘ └──────────┘
//!       ▼
//!  <product_dir>/<barcode>.json
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

use bioscan_core::types::Barcode;
use bioscan_report::RawProductRecord;

use crate::config::LookupSettings;
use crate::error::ProductLookupError;

/// Result of a single lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The database has a record for the barcode.
    Found(RawProductRecord),
    /// No record exists. Not an error.
    NotFound,
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Source of raw product records keyed by barcode.
///
/// Implementations must be `Send + Sync` so a service can be shared across tasks.
pub trait ProductLookup: Send + Sync {
    /// Fetches the raw record for `barcode`.
    ///
    /// A missing product is `Ok(LookupOutcome::NotFound)`; `Err` is reserved for
    /// failures of the source itself.
    fn fetch(
        &self,
        barcode: &Barcode,
    ) -> impl Future<Output = Result<LookupOutcome, ProductLookupError>> + Send;
}

/// Reads saved product-database responses from `<product_dir>/<barcode>.json`.
///
/// Each file holds either a response envelope (`{"status": 1, "product": {...}}`)
/// or a bare product object.
#[derive(Debug, Clone)]
pub struct DirectoryLookup {
    settings: LookupSettings,
}

impl DirectoryLookup {
    pub fn new(settings: LookupSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LookupSettings {
        &self.settings
    }

    /// Path of the saved response for `barcode`.
    ///
    /// Barcodes are digits only, so the file name never escapes `product_dir`.
    pub fn record_path(&self, barcode: &Barcode) -> PathBuf {
        self.settings
            .product_dir
            .join(format!("{}.json", barcode.as_str()))
    }
}

impl ProductLookup for DirectoryLookup {
    async fn fetch(&self, barcode: &Barcode) -> Result<LookupOutcome, ProductLookupError> {
        let path = self.record_path(barcode);
        let path_text = path.display().to_string();

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no saved record for barcode");
                return Ok(LookupOutcome::NotFound);
            }
            Err(e) => {
                return Err(ProductLookupError::Io {
                    path: path_text,
                    reason: e.to_string(),
                });
            }
        };

        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > self.settings.max_record_bytes {
            return Err(ProductLookupError::TooLarge {
                path: path_text,
                size,
                max: self.settings.max_record_bytes,
            });
        }

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| ProductLookupError::Io {
                path: path_text.clone(),
                reason: e.to_string(),
            })?;

        // UTF-8이 아닌 내용은 손상된 레코드입니다.
        let content = String::from_utf8(bytes).map_err(|e| ProductLookupError::Malformed {
            path: path_text.clone(),
            reason: e.to_string(),
        })?;

        let record = RawProductRecord::from_envelope_or_product(&content).map_err(|e| {
            ProductLookupError::Malformed {
                path: path_text,
                reason: e.to_string(),
            }
        })?;

        Ok(match record {
            Some(raw) => LookupOutcome::Found(raw),
            None => LookupOutcome::NotFound,
        })
    }
}

/// Barcode-keyed records held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookup {
    records: HashMap<String, RawProductRecord>,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any previous one for the same barcode.
    pub fn with_product(mut self, barcode: &Barcode, record: RawProductRecord) -> Self {
        self.insert(barcode, record);
        self
    }

    pub fn insert(&mut self, barcode: &Barcode, record: RawProductRecord) {
        self.records.insert(barcode.as_str().to_owned(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProductLookup for InMemoryLookup {
    async fn fetch(&self, barcode: &Barcode) -> Result<LookupOutcome, ProductLookupError> {
        Ok(match self.records.get(barcode.as_str()) {
            Some(raw) => LookupOutcome::Found(raw.clone()),
            None => LookupOutcome::NotFound,
        })
    }
}
