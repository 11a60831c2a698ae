#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: Domain error types (`ReportEngineError`)
//! - [`config`]: Engine configuration (`ReportEngineConfig`, builder)
//! - [`record`]: Raw product record decoding (`RawProductRecord`, `ProductResponse`)
//! - [`defaults`]: Documented fallback for every optional field
//! - [`catalog`]: Static additive risk table (`RiskCatalog`, `RiskEntry`, `AdditiveCode`)
//! - [`nutrients`]: Nutrient set and derived quantities (`NutrientSet`, `compute_derived`)
//! - [`additive`]: Tag list scanning (`AdditiveScanner`, `DetectedRisk`, `DuplicatePolicy`)
//! - [`normalize`]: Allergen and ingredient text cleanup
//! - [`visual`]: Gauge and sunburst data for the render layer
//! - [`report`]: The assembled `ScanReport`
//! - [`assembler`]: Orchestrator (`ReportAssembler`)
//!
//! # Architecture
//!
//! ```text
//! RawProductRecord
//!     |
//!     +--> nutriments ------> NutrientSet --> compute_derived --> DerivedNutrients
//!     |                            |                                   |
//!     |                            +-----------> visual <--------------+
//!     |
//!     +--> additives_tags --> AdditiveScanner --(RiskCatalog)--> Vec<DetectedRisk>
//!     |
//!     +--> text fields -----> defaults / normalize
//!                                   |
//!                             ReportAssembler --> ScanReport
//! ```

pub mod additive;
pub mod assembler;
pub mod catalog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod normalize;
pub mod nutrients;
pub mod record;
pub mod report;
pub mod visual;

// --- Public API Re-exports ---

// Assembler (main orchestrator)
pub use assembler::{ReportAssembler, assemble};

// Configuration
pub use config::{ReportEngineConfig, ReportEngineConfigBuilder};

// Error
pub use error::ReportEngineError;

// Raw input
pub use record::{ProductResponse, RawNutriments, RawProductRecord};

// Catalog
pub use catalog::{AdditiveCode, RiskCatalog, RiskEntry};

// Nutrients
pub use nutrients::{DerivedNutrients, Nutrient, NutrientSet, compute_derived};

// Additives
pub use additive::{AdditiveScanner, DetectedRisk, DuplicatePolicy};

// Normalization
pub use normalize::{allergen_list, normalize_allergens, normalize_ingredients_text};

// Report
pub use report::{ScanReport, TierCounts};
pub use visual::{GaugeBand, GaugeReading, SunburstSegment, VisualSummary};
