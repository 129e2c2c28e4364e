//! Configuration loading and management for the Leave Engine.
//!
//! This module provides functionality to load accrual configurations from YAML
//! files, including statute metadata, baseline hours, and the tenure segment
//! table. A copy of the Labor Standards Act tables is compiled in and available
//! through [`ConfigLoader::builtin`].
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tw_lsa").unwrap();
//! println!("Loaded statute: {}", config.statute().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccrualConfig, AccrualParameters, BaseHoursParameters, BasePeriod, HoursBounds,
    SegmentDefinition, SegmentsConfig, StatuteMetadata,
};
