//! Projections of a leave summary for display and export.
//!
//! Both projections are pure: they format an existing summary and never
//! recompute it. Hours are shown with two decimals and currency in whole
//! units.

mod export;
mod format;
mod screen;

pub use export::{Cell, ExportSheet, FILE_PREFIX, SHEET_NAME, file_name};
pub use format::{currency, fixed, hours};
pub use screen::{ReportBody, ScreenReport, SegmentBlock};
