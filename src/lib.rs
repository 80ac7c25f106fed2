pub mod api;
pub mod config;
pub mod error;
pub mod reference;
pub mod segment;
pub mod stats;

pub use crate::api::{AnalysisReport, Analyzer};
pub use crate::reference::ReferenceSet;
