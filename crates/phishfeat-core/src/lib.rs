pub mod config;
pub mod logging;

pub mod batch;
pub mod dataset;
pub mod extract;
pub mod fetch;
pub mod heuristics;
pub mod traffic;
pub mod url_model;
pub mod whois;

pub use extract::{Extraction, ExtractorSettings, FeatureExtractor};
pub use heuristics::{FeatureVector, FEATURE_NAMES};
