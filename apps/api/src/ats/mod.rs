//! ATS compatibility scoring: four component calculators, a weighted aggregator with advice, and
//! the pluggable scorer backends served over HTTP.

pub mod aggregator;
pub mod calculators;
pub mod config;
pub mod handlers;
pub mod scorer;

pub use scorer::{AtsScorer, ExternalAtsScorer, InternalAtsScorer};
