// Classifier module: maps hexagram coordinates to a market-sentiment reading.

pub mod elements;
pub mod trend;

// Re-export the main classifier implementation for ease of use.
pub use trend::{compare_strength, Classifier, RulesetVersion, TrendClassifier};
