//! Resume text processing and analysis module

pub mod features;
pub mod keywords;
pub mod matcher;
pub mod optimizer;
pub mod quality;
pub mod scoring;
pub mod suggestions;

pub use features::{ExtractedFeatures, FeatureExtractor};
pub use matcher::KeywordMatch;
pub use optimizer::ResumeOptimizer;
pub use quality::{QualityAnalyzer, ResumeAnalysis};
pub use suggestions::{Impact, SuggestionCategory, SuggestionItem};
