//! Resume optimization engine
//!
//! Runs the full analysis pipeline over one resume: text extraction,
//! feature extraction, quality analysis, optional career matching, scoring,
//! and suggestion generation, assembled into an `OptimizationReport`.

use crate::catalog::CareerProfile;
use crate::config::{AnalysisConfig, Config};
use crate::error::Result;
use crate::input::InputManager;
use crate::output::report::OptimizationReport;
use crate::processing::features::FeatureExtractor;
use crate::processing::matcher;
use crate::processing::quality::QualityAnalyzer;
use crate::processing::{scoring, suggestions};
use chrono::Utc;
use log::{debug, info};
use std::path::Path;

pub struct ResumeOptimizer {
    input_manager: InputManager,
    feature_extractor: FeatureExtractor,
    quality_analyzer: QualityAnalyzer,
    thresholds: AnalysisConfig,
}

impl ResumeOptimizer {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            input_manager: InputManager::new(),
            feature_extractor: FeatureExtractor::new()?,
            quality_analyzer: QualityAnalyzer::new()?,
            thresholds: config.analysis.clone(),
        })
    }

    /// Analyze a resume file, optionally against a target career.
    ///
    /// Fails on caller mistakes (missing file, unsupported format); content
    /// the extractor cannot decode degrades to an empty-text analysis.
    pub async fn optimize(
        &mut self,
        path: &Path,
        career: Option<&CareerProfile>,
    ) -> Result<OptimizationReport> {
        info!("Analyzing resume: {}", path.display());
        let text = self.input_manager.extract_text(path).await?;
        Ok(self.build_report(path.display().to_string(), &text, career))
    }

    /// Analyze already-extracted resume text.
    pub fn optimize_text(&self, text: &str, career: Option<&CareerProfile>) -> OptimizationReport {
        self.build_report("(inline text)".to_string(), text, career)
    }

    fn build_report(
        &self,
        resume_path: String,
        text: &str,
        career: Option<&CareerProfile>,
    ) -> OptimizationReport {
        debug!("Running analysis over {} characters", text.len());

        let features = self.feature_extractor.extract(text);
        let analysis = self.quality_analyzer.analyze(text);
        let keyword_match = career.map(|profile| matcher::match_against_text(profile, text));
        let overall_score = scoring::score_resume(&analysis, keyword_match.as_ref());
        let suggestions = suggestions::generate_suggestions(
            text,
            &analysis,
            career,
            keyword_match.as_ref(),
            &self.thresholds,
        );

        OptimizationReport {
            resume_path,
            target_career: career.map(|profile| profile.name.clone()),
            overall_score,
            analysis,
            features,
            keyword_match,
            suggestions,
            generated_at: Utc::now(),
        }
    }
}

impl Default for ResumeOptimizer {
    fn default() -> Self {
        Self::new(&Config::default()).expect("Failed to create default resume optimizer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CareerCatalog;
    use std::io::Write;

    const STRONG_TEXT: &str = "Summary\n\
        Led development of payment systems. Achieved 40% latency reduction \
        and managed a team of 5 people. Delivered $2M in savings.\n\
        Experience\n\
        5 years of experience with python and sql.\n\
        • Implemented CI pipelines\n\
        • Launched analytics dashboards\n\
        Education\n\
        Bachelor of Science in Computer Science\n\
        Skills\n\
        python, sql, git, communication\n\
        jane@example.com 555-123-4567 linkedin.com/in/jane";

    #[test]
    fn test_empty_text_scores_baseline() {
        let optimizer = ResumeOptimizer::default();
        let report = optimizer.optimize_text("", None);

        assert_eq!(report.overall_score, 50);
        assert!(report.target_career.is_none());
        assert!(report.keyword_match.is_none());
        assert!(report.features.is_empty());
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn test_career_attaches_keyword_match() {
        let catalog = CareerCatalog::builtin().unwrap();
        let career = catalog.get("Software Developer").unwrap();
        let optimizer = ResumeOptimizer::default();

        let report = optimizer.optimize_text(STRONG_TEXT, Some(career));

        assert_eq!(report.target_career.as_deref(), Some("Software Developer"));
        let keyword_match = report.keyword_match.as_ref().unwrap();
        assert_eq!(keyword_match.total_required(), 7);
        // Compound catalog entries match only as whole phrases, and this
        // text spells none of them out.
        assert_eq!(keyword_match.match_percentage, 0.0);
    }

    #[test]
    fn test_stronger_text_scores_higher() {
        let optimizer = ResumeOptimizer::default();

        let weak = optimizer.optimize_text("i was responsible for things", None);
        let strong = optimizer.optimize_text(STRONG_TEXT, None);

        assert!(strong.overall_score > weak.overall_score);
        assert!(strong.features.skills.contains("python"));
        assert_eq!(strong.features.experience_years, 5);
    }

    #[tokio::test]
    async fn test_optimize_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", STRONG_TEXT).unwrap();

        let mut optimizer = ResumeOptimizer::default();
        let report = optimizer.optimize(&path, None).await.unwrap();

        assert!(report.resume_path.ends_with("resume.txt"));
        assert!(report.analysis.word_count > 0);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let mut optimizer = ResumeOptimizer::default();
        let result = optimizer
            .optimize(Path::new("/nonexistent/resume.txt"), None)
            .await;
        assert!(result.is_err());
    }
}
