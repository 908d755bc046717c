//! Resume optimization report structures

use crate::processing::features::ExtractedFeatures;
use crate::processing::matcher::KeywordMatch;
use crate::processing::quality::ResumeAnalysis;
use crate::processing::suggestions::{Impact, SuggestionItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete result of one resume optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Resume file analyzed, as given by the caller.
    pub resume_path: String,

    /// Career the resume was matched against, when one was requested.
    pub target_career: Option<String>,

    /// Overall resume score (0-100).
    pub overall_score: u8,

    /// Structural and language quality metrics.
    pub analysis: ResumeAnalysis,

    /// Skills, education, and experience extracted from the text.
    pub features: ExtractedFeatures,

    /// Required-skill match against the target career.
    pub keyword_match: Option<KeywordMatch>,

    /// Improvement suggestions in presentation order.
    pub suggestions: Vec<SuggestionItem>,

    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

/// Coarse quality band for score presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=100 => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "score-excellent",
            ScoreBand::Good => "score-good",
            ScoreBand::Fair => "score-fair",
            ScoreBand::NeedsWork => "score-poor",
        }
    }
}

impl OptimizationReport {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score)
    }

    pub fn verdict(&self) -> &'static str {
        match self.overall_score {
            90..=100 => "Outstanding resume, ready to send",
            80..=89 => "Strong resume, minor polish recommended",
            70..=79 => "Good resume, a few targeted improvements will help",
            60..=69 => "Fair resume, several improvements needed",
            50..=59 => "Below average, significant rework recommended",
            _ => "Needs major revisions before sending",
        }
    }

    /// File name portion of the resume path, for display.
    pub fn resume_file_name(&self) -> String {
        Path::new(&self.resume_path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.resume_path.clone())
    }

    pub fn suggestions_with_impact(&self, impact: Impact) -> Vec<&SuggestionItem> {
        self.suggestions
            .iter()
            .filter(|s| s.impact == impact)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(score: u8) -> OptimizationReport {
        OptimizationReport {
            resume_path: "/tmp/resume.pdf".to_string(),
            target_career: None,
            overall_score: score,
            analysis: ResumeAnalysis::default(),
            features: ExtractedFeatures::default(),
            keyword_match: None,
            suggestions: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::NeedsWork);
    }

    #[test]
    fn test_verdict_follows_score() {
        assert_eq!(report(95).verdict(), "Outstanding resume, ready to send");
        assert_eq!(
            report(50).verdict(),
            "Below average, significant rework recommended"
        );
        assert_eq!(report(10).verdict(), "Needs major revisions before sending");
    }

    #[test]
    fn test_resume_file_name_strips_directories() {
        assert_eq!(report(70).resume_file_name(), "resume.pdf");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let value = serde_json::to_value(report(72)).unwrap();
        assert_eq!(value["overall_score"], 72);
        assert!(value["generated_at"].is_string());
        assert!(value["keyword_match"].is_null());
    }
}
