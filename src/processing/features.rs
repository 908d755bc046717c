//! Feature extraction from resume text
//!
//! Pulls three signals out of raw text: known skills, education-related
//! sentences, and years of experience. All matching runs against a
//! lower-cased copy of the input.

use crate::error::{CareerCompassError, Result};
use crate::processing::keywords;
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Signals extracted from a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFeatures {
    /// De-duplicated skills, always a subset of the configured vocabulary.
    pub skills: BTreeSet<String>,
    /// Trimmed sentence fragments that mention an education keyword.
    pub education: BTreeSet<String>,
    /// Years of professional experience, 0 when nothing parses.
    pub experience_years: u32,
}

impl ExtractedFeatures {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.education.is_empty() && self.experience_years == 0
    }
}

pub struct FeatureExtractor {
    /// Matcher over vocabulary entries that are not plain single words
    /// ("problem solving", "node.js", "c++"); these match as raw substrings.
    phrase_matcher: AhoCorasick,
    phrase_keywords: Vec<&'static str>,
    /// Vocabulary entries that are single alphanumeric words; these match
    /// only as whole tokens after stop-word filtering.
    word_keywords: Vec<&'static str>,
    education_keywords: Vec<&'static str>,
    stop_words: HashSet<&'static str>,
    experience_patterns: Vec<Regex>,
}

/// Substrings counted by the experience fallback heuristic.
const EXPERIENCE_MENTION_TERMS: [&str; 3] = ["job title", "position", "role"];

/// Cap for the mention-count fallback, in years.
const EXPERIENCE_FALLBACK_CAP: usize = 20;

impl FeatureExtractor {
    pub fn new() -> Result<Self> {
        let (phrase_keywords, word_keywords): (Vec<&str>, Vec<&str>) = keywords::all_skills()
            .into_iter()
            .partition(|kw| !kw.chars().all(|c| c.is_ascii_alphanumeric()));

        let phrase_matcher = AhoCorasick::builder()
            .build(&phrase_keywords)
            .map_err(|e| {
                CareerCompassError::TextProcessing(format!(
                    "Failed to build skill phrase matcher: {}",
                    e
                ))
            })?;

        let experience_patterns = [
            r"(\d+)\+?\s*years?\s+of\s+experience",
            r"experience\s+of\s+(\d+)\+?\s*years?",
            r"(\d+)\+?\s*years?\s+experience",
        ]
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|e| {
                CareerCompassError::TextProcessing(format!("Invalid experience pattern: {}", e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            phrase_matcher,
            phrase_keywords,
            word_keywords,
            education_keywords: keywords::education_keywords(),
            stop_words: keywords::stop_words(),
            experience_patterns,
        })
    }

    /// Run all three extractors over one text.
    pub fn extract(&self, text: &str) -> ExtractedFeatures {
        ExtractedFeatures {
            skills: self.extract_skills(text),
            education: self.extract_education(text),
            experience_years: self.extract_experience(text),
        }
    }

    /// Find vocabulary skills in the text.
    ///
    /// Single-word entries must appear as whole tokens once stop words are
    /// removed; multi-word or punctuated entries match as substrings of the
    /// lower-cased text. The result is the de-duplicated union across all
    /// skill categories.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        let tokens = self.filtered_tokens(&lowered);

        let mut skills = BTreeSet::new();

        for mat in self.phrase_matcher.find_overlapping_iter(&lowered) {
            skills.insert(self.phrase_keywords[mat.pattern().as_usize()].to_string());
        }

        for keyword in &self.word_keywords {
            if tokens.contains(*keyword) {
                skills.insert((*keyword).to_string());
            }
        }

        skills
    }

    /// Collect sentences that mention an education keyword.
    ///
    /// Sentences are split on `.`, `!` and `?`; a trimmed sentence is kept
    /// when it is longer than five characters and contains any education
    /// keyword as a substring.
    pub fn extract_education(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        let mut education = BTreeSet::new();

        for sentence in lowered.split(['.', '!', '?']) {
            let trimmed = sentence.trim();
            if trimmed.len() > 5
                && self
                    .education_keywords
                    .iter()
                    .any(|kw| trimmed.contains(kw))
            {
                education.insert(trimmed.to_string());
            }
        }

        education
    }

    /// Determine years of experience.
    ///
    /// Three phrasings are tried in order ("N years of experience",
    /// "experience of N years", "N years experience"); the first integer
    /// that parses wins. When none match, the count of job-title style
    /// mentions is doubled and capped at 20.
    pub fn extract_experience(&self, text: &str) -> u32 {
        let lowered = text.to_lowercase();

        for pattern in &self.experience_patterns {
            for caps in pattern.captures_iter(&lowered) {
                if let Some(m) = caps.get(1) {
                    if let Ok(years) = m.as_str().parse::<u32>() {
                        return years;
                    }
                }
            }
        }

        let mentions: usize = EXPERIENCE_MENTION_TERMS
            .iter()
            .map(|term| lowered.matches(term).count())
            .sum();
        (mentions * 2).min(EXPERIENCE_FALLBACK_CAP) as u32
    }

    fn filtered_tokens<'a>(&self, lowered: &'a str) -> HashSet<&'a str> {
        lowered
            .unicode_words()
            .filter(|word| word.chars().all(char::is_alphanumeric))
            .filter(|word| !self.stop_words.contains(*word))
            .collect()
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new().expect("Failed to create default feature extractor")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::new().unwrap()
    }

    #[test]
    fn test_skills_across_categories() {
        let text = "Built services in Python and Docker. Ran Agile ceremonies. \
                    Known for problem solving and leadership.";
        let skills = extractor().extract_skills(text);

        assert!(skills.contains("python"));
        assert!(skills.contains("docker"));
        assert!(skills.contains("agile"));
        assert!(skills.contains("problem solving"));
        assert!(skills.contains("leadership"));
    }

    #[test]
    fn test_skills_are_subset_of_vocabulary() {
        let text = "Python, Rust, knitting, excel, underwater basket weaving, jira.";
        let skills = extractor().extract_skills(text);
        let vocabulary: Vec<&str> = keywords::all_skills();

        for skill in &skills {
            assert!(vocabulary.contains(&skill.as_str()), "unknown skill: {}", skill);
        }
        assert!(!skills.contains("knitting"));
    }

    #[test]
    fn test_single_word_skills_need_whole_tokens() {
        let skills = extractor().extract_skills("A pythonic approach to gitops.");
        assert!(!skills.contains("python"));
        assert!(!skills.contains("git"));
    }

    #[test]
    fn test_punctuated_skills_match_as_substrings() {
        let skills = extractor().extract_skills("Expert in C++ and Node.js development.");
        assert!(skills.contains("c++"));
        assert!(skills.contains("node.js"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let e = extractor();
        let text = "Python developer with 5 years of experience. Bachelor degree in CS.";
        assert_eq!(e.extract(text), e.extract(text));
    }

    #[test]
    fn test_education_sentences() {
        let e = extractor();
        let education = e.extract_education(
            "Bachelor of Science in Computer Science from State University. \
             Enjoys hiking. MBA.",
        );

        assert_eq!(education.len(), 1);
        assert!(education
            .iter()
            .next()
            .unwrap()
            .starts_with("bachelor of science"));
    }

    #[test]
    fn test_education_short_fragments_dropped() {
        // "mba" alone is under the six character floor.
        let education = extractor().extract_education("MBA. Yes.");
        assert!(education.is_empty());
    }

    #[test]
    fn test_experience_patterns_in_order() {
        let e = extractor();
        assert_eq!(e.extract_experience("I have 5 years of experience in sales."), 5);
        assert_eq!(e.extract_experience("Total experience of 3 years."), 3);
        assert_eq!(e.extract_experience("7 years experience shipping software."), 7);
        assert_eq!(e.extract_experience("Over 10+ years of experience."), 10);
    }

    #[test]
    fn test_experience_fallback_counts_mentions() {
        let e = extractor();
        // Two "position" mentions and one "role" mention.
        let text = "Held the position of analyst. Moved to a new position. A senior role.";
        assert_eq!(e.extract_experience(text), 6);
    }

    #[test]
    fn test_experience_fallback_is_capped() {
        let text = "role ".repeat(15);
        assert_eq!(extractor().extract_experience(&text), 20);
    }

    #[test]
    fn test_empty_text_yields_empty_features() {
        let features = extractor().extract("");
        assert!(features.is_empty());
        assert_eq!(features.experience_years, 0);
    }
}
