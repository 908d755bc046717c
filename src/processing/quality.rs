//! Resume quality analysis
//!
//! Produces the structural and language metrics that feed scoring and
//! suggestion generation: section coverage, action verb and weak phrase
//! counts, quantifiable achievements, contact completeness, bullet usage,
//! and word statistics.

use crate::error::{CareerCompassError, Result};
use crate::processing::keywords;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Metrics computed from one resume text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    /// Section headings found anywhere in the text.
    pub sections_present: BTreeSet<String>,
    /// Required sections (summary, experience, education, skills) not found.
    pub missing_sections: BTreeSet<String>,
    /// Total occurrences of strong action verbs.
    pub action_verb_count: usize,
    /// Total occurrences of weak phrases.
    pub weak_phrase_count: usize,
    /// Matches of percentage, dollar, and headcount patterns.
    pub quantifiable_achievement_count: usize,
    /// Both an email address and a phone number are present.
    pub has_complete_contact_info: bool,
    pub has_linkedin: bool,
    pub bullet_point_count: usize,
    pub word_count: usize,
    /// Top ten alphabetic words of three or more letters by frequency,
    /// ties kept in first-encounter order.
    pub common_words: Vec<(String, usize)>,
}

pub struct QualityAnalyzer {
    section_names: Vec<&'static str>,
    required_sections: Vec<&'static str>,
    action_verb_pattern: Regex,
    weak_phrase_pattern: Regex,
    quantifiable_pattern: Regex,
    email_pattern: Regex,
    phone_pattern: Regex,
    word_pattern: Regex,
}

const COMMON_WORD_LIMIT: usize = 10;

const BULLET_GLYPHS: [char; 4] = ['•', '*', '-', '–'];

impl QualityAnalyzer {
    pub fn new() -> Result<Self> {
        let action_verb_pattern =
            Self::boundary_alternation(&keywords::strong_action_verbs())?;
        let weak_phrase_pattern = Self::boundary_alternation(&keywords::weak_phrases())?;

        Ok(Self {
            section_names: keywords::resume_sections(),
            required_sections: keywords::required_sections(),
            action_verb_pattern,
            weak_phrase_pattern,
            quantifiable_pattern: Self::compile(r"\d+%|\$\d+|\d+ percent|\d+ people|\d+ team")?,
            email_pattern: Self::compile(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")?,
            phone_pattern: Self::compile(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")?,
            word_pattern: Self::compile(r"\b[a-zA-Z]{3,}\b")?,
        })
    }

    pub fn analyze(&self, text: &str) -> ResumeAnalysis {
        let lowered = text.to_lowercase();

        let sections_present: BTreeSet<String> = self
            .section_names
            .iter()
            .filter(|name| lowered.contains(*name))
            .map(|name| name.to_string())
            .collect();

        let missing_sections: BTreeSet<String> = self
            .required_sections
            .iter()
            .filter(|name| !lowered.contains(*name))
            .map(|name| name.to_string())
            .collect();

        ResumeAnalysis {
            sections_present,
            missing_sections,
            action_verb_count: self.action_verb_pattern.find_iter(&lowered).count(),
            weak_phrase_count: self.weak_phrase_pattern.find_iter(&lowered).count(),
            quantifiable_achievement_count: self
                .quantifiable_pattern
                .find_iter(&lowered)
                .count(),
            has_complete_contact_info: self.email_pattern.is_match(&lowered)
                && self.phone_pattern.is_match(&lowered),
            has_linkedin: lowered.contains("linkedin.com"),
            bullet_point_count: lowered
                .chars()
                .filter(|c| BULLET_GLYPHS.contains(c))
                .count(),
            word_count: lowered.split_whitespace().count(),
            common_words: self.common_words(&lowered),
        }
    }

    /// Frequency-ranked words, stable on ties so earlier words win.
    fn common_words(&self, lowered: &str) -> Vec<(String, usize)> {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for m in self.word_pattern.find_iter(lowered) {
            let word = m.as_str();
            match counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(word.to_string(), 1);
                    order.push(word.to_string());
                }
            }
        }

        let mut ranked: Vec<(String, usize)> = order
            .into_iter()
            .map(|word| {
                let count = counts[&word];
                (word, count)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(COMMON_WORD_LIMIT);
        ranked
    }

    fn boundary_alternation(entries: &[&str]) -> Result<Regex> {
        Self::compile(&format!(r"\b(?:{})\b", entries.join("|")))
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern).map_err(|e| {
            CareerCompassError::TextProcessing(format!("Invalid analysis pattern: {}", e))
        })
    }
}

impl Default for QualityAnalyzer {
    fn default() -> Self {
        Self::new().expect("Failed to create default quality analyzer")
    }
}
