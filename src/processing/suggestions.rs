//! Improvement suggestion generation
//!
//! Walks a fixed rule list over the quality metrics and emits suggestions in
//! rule order; the output is never re-sorted, so severity ordering is a
//! property of the rule list itself.

use crate::catalog::CareerProfile;
use crate::config::AnalysisConfig;
use crate::processing::matcher::KeywordMatch;
use crate::processing::quality::ResumeAnalysis;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    Critical,
    High,
    Medium,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Critical => write!(f, "Critical"),
            Impact::High => write!(f, "High"),
            Impact::Medium => write!(f, "Medium"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionCategory {
    Structure,
    Language,
    Content,
    Contact,
    Formatting,
    CareerAlignment,
    Education,
}

impl fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionCategory::Structure => write!(f, "Structure"),
            SuggestionCategory::Language => write!(f, "Language"),
            SuggestionCategory::Content => write!(f, "Content"),
            SuggestionCategory::Contact => write!(f, "Contact"),
            SuggestionCategory::Formatting => write!(f, "Formatting"),
            SuggestionCategory::CareerAlignment => write!(f, "Career Alignment"),
            SuggestionCategory::Education => write!(f, "Education"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub category: SuggestionCategory,
    pub title: String,
    pub description: String,
    pub impact: Impact,
}

/// How many missing skills the career-keyword suggestion lists.
const MISSING_SKILL_PREVIEW: usize = 5;

/// Generate improvement suggestions in fixed rule order.
///
/// Career-specific rules only fire when a profile (and for the keyword rule,
/// a match result) is supplied. Thresholds come from configuration.
pub fn generate_suggestions(
    resume_text: &str,
    analysis: &ResumeAnalysis,
    career: Option<&CareerProfile>,
    keyword_match: Option<&KeywordMatch>,
    thresholds: &AnalysisConfig,
) -> Vec<SuggestionItem> {
    let mut suggestions = Vec::new();

    if !analysis.missing_sections.is_empty() {
        let missing: Vec<&str> = analysis.missing_sections.iter().map(|s| s.as_str()).collect();
        suggestions.push(SuggestionItem {
            category: SuggestionCategory::Structure,
            title: "Add Missing Sections".to_string(),
            description: format!(
                "Your resume is missing these sections: {}. Recruiters expect to find them.",
                missing.join(", ")
            ),
            impact: Impact::High,
        });
    }

    if analysis.action_verb_count < thresholds.min_action_verbs {
        suggestions.push(SuggestionItem {
            category: SuggestionCategory::Language,
            title: "Use More Action Verbs".to_string(),
            description: "Start bullet points with strong verbs like 'achieved', 'developed', \
                          or 'implemented' to show ownership of results."
                .to_string(),
            impact: Impact::High,
        });
    }

    if analysis.weak_phrase_count > thresholds.max_weak_phrases {
        suggestions.push(SuggestionItem {
            category: SuggestionCategory::Language,
            title: "Remove Weak Phrases".to_string(),
            description: format!(
                "Found {} weak phrases such as 'responsible for'. Replace them with action verbs.",
                analysis.weak_phrase_count
            ),
            impact: Impact::Medium,
        });
    }

    if analysis.quantifiable_achievement_count < thresholds.min_quantifiable_achievements {
        suggestions.push(SuggestionItem {
            category: SuggestionCategory::Content,
            title: "Add Quantifiable Achievements".to_string(),
            description: "Use numbers to show impact, for example 'Increased sales by 25%' or \
                          'Led a 5 people team'."
                .to_string(),
            impact: Impact::High,
        });
    }

    if !analysis.has_complete_contact_info {
        suggestions.push(SuggestionItem {
            category: SuggestionCategory::Contact,
            title: "Complete Contact Information".to_string(),
            description: "Include both an email address and a phone number so recruiters can \
                          reach you."
                .to_string(),
            impact: Impact::Critical,
        });
    }

    if !analysis.has_linkedin {
        suggestions.push(SuggestionItem {
            category: SuggestionCategory::Contact,
            title: "Add LinkedIn Profile".to_string(),
            description: "Add your LinkedIn URL to give recruiters an easy next step.".to_string(),
            impact: Impact::Medium,
        });
    }

    if analysis.bullet_point_count < thresholds.min_bullet_points {
        suggestions.push(SuggestionItem {
            category: SuggestionCategory::Formatting,
            title: "Use More Bullet Points".to_string(),
            description: "Break dense paragraphs into bullet points for better readability."
                .to_string(),
            impact: Impact::Medium,
        });
    }

    if analysis.word_count < thresholds.min_word_count {
        suggestions.push(SuggestionItem {
            category: SuggestionCategory::Content,
            title: "Expand Your Resume".to_string(),
            description: format!(
                "Your resume has only {} words. Add detail about your accomplishments and \
                 responsibilities.",
                analysis.word_count
            ),
            impact: Impact::Medium,
        });
    } else if analysis.word_count > thresholds.max_word_count {
        suggestions.push(SuggestionItem {
            category: SuggestionCategory::Content,
            title: "Make Your Resume More Concise".to_string(),
            description: format!(
                "Your resume has {} words. Trim it down to the achievements that matter most.",
                analysis.word_count
            ),
            impact: Impact::Medium,
        });
    }

    if let (Some(career), Some(keyword_match)) = (career, keyword_match) {
        if !keyword_match.missing_skills.is_empty() {
            let preview: Vec<&str> = keyword_match
                .missing_skills
                .iter()
                .take(MISSING_SKILL_PREVIEW)
                .map(|s| s.as_str())
                .collect();
            suggestions.push(SuggestionItem {
                category: SuggestionCategory::CareerAlignment,
                title: format!("Add {} Keywords", career.name),
                description: format!("Include these relevant skills: {}.", preview.join(", ")),
                impact: Impact::High,
            });
        }
    }

    if let Some(career) = career {
        let required_education = career.required_education.to_lowercase();
        if !required_education.is_empty()
            && !resume_text.to_lowercase().contains(&required_education)
        {
            suggestions.push(SuggestionItem {
                category: SuggestionCategory::Education,
                title: "Highlight Relevant Education".to_string(),
                description: format!(
                    "Emphasize education that matches the typical requirement: {}.",
                    career.required_education
                ),
                impact: Impact::High,
            });
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn weak_analysis() -> ResumeAnalysis {
        ResumeAnalysis {
            sections_present: BTreeSet::new(),
            missing_sections: ["summary", "experience", "education", "skills"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            action_verb_count: 0,
            weak_phrase_count: 3,
            quantifiable_achievement_count: 0,
            has_complete_contact_info: false,
            has_linkedin: false,
            bullet_point_count: 0,
            word_count: 120,
            common_words: Vec::new(),
        }
    }

    fn thresholds() -> AnalysisConfig {
        crate::config::Config::default().analysis
    }

    #[test]
    fn test_weak_resume_suggestion_order() {
        let suggestions =
            generate_suggestions("short resume", &weak_analysis(), None, None, &thresholds());
        let titles: Vec<&str> = suggestions.iter().map(|s| s.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "Add Missing Sections",
                "Use More Action Verbs",
                "Remove Weak Phrases",
                "Add Quantifiable Achievements",
                "Complete Contact Information",
                "Add LinkedIn Profile",
                "Use More Bullet Points",
                "Expand Your Resume",
            ]
        );
    }

    #[test]
    fn test_contact_suggestion_is_critical() {
        let suggestions =
            generate_suggestions("text", &weak_analysis(), None, None, &thresholds());
        let contact = suggestions
            .iter()
            .find(|s| s.title == "Complete Contact Information")
            .unwrap();
        assert_eq!(contact.impact, Impact::Critical);
    }

    #[test]
    fn test_healthy_resume_gets_no_suggestions() {
        let analysis = ResumeAnalysis {
            sections_present: BTreeSet::new(),
            missing_sections: BTreeSet::new(),
            action_verb_count: 8,
            weak_phrase_count: 0,
            quantifiable_achievement_count: 4,
            has_complete_contact_info: true,
            has_linkedin: true,
            bullet_point_count: 14,
            word_count: 500,
            common_words: Vec::new(),
        };
        let suggestions = generate_suggestions("text", &analysis, None, None, &thresholds());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_length_suggestions_are_mutually_exclusive() {
        let mut analysis = weak_analysis();
        analysis.word_count = 1500;
        let suggestions = generate_suggestions("text", &analysis, None, None, &thresholds());
        let titles: Vec<&str> = suggestions.iter().map(|s| s.title.as_str()).collect();

        assert!(titles.contains(&"Make Your Resume More Concise"));
        assert!(!titles.contains(&"Expand Your Resume"));
    }

    #[test]
    fn test_career_rules_fire_last() {
        let mut career = CareerProfile::unknown("Software Developer");
        career.required_education = "Bachelor's degree in Computer Science".to_string();
        let keyword_match = KeywordMatch {
            matching_skills: vec!["python".to_string()],
            missing_skills: vec![
                "sql".to_string(),
                "git".to_string(),
                "docker".to_string(),
                "kubernetes".to_string(),
                "terraform".to_string(),
                "graphql".to_string(),
            ],
            match_percentage: 14.0,
        };

        let suggestions = generate_suggestions(
            "plain text without credentials",
            &weak_analysis(),
            Some(&career),
            Some(&keyword_match),
            &thresholds(),
        );

        let titles: Vec<&str> = suggestions.iter().map(|s| s.title.as_str()).collect();
        let keyword_pos = titles
            .iter()
            .position(|t| *t == "Add Software Developer Keywords")
            .unwrap();
        let education_pos = titles
            .iter()
            .position(|t| *t == "Highlight Relevant Education")
            .unwrap();

        assert_eq!(keyword_pos, titles.len() - 2);
        assert_eq!(education_pos, titles.len() - 1);

        // Only the first five missing skills are listed.
        let keyword_suggestion = &suggestions[keyword_pos];
        assert!(keyword_suggestion.description.contains("terraform"));
        assert!(!keyword_suggestion.description.contains("graphql"));
    }

    #[test]
    fn test_education_rule_skipped_when_mentioned() {
        let mut career = CareerProfile::unknown("Software Developer");
        career.required_education = "Bachelor's degree".to_string();

        let suggestions = generate_suggestions(
            "Earned a bachelor's degree in 2020.",
            &weak_analysis(),
            Some(&career),
            None,
            &thresholds(),
        );
        assert!(!suggestions
            .iter()
            .any(|s| s.title == "Highlight Relevant Education"));
    }
}
