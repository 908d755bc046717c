//! Career keyword matching
//!
//! Partitions a career's required skills into matched and missing against
//! either a resume text or an explicit skill set. The entry points use
//! deliberately different containment directions and are kept separate;
//! callers pick the one whose semantics they need.

use crate::catalog::CareerProfile;
use serde::{Deserialize, Serialize};

/// Result of matching a career's required skills.
///
/// `matching_skills` and `missing_skills` are disjoint and together contain
/// every required skill, lower-cased, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Percentage of required skills matched, rounded; 0 when the career
    /// lists no required skills.
    pub match_percentage: f64,
}

impl KeywordMatch {
    pub fn total_required(&self) -> usize {
        self.matching_skills.len() + self.missing_skills.len()
    }
}

/// Match required skills against resume text: a required skill counts when
/// it appears as a substring of the lower-cased text.
pub fn match_against_text(career: &CareerProfile, resume_text: &str) -> KeywordMatch {
    let lowered = resume_text.to_lowercase();
    partition_required(career, |skill| lowered.contains(skill))
}

/// Match required skills against an explicit skill set: a required skill
/// counts when it appears as a substring of any entry in the set.
pub fn match_against_skills(career: &CareerProfile, user_skills: &[String]) -> KeywordMatch {
    let user: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
    partition_required(career, |skill| user.iter().any(|entry| entry.contains(skill)))
}

/// Match required skills against an explicit skill set in the opposite
/// direction: a required skill counts when any entry of the set appears as
/// a substring of it. Short skill names land inside compound required
/// entries such as "SQL and Databases".
pub fn match_containing_skills(career: &CareerProfile, user_skills: &[String]) -> KeywordMatch {
    let user: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
    partition_required(career, |skill| {
        user.iter().any(|entry| skill.contains(entry.as_str()))
    })
}

fn partition_required<F>(career: &CareerProfile, matched: F) -> KeywordMatch
where
    F: Fn(&str) -> bool,
{
    let mut matching_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for skill in &career.required_skills {
        let lowered = skill.to_lowercase();
        if matched(&lowered) {
            matching_skills.push(lowered);
        } else {
            missing_skills.push(lowered);
        }
    }

    let total = matching_skills.len() + missing_skills.len();
    let match_percentage = if total == 0 {
        0.0
    } else {
        (100.0 * matching_skills.len() as f64 / total as f64).round()
    };

    KeywordMatch {
        matching_skills,
        missing_skills,
        match_percentage,
    }
}
