//! Side-by-side career comparison
//!
//! Builds an overview of two careers against the user's skills and estimates
//! how hard moving from the first to the second would be.

use crate::catalog::{CareerCatalog, CareerProfile};
use crate::guidance::recommend::skills_overlap;
use crate::processing::matcher;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub first: CareerOverview,
    pub second: CareerOverview,
    /// Difficulty of moving from `first` to `second`.
    pub transition: TransitionDifficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerOverview {
    pub name: String,
    pub description: String,
    /// Share of required skills the user already has, one decimal place.
    pub skill_match_percentage: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Required education ordinal: 0 none stated, 1 associate, 2 bachelor,
    /// 3 master, 4 doctorate.
    pub education_level: u8,
    pub salary_range: String,
    pub job_outlook: String,
    pub work_environment: String,
    pub related_careers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDifficulty {
    pub level: DifficultyLevel,
    /// Share of the first career's skills that carry over, one decimal.
    pub skill_overlap_percentage: f64,
    /// Skills the second career needs that the first does not cover.
    pub skill_gap: Vec<String>,
    pub notes: Vec<String>,
    /// Set when the second career expects a higher education level.
    pub additional_education: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Easy,
    Moderate,
    Challenging,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Easy => write!(f, "Easy"),
            DifficultyLevel::Moderate => write!(f, "Moderate"),
            DifficultyLevel::Challenging => write!(f, "Challenging"),
        }
    }
}

const EASY_OVERLAP: f64 = 70.0;
const MODERATE_OVERLAP: f64 = 40.0;
const SENIOR_EXPERIENCE_YEARS: u32 = 10;
const EARLY_CAREER_YEARS: u32 = 2;

/// Compare two catalog careers for a user. Unknown names resolve to the
/// empty default profile and produce zeroed overviews rather than errors.
pub fn compare_careers(
    catalog: &CareerCatalog,
    first_name: &str,
    second_name: &str,
    user_skills: &[String],
    experience_years: u32,
) -> ComparisonReport {
    let first = catalog.details(first_name);
    let second = catalog.details(second_name);

    ComparisonReport {
        transition: transition_difficulty(&first, &second, experience_years),
        first: overview(&first, user_skills),
        second: overview(&second, user_skills),
    }
}

fn overview(career: &CareerProfile, user_skills: &[String]) -> CareerOverview {
    let keyword_match = matcher::match_containing_skills(career, user_skills);
    let total = keyword_match.total_required();
    let skill_match_percentage = if total == 0 {
        0.0
    } else {
        round1(100.0 * keyword_match.matching_skills.len() as f64 / total as f64)
    };

    CareerOverview {
        name: career.name.clone(),
        description: career.description.clone(),
        skill_match_percentage,
        matching_skills: keyword_match.matching_skills,
        missing_skills: keyword_match.missing_skills,
        education_level: required_education_level(&career.required_education),
        salary_range: career.salary_range.clone(),
        job_outlook: career.job_outlook.clone(),
        work_environment: career.work_environment.clone(),
        related_careers: career.related_careers.clone(),
    }
}

fn transition_difficulty(
    first: &CareerProfile,
    second: &CareerProfile,
    experience_years: u32,
) -> TransitionDifficulty {
    let first_skills: Vec<String> = first
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let second_skills: Vec<String> = second
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let carried_over = first_skills
        .iter()
        .filter(|s1| second_skills.iter().any(|s2| skills_overlap(s1, s2)))
        .count();
    let skill_overlap_percentage = if first_skills.is_empty() {
        0.0
    } else {
        round1(100.0 * carried_over as f64 / first_skills.len() as f64)
    };

    let skill_gap: Vec<String> = second_skills
        .iter()
        .filter(|s2| !first_skills.iter().any(|s1| skills_overlap(s1, s2)))
        .cloned()
        .collect();

    let level = if skill_overlap_percentage >= EASY_OVERLAP {
        DifficultyLevel::Easy
    } else if skill_overlap_percentage >= MODERATE_OVERLAP {
        DifficultyLevel::Moderate
    } else {
        DifficultyLevel::Challenging
    };

    let mut notes = Vec::new();
    if experience_years >= SENIOR_EXPERIENCE_YEARS {
        notes.push(
            "Your senior experience transfers well and can shorten the ramp-up.".to_string(),
        );
    } else if experience_years <= EARLY_CAREER_YEARS {
        notes.push(
            "Early-career moves are easier before deep specialization sets in.".to_string(),
        );
    }

    let additional_education = (required_education_level(&second.required_education)
        > required_education_level(&first.required_education))
        .then(|| second.required_education.clone());

    TransitionDifficulty {
        level,
        skill_overlap_percentage,
        skill_gap,
        notes,
        additional_education,
    }
}

/// Ordinal for the highest education level named in a requirement string.
pub fn required_education_level(required_education: &str) -> u8 {
    let lowered = required_education.to_lowercase();
    if lowered.contains("phd") || lowered.contains("doctorate") {
        4
    } else if lowered.contains("master") {
        3
    } else if lowered.contains("bachelor") {
        2
    } else if lowered.contains("associate") {
        1
    } else {
        0
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
