//! Career progression roadmaps
//!
//! Lays out the four standard stages for a career, marking where the user
//! currently is and which skills each stage still asks of them. Stage
//! content comes from the catalog when the career defines it and from
//! generic name-based templates otherwise.

use crate::catalog::{CareerCatalog, CareerProfile, LevelInfo, ResourceLink};
use crate::guidance::recommend::skills_overlap;
use crate::processing::matcher;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerStage {
    Entry,
    Mid,
    Senior,
    Expert,
}

impl CareerStage {
    pub const ALL: [CareerStage; 4] = [
        CareerStage::Entry,
        CareerStage::Mid,
        CareerStage::Senior,
        CareerStage::Expert,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "entry" => Some(CareerStage::Entry),
            "mid" => Some(CareerStage::Mid),
            "senior" => Some(CareerStage::Senior),
            "expert" => Some(CareerStage::Expert),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            CareerStage::Entry => 0,
            CareerStage::Mid => 1,
            CareerStage::Senior => 2,
            CareerStage::Expert => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareerStage::Entry => "Entry Level",
            CareerStage::Mid => "Mid Level",
            CareerStage::Senior => "Senior Level",
            CareerStage::Expert => "Expert Level",
        }
    }

    pub fn time_estimate(&self) -> &'static str {
        match self {
            CareerStage::Entry => "0-2 years",
            CareerStage::Mid => "3-5 years",
            CareerStage::Senior => "6-10 years",
            CareerStage::Expert => "10+ years",
        }
    }
}

impl fmt::Display for CareerStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStage {
    pub name: String,
    pub time_estimate: String,
    pub typical_roles: Vec<String>,
    /// Stage skills the user does not already cover.
    pub skills_to_develop: Vec<String>,
    pub education: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapReport {
    pub career: String,
    pub current_stage_index: usize,
    pub stages: Vec<RoadmapStage>,
    /// Required skills the user's skill set does not cover yet.
    pub skill_gaps: Vec<String>,
    pub starting_salary: String,
    pub senior_salary: String,
    pub resources: Vec<ResourceLink>,
}

/// Build the roadmap for a career. Unknown names resolve to the empty
/// default profile, which produces generic stages and no skill gaps.
pub fn career_roadmap(
    catalog: &CareerCatalog,
    career_name: &str,
    current_stage: CareerStage,
    user_skills: &[String],
) -> RoadmapReport {
    let career = catalog.details(career_name);
    let (starting_salary, senior_salary) = career.salary_bounds();

    let stages = CareerStage::ALL
        .iter()
        .map(|stage| build_stage(&career, *stage, current_stage, user_skills))
        .collect();

    RoadmapReport {
        career: career.name.clone(),
        current_stage_index: current_stage.index(),
        stages,
        skill_gaps: matcher::match_against_skills(&career, user_skills).missing_skills,
        starting_salary,
        senior_salary,
        resources: career.resources.clone(),
    }
}

fn build_stage(
    career: &CareerProfile,
    stage: CareerStage,
    current_stage: CareerStage,
    user_skills: &[String],
) -> RoadmapStage {
    let info = career
        .levels
        .as_ref()
        .map(|levels| stage_info(levels, stage).clone())
        .unwrap_or_else(|| generic_stage_info(&career.name, &career.required_education, stage));

    let user_lower: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
    let skills_to_develop = info
        .skills
        .iter()
        .filter(|skill| {
            let lowered = skill.to_lowercase();
            !user_lower.iter().any(|user| skills_overlap(user, &lowered))
        })
        .cloned()
        .collect();

    RoadmapStage {
        name: stage.label().to_string(),
        time_estimate: stage.time_estimate().to_string(),
        typical_roles: info.roles,
        skills_to_develop,
        education: info.education,
        is_current: stage == current_stage,
    }
}

fn stage_info(levels: &crate::catalog::CareerLevels, stage: CareerStage) -> &LevelInfo {
    match stage {
        CareerStage::Entry => &levels.entry,
        CareerStage::Mid => &levels.mid,
        CareerStage::Senior => &levels.senior,
        CareerStage::Expert => &levels.expert,
    }
}

fn generic_stage_info(career_name: &str, required_education: &str, stage: CareerStage) -> LevelInfo {
    let education = if required_education.is_empty() {
        "No formal requirement".to_string()
    } else {
        required_education.to_string()
    };

    let (roles, skills) = match stage {
        CareerStage::Entry => (
            vec![format!("Junior {}", career_name), format!("{} Intern", career_name)],
            vec![
                "Core technical foundations".to_string(),
                "Communication".to_string(),
                "Time management".to_string(),
            ],
        ),
        CareerStage::Mid => (
            vec![career_name.to_string(), format!("{} II", career_name)],
            vec![
                "Deeper specialization".to_string(),
                "Mentoring".to_string(),
                "Project leadership".to_string(),
            ],
        ),
        CareerStage::Senior => (
            vec![format!("Senior {}", career_name), format!("Lead {}", career_name)],
            vec![
                "Strategic planning".to_string(),
                "Team leadership".to_string(),
                "Cross-functional collaboration".to_string(),
            ],
        ),
        CareerStage::Expert => (
            vec![
                format!("Principal {}", career_name),
                format!("Director of {}", career_name),
            ],
            vec![
                "Organizational leadership".to_string(),
                "Vision and strategy".to_string(),
                "Industry influence".to_string(),
            ],
        ),
    };

    LevelInfo {
        roles,
        skills,
        education,
    }
}
