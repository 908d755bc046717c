//! Career profile data model

use serde::{Deserialize, Serialize};

/// One career in the catalog. Field text is stored as authored; matching
/// code lower-cases on use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_education: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub job_outlook: String,
    #[serde(default)]
    pub work_environment: String,
    #[serde(default)]
    pub related_careers: Vec<String>,
    #[serde(default)]
    pub resources: Vec<ResourceLink>,
    /// Per-stage roadmap data; careers without it fall back to generic
    /// stage content derived from the career name.
    #[serde(default)]
    pub levels: Option<CareerLevels>,
}

impl CareerProfile {
    /// The defined profile for a name the catalog does not know. Every field
    /// except the queried name is empty, so derived values bottom out:
    /// keyword matches report 0% and recommendation rules award nothing.
    pub fn unknown(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            required_education: String::new(),
            required_skills: Vec::new(),
            salary_range: String::new(),
            job_outlook: String::new(),
            work_environment: String::new(),
            related_careers: Vec::new(),
            resources: Vec::new(),
            levels: None,
        }
    }

    /// Low and high ends of the salary range, split on the first dash.
    pub fn salary_bounds(&self) -> (String, String) {
        match self.salary_range.split_once('-') {
            Some((low, high)) => (low.trim().to_string(), high.trim().to_string()),
            None => (self.salary_range.trim().to_string(), String::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub kind: String,
}

/// Stage-specific roadmap content for one career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerLevels {
    pub entry: LevelInfo,
    pub mid: LevelInfo,
    pub senior: LevelInfo,
    pub expert: LevelInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_profile_is_empty() {
        let profile = CareerProfile::unknown("Quantum Plumber");
        assert_eq!(profile.name, "Quantum Plumber");
        assert!(profile.required_skills.is_empty());
        assert!(profile.description.is_empty());
    }

    #[test]
    fn test_salary_bounds_split() {
        let mut profile = CareerProfile::unknown("X");
        profile.salary_range = "$70,000 - $150,000+".to_string();
        let (low, high) = profile.salary_bounds();
        assert_eq!(low, "$70,000");
        assert_eq!(high, "$150,000+");
    }

    #[test]
    fn test_salary_bounds_without_dash() {
        let mut profile = CareerProfile::unknown("X");
        profile.salary_range = "$90,000".to_string();
        assert_eq!(profile.salary_bounds(), ("$90,000".to_string(), String::new()));
    }
}
