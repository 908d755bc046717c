//! Questionnaire-driven career recommendations
//!
//! Scores every catalog career against a user profile with additive bonus
//! rules, then returns the top entries. Each rule is an independent
//! predicate; the education rule keeps a fixed keyword priority so at most
//! one tier bonus fires per career.

use crate::catalog::{CareerCatalog, CareerProfile};
use serde::{Deserialize, Serialize};

/// Answers gathered from the guidance questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireProfile {
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub values: Vec<String>,
    /// Single self-description: analytical, creative, leader, or social.
    pub personality: String,
    /// Highest education level: highschool, selftaught, trade, associate,
    /// bachelor, master, or phd.
    pub education: String,
    pub work_environment: Vec<String>,
}

impl QuestionnaireProfile {
    /// Fold extra skills (for example, extracted from a resume) into the
    /// profile without introducing case-insensitive duplicates.
    pub fn merge_skills<I>(&mut self, extra: I)
    where
        I: IntoIterator<Item = String>,
    {
        for skill in extra {
            let lowered = skill.to_lowercase();
            if !self.skills.iter().any(|s| s.to_lowercase() == lowered) {
                self.skills.push(skill);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub career: String,
    pub score: i64,
    /// Up to three reason lines, in rule order.
    pub match_reasons: Vec<String>,
    pub details: CareerProfile,
}

const SKILL_POINTS: i64 = 10;
const INTEREST_POINTS: i64 = 5;
const EDUCATION_POINTS: i64 = 15;
const ENVIRONMENT_POINTS: i64 = 5;
const VALUE_POINTS: i64 = 5;
const PERSONALITY_POINTS: i64 = 10;

const REASON_LIMIT: usize = 3;
const SKILL_REASON_PREVIEW: usize = 3;

/// Salary markers that qualify a career for the compensation value bonus.
const COMPENSATION_MARKERS: [&str; 3] = ["$100,000", "$150,000", "$200,000"];

/// Education tier checks in priority order. The first tier whose keyword
/// appears in the career's required education and whose minimum the user
/// meets awards the bonus; a failed tier falls through to later keywords.
const EDUCATION_TIERS: [(&str, u8, &str); 4] = [
    ("bachelor", 3, "Education match: Bachelor's degree or higher"),
    ("associate", 2, "Education match: Associate degree or higher"),
    ("master", 4, "Education match: Master's degree or higher"),
    ("phd", 5, "Education match: Doctoral degree"),
];

const PERSONALITY_KEYWORDS: [(&str, &[&str], &str); 4] = [
    (
        "analytical",
        &["analytical", "analysis", "data", "research"],
        "Personality match: Analytical role",
    ),
    (
        "creative",
        &["creative", "design", "innovative"],
        "Personality match: Creative role",
    ),
    (
        "leader",
        &["lead", "manage", "direct", "supervise"],
        "Personality match: Leadership role",
    ),
    (
        "social",
        &["social", "people", "team", "collaborate"],
        "Personality match: People-focused role",
    ),
];

/// True when one skill mentions the other in either direction. This overlap
/// rule is intentionally looser than the keyword matcher's one-directional
/// containment checks.
pub fn skills_overlap(user_skill: &str, required_skill: &str) -> bool {
    user_skill.contains(required_skill) || required_skill.contains(user_skill)
}

/// Ordinal for a stated education level; unknown levels rank below all.
pub fn education_tier(level: &str) -> u8 {
    match level.trim().to_lowercase().as_str() {
        "highschool" | "selftaught" => 1,
        "associate" | "trade" => 2,
        "bachelor" => 3,
        "master" => 4,
        "phd" => 5,
        _ => 0,
    }
}

/// Rank catalog careers for a profile and keep the best `limit` entries.
/// The sort is stable, so equal scores stay in catalog order.
pub fn recommend(
    catalog: &CareerCatalog,
    profile: &QuestionnaireProfile,
    limit: usize,
) -> Vec<RecommendationEntry> {
    let mut entries: Vec<RecommendationEntry> = catalog
        .iter()
        .map(|career| {
            let (score, mut reasons) = score_career(profile, career);
            reasons.truncate(REASON_LIMIT);
            RecommendationEntry {
                career: career.name.clone(),
                score,
                match_reasons: reasons,
                details: career.clone(),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(limit);
    entries
}

fn score_career(profile: &QuestionnaireProfile, career: &CareerProfile) -> (i64, Vec<String>) {
    let description = career.description.to_lowercase();
    let required_education = career.required_education.to_lowercase();
    let work_environment = career.work_environment.to_lowercase();

    let mut score = 0;
    let mut reasons = Vec::new();

    let (skill_score, skill_reason) = skill_bonus(profile, career);
    score += skill_score;
    reasons.extend(skill_reason);

    if let Some((points, reason)) = interest_bonus(profile, &description) {
        score += points;
        reasons.push(reason);
    }

    if let Some(reason) = education_bonus(education_tier(&profile.education), &required_education)
    {
        score += EDUCATION_POINTS;
        reasons.push(reason.to_string());
    }

    for preference in &profile.work_environment {
        let token = preference.trim().to_lowercase();
        if !token.is_empty() && work_environment.contains(&token) {
            score += ENVIRONMENT_POINTS;
            reasons.push(format!("Work environment match: {}", preference.trim()));
        }
    }

    for value in &profile.values {
        if let Some(reason) = value_bonus(value, career, &work_environment) {
            score += VALUE_POINTS;
            reasons.push(reason.to_string());
        }
    }

    if let Some(reason) = personality_bonus(&profile.personality, &description) {
        score += PERSONALITY_POINTS;
        reasons.push(reason.to_string());
    }

    (score, reasons)
}

fn skill_bonus(
    profile: &QuestionnaireProfile,
    career: &CareerProfile,
) -> (i64, Option<String>) {
    let required: Vec<String> = career
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let matched: Vec<String> = profile
        .skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|user| required.iter().any(|req| skills_overlap(user, req)))
        .collect();

    if matched.is_empty() {
        return (0, None);
    }

    let preview: Vec<&str> = matched
        .iter()
        .take(SKILL_REASON_PREVIEW)
        .map(|s| s.as_str())
        .collect();
    (
        SKILL_POINTS * matched.len() as i64,
        Some(format!(
            "Matched {} skills: {}",
            matched.len(),
            preview.join(", ")
        )),
    )
}

/// First interest found in the description wins; later interests are not
/// considered.
fn interest_bonus(
    profile: &QuestionnaireProfile,
    description: &str,
) -> Option<(i64, String)> {
    for interest in &profile.interests {
        let token = interest.trim().to_lowercase();
        if !token.is_empty() && description.contains(&token) {
            return Some((INTEREST_POINTS, format!("Interest match: {}", interest.trim())));
        }
    }
    None
}

fn education_bonus(user_tier: u8, required_education: &str) -> Option<&'static str> {
    for (keyword, min_tier, reason) in EDUCATION_TIERS {
        if required_education.contains(keyword) && user_tier >= min_tier {
            return Some(reason);
        }
    }
    None
}

fn value_bonus(
    value: &str,
    career: &CareerProfile,
    work_environment: &str,
) -> Option<&'static str> {
    match value.trim().to_lowercase().as_str() {
        "worklife" => work_environment
            .contains("flexible")
            .then_some("Value match: Work-life balance"),
        "compensation" => COMPENSATION_MARKERS
            .iter()
            .any(|marker| career.salary_range.contains(marker))
            .then_some("Value match: High compensation potential"),
        "growth" => career
            .job_outlook
            .to_lowercase()
            .contains("growth")
            .then_some("Value match: Career growth opportunities"),
        _ => None,
    }
}

fn personality_bonus(personality: &str, description: &str) -> Option<&'static str> {
    let key = personality.trim().to_lowercase();
    PERSONALITY_KEYWORDS
        .iter()
        .find(|(name, _, _)| *name == key)
        .and_then(|(_, keywords, reason)| {
            keywords
                .iter()
                .any(|kw| description.contains(kw))
                .then_some(*reason)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CareerCatalog;

    fn profile() -> QuestionnaireProfile {
        QuestionnaireProfile {
            interests: vec!["technology".to_string()],
            skills: vec!["python".to_string(), "communication".to_string()],
            values: vec!["growth".to_string()],
            personality: "analytical".to_string(),
            education: "bachelor".to_string(),
            work_environment: vec!["remote".to_string()],
        }
    }

    fn test_career(name: &str) -> CareerProfile {
        CareerProfile::unknown(name)
    }

    #[test]
    fn test_compound_skill_overlaps_plain_mention() {
        assert!(skills_overlap(
            "python",
            "programming languages (python, java, javascript, etc.)"
        ));
        assert!(skills_overlap("python programming", "python"));
        assert!(!skills_overlap("python", "rust"));
    }

    #[test]
    fn test_skill_bonus_counts_and_reports() {
        let mut career = test_career("Dev");
        career.required_skills = vec![
            "Programming Languages (Python, Java, JavaScript, etc.)".to_string(),
            "Communication".to_string(),
            "Kubernetes".to_string(),
        ];

        let (points, reason) = skill_bonus(&profile(), &career);
        assert_eq!(points, 20);
        assert_eq!(reason.unwrap(), "Matched 2 skills: python, communication");
    }

    #[test]
    fn test_interest_stops_at_first_match() {
        let mut p = profile();
        p.interests = vec!["science".to_string(), "technology".to_string()];
        let description = "science and technology work".to_string();

        let (points, reason) = interest_bonus(&p, &description).unwrap();
        assert_eq!(points, 5);
        assert_eq!(reason, "Interest match: science");
    }

    #[test]
    fn test_education_tiers_fall_through_in_priority_order() {
        // "bachelor" appears first and a bachelor-tier user satisfies it,
        // so the master clause is never reached.
        let requirement = "bachelor's degree, master's preferred";
        assert_eq!(
            education_bonus(3, requirement),
            Some("Education match: Bachelor's degree or higher")
        );

        // An associate-tier user fails the bachelor clause but still earns
        // the bonus through the associate clause.
        let either = "bachelor's or associate degree";
        assert_eq!(
            education_bonus(2, either),
            Some("Education match: Associate degree or higher")
        );
        assert!(education_bonus(1, either).is_none());

        // Requirement naming only master leaves lower tiers nothing to
        // fall through to.
        assert!(education_bonus(3, "master's degree in statistics").is_none());
        assert!(education_bonus(4, "master's degree in statistics").is_some());
    }

    #[test]
    fn test_education_tier_map() {
        assert_eq!(education_tier("highschool"), 1);
        assert_eq!(education_tier("trade"), 2);
        assert_eq!(education_tier("Bachelor"), 3);
        assert_eq!(education_tier("phd"), 5);
        assert_eq!(education_tier("wizard school"), 0);
    }

    #[test]
    fn test_personality_bonus_is_one_shot() {
        let description = "data analysis and research in a creative team";
        assert_eq!(
            personality_bonus("analytical", description),
            Some("Personality match: Analytical role")
        );
        // A different key matches different words of the same description,
        // but a single profile only ever carries one personality.
        assert_eq!(
            personality_bonus("creative", description),
            Some("Personality match: Creative role")
        );
        assert_eq!(personality_bonus("leader", description), None);
        assert_eq!(personality_bonus("", description), None);
    }

    #[test]
    fn test_value_shift_moves_one_career_by_five() {
        let catalog = CareerCatalog::builtin().unwrap();
        let base = QuestionnaireProfile::default();

        let mut with_compensation = base.clone();
        with_compensation.values = vec!["compensation".to_string()];

        let before = recommend(&catalog, &base, catalog.len());
        let after = recommend(&catalog, &with_compensation, catalog.len());

        let score_of = |entries: &[RecommendationEntry], name: &str| {
            entries.iter().find(|e| e.career == name).map(|e| e.score).unwrap()
        };

        // Only Software Developer's salary range carries a marker amount.
        assert_eq!(
            score_of(&after, "Software Developer"),
            score_of(&before, "Software Developer") + 5
        );
        for name in catalog.names().iter().filter(|n| *n != "Software Developer") {
            assert_eq!(score_of(&after, name), score_of(&before, name));
        }
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let catalog = CareerCatalog::builtin().unwrap();
        let entries = recommend(&catalog, &QuestionnaireProfile::default(), catalog.len());

        // An empty profile scores every career identically, so the ranking
        // must reproduce catalog order.
        let names: Vec<&str> = entries.iter().map(|e| e.career.as_str()).collect();
        let expected: Vec<&str> = catalog.names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_limit_truncates_ranking() {
        let catalog = CareerCatalog::builtin().unwrap();
        let entries = recommend(&catalog, &profile(), 3);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_reasons_capped_at_three() {
        let catalog = CareerCatalog::builtin().unwrap();
        let rich_profile = QuestionnaireProfile {
            interests: vec!["technology".to_string()],
            skills: vec!["python".to_string(), "sql".to_string(), "communication".to_string()],
            values: vec!["growth".to_string(), "worklife".to_string()],
            personality: "analytical".to_string(),
            education: "phd".to_string(),
            work_environment: vec!["remote".to_string(), "flexible".to_string()],
        };

        for entry in recommend(&catalog, &rich_profile, catalog.len()) {
            assert!(entry.match_reasons.len() <= 3);
        }
    }
}
