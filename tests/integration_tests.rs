//! Integration tests for the career compass pipeline

use career_compass::catalog::CareerCatalog;
use career_compass::config::{Config, OutputFormat};
use career_compass::guidance::{
    career_roadmap, compare_careers, recommend, CareerStage, QuestionnaireProfile,
};
use career_compass::input::manager::InputManager;
use career_compass::output::formatter::save_report_to_file;
use career_compass::output::ReportGenerator;
use career_compass::processing::{FeatureExtractor, ResumeOptimizer};
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Alex Morgan"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    assert!(text.contains("React"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Alex Morgan"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_analyze_resume_end_to_end() {
    let config = Config::default();
    let mut optimizer = ResumeOptimizer::new(&config).unwrap();

    let report = optimizer
        .optimize(Path::new("tests/fixtures/sample_resume.txt"), None)
        .await
        .unwrap();

    assert!(report.resume_path.ends_with("sample_resume.txt"));
    assert!(report.target_career.is_none());
    assert!(report.keyword_match.is_none());

    // All sections, plenty of verbs and numbers, full contact block.
    assert_eq!(report.overall_score, 100);
    assert!(report.analysis.missing_sections.is_empty());
    assert!(report.analysis.word_count > 100);
    assert!(report.analysis.has_complete_contact_info);
    assert!(report.analysis.has_linkedin);
    assert!(report.features.skills.contains("python"));
    assert_eq!(report.features.experience_years, 5);
}

#[tokio::test]
async fn test_analyze_against_target_career() {
    let config = Config::default();
    let catalog = CareerCatalog::builtin().unwrap();
    let career = catalog.get("Software Developer").unwrap();

    let mut optimizer = ResumeOptimizer::new(&config).unwrap();
    let report = optimizer
        .optimize(
            Path::new("tests/fixtures/sample_resume.txt"),
            Some(career),
        )
        .await
        .unwrap();

    assert_eq!(report.target_career.as_deref(), Some("Software Developer"));

    let keyword_match = report.keyword_match.unwrap();
    assert_eq!(keyword_match.total_required(), 7);
    assert!(keyword_match
        .matching_skills
        .contains(&"problem solving".to_string()));
    assert!(keyword_match
        .matching_skills
        .contains(&"web development".to_string()));
    assert!(keyword_match.match_percentage > 0.0);
    assert!(!keyword_match.missing_skills.is_empty());
}

#[tokio::test]
async fn test_report_renders_in_every_format() {
    let config = Config::default();
    let mut optimizer = ResumeOptimizer::new(&config).unwrap();
    let report = optimizer
        .optimize(Path::new("tests/fixtures/sample_resume.txt"), None)
        .await
        .unwrap();

    let generator = ReportGenerator::with_options(false, false, true, true, true);

    let console = generator
        .generate_report(&report, &OutputFormat::Console)
        .unwrap();
    assert!(console.contains("RESUME ANALYSIS"));
    assert!(console.contains("sample_resume.txt"));

    let json = generator
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["overall_score"], 100);
    assert!(value["generated_at"].is_string());

    let markdown = generator
        .generate_report(&report, &OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("## Overview"));
    assert!(markdown.contains("sample_resume.txt"));

    let html = generator
        .generate_report(&report, &OutputFormat::Html)
        .unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("sample_resume.txt"));
}

#[tokio::test]
async fn test_saved_report_round_trip() {
    let config = Config::default();
    let mut optimizer = ResumeOptimizer::new(&config).unwrap();
    let report = optimizer
        .optimize(Path::new("tests/fixtures/sample_resume.md"), None)
        .await
        .unwrap();

    let generator = ReportGenerator::with_options(false, false, true, true, true);
    let markdown = generator
        .generate_report(&report, &OutputFormat::Markdown)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("resume_analysis.md");
    save_report_to_file(&markdown, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, markdown);
}

#[test]
fn test_recommendations_rank_catalog_careers() {
    let catalog = CareerCatalog::builtin().unwrap();
    let profile = QuestionnaireProfile {
        interests: vec!["technology".to_string(), "data".to_string()],
        skills: vec!["programming".to_string(), "statistics".to_string()],
        values: vec!["growth".to_string()],
        personality: "analytical".to_string(),
        education: "bachelor".to_string(),
        work_environment: vec!["office".to_string()],
    };

    let entries = recommend(&catalog, &profile, 5);
    assert!(!entries.is_empty());
    assert!(entries.len() <= 5);
    assert!(entries.windows(2).all(|pair| pair[0].score >= pair[1].score));
    assert!(entries[0].score > 0);
    assert!(!entries[0].match_reasons.is_empty());
}

#[tokio::test]
async fn test_resume_skills_feed_recommendations() {
    let catalog = CareerCatalog::builtin().unwrap();
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let extractor = FeatureExtractor::new().unwrap();
    let mut profile = QuestionnaireProfile::default();
    profile.merge_skills(extractor.extract_skills(&text));
    assert!(profile.skills.iter().any(|s| s == "python"));

    let entries = recommend(&catalog, &profile, 3);
    assert!(!entries.is_empty());
    assert!(entries.len() <= 3);
    assert!(entries[0].score > 0);
}

#[test]
fn test_compare_transition_between_catalog_careers() {
    let catalog = CareerCatalog::builtin().unwrap();
    let skills = vec!["python".to_string(), "sql".to_string()];

    let report = compare_careers(&catalog, "software developer", "data scientist", &skills, 3);

    assert_eq!(report.first.name, "Software Developer");
    assert_eq!(report.second.name, "Data Scientist");

    // "python" and "sql" each sit inside one compound required entry per
    // career: 2/7 and 2/6.
    assert_eq!(report.first.skill_match_percentage, 28.6);
    assert!(report
        .first
        .matching_skills
        .contains(&"databases and sql".to_string()));
    assert_eq!(report.second.skill_match_percentage, 33.3);
    assert!(report
        .second
        .matching_skills
        .contains(&"python or r programming".to_string()));
    assert!(report
        .second
        .missing_skills
        .contains(&"machine learning".to_string()));

    // The two careers phrase their skill lists differently, so none of
    // the first's entries line up with the second's.
    assert_eq!(report.transition.skill_overlap_percentage, 0.0);
    assert!(report
        .transition
        .skill_gap
        .contains(&"machine learning".to_string()));
}

#[test]
fn test_roadmap_follows_catalog_levels() {
    let catalog = CareerCatalog::builtin().unwrap();
    let report = career_roadmap(
        &catalog,
        "software developer",
        CareerStage::Mid,
        &["python".to_string()],
    );

    assert_eq!(report.career, "Software Developer");
    assert_eq!(report.stages.len(), 4);
    assert_eq!(report.current_stage_index, 1);
    assert!(report.stages[1].is_current);
    assert!(report.stages[0]
        .typical_roles
        .contains(&"Junior Developer".to_string()));
    assert_eq!(report.starting_salary, "$70,000");
    assert_eq!(report.senior_salary, "$150,000+");
}
