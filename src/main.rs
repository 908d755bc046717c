//! Career compass: resume analysis and career guidance from the command line

mod catalog;
mod cli;
mod config;
mod error;
mod guidance;
mod input;
mod output;
mod processing;

use catalog::{CareerCatalog, CareerProfile};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{CareerCompassError, Result};
use guidance::{
    career_roadmap, compare_careers, recommend, CareerStage, ComparisonReport,
    QuestionnaireProfile, RecommendationEntry, RoadmapReport,
};
use input::manager::InputManager;
use log::{error, info, warn};
use output::formatter::{save_report_to_file, suggest_filename};
use output::ReportGenerator;
use processing::{FeatureExtractor, ResumeOptimizer};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(override_path: Option<&Path>) -> Result<Config> {
    match override_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            career,
            detailed,
            output,
            save,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| CareerCompassError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(CareerCompassError::InvalidInput)?;

            let catalog = CareerCatalog::load(&config)?;
            let target = match &career {
                Some(name) => Some(resolve_career(&catalog, name)?),
                None => None,
            };

            let mut optimizer = ResumeOptimizer::new(&config)?;
            let report = optimizer.optimize(&resume, target.as_ref()).await?;

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(save_path) => {
                    // A directory target gets a generated file name.
                    let target_path = if save_path.is_dir() {
                        save_path.join(suggest_filename(
                            &output_format,
                            &report.resume_file_name(),
                            true,
                        ))
                    } else {
                        save_path
                    };
                    save_report_to_file(&rendered, &target_path)?;
                    println!("💾 Report saved to {}", target_path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Recommend {
            interests,
            skills,
            values,
            personality,
            education,
            environment,
            resume,
            limit,
            output,
        } => {
            info!("Building career recommendations");

            let format = cli::parse_guidance_output_format(&output)
                .map_err(CareerCompassError::InvalidInput)?;
            let limit = limit.unwrap_or(config.analysis.recommendation_limit);

            let profile = QuestionnaireProfile {
                interests,
                skills,
                values,
                personality,
                education,
                work_environment: environment,
            };

            let outcome = build_recommendations(&config, profile, resume.as_ref(), limit).await;
            match (outcome, format) {
                (Ok(entries), OutputFormat::Json) => {
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                (Ok(entries), _) => render_recommendations(&entries),
                (Err(e), OutputFormat::Json) => print_json_error(&e),
                (Err(e), _) => return Err(e),
            }
        }

        Commands::Compare {
            first,
            second,
            skills,
            experience_years,
            output,
        } => {
            info!("Comparing careers '{}' and '{}'", first, second);

            let format = cli::parse_guidance_output_format(&output)
                .map_err(CareerCompassError::InvalidInput)?;

            let outcome = CareerCatalog::load(&config).map(|catalog| {
                hint_unknown_career(&catalog, &first);
                hint_unknown_career(&catalog, &second);
                compare_careers(&catalog, &first, &second, &skills, experience_years)
            });

            match (outcome, format) {
                (Ok(report), OutputFormat::Json) => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                (Ok(report), _) => render_comparison(&report),
                (Err(e), OutputFormat::Json) => print_json_error(&e),
                (Err(e), _) => return Err(e),
            }
        }

        Commands::Roadmap {
            career,
            level,
            skills,
            output,
        } => {
            info!("Building roadmap for '{}'", career);

            let format = cli::parse_guidance_output_format(&output)
                .map_err(CareerCompassError::InvalidInput)?;

            let stage = match CareerStage::parse(&level) {
                Some(stage) => stage,
                None => {
                    warn!(
                        "Unknown level '{}', starting from entry. Valid levels: entry, mid, senior, expert",
                        level
                    );
                    CareerStage::Entry
                }
            };

            let outcome = CareerCatalog::load(&config).map(|catalog| {
                hint_unknown_career(&catalog, &career);
                career_roadmap(&catalog, &career, stage, &skills)
            });

            match (outcome, format) {
                (Ok(report), OutputFormat::Json) => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                (Ok(report), _) => render_roadmap(&report),
                (Err(e), OutputFormat::Json) => print_json_error(&e),
                (Err(e), _) => return Err(e),
            }
        }

        Commands::Careers { detailed } => {
            let catalog = CareerCatalog::load(&config)?;

            println!("📚 Known Careers ({})\n", catalog.len());
            if detailed {
                for profile in catalog.iter() {
                    render_career_profile(profile);
                }
            } else {
                for profile in catalog.iter() {
                    println!("  • {}: {}", profile.name, truncate_text(&profile.description, 80));
                }
                println!("\n💡 Use --detailed for full profiles");
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                match &config.catalog.custom_path {
                    Some(path) => println!("Career catalog: {}", path.display()),
                    None => println!("Career catalog: built-in"),
                }
                println!("\nAnalysis thresholds:");
                println!("  Min action verbs: {}", config.analysis.min_action_verbs);
                println!("  Max weak phrases: {}", config.analysis.max_weak_phrases);
                println!(
                    "  Min quantifiable achievements: {}",
                    config.analysis.min_quantifiable_achievements
                );
                println!("  Min bullet points: {}", config.analysis.min_bullet_points);
                println!(
                    "  Word count range: {} to {}",
                    config.analysis.min_word_count, config.analysis.max_word_count
                );
                println!(
                    "  Recommendation limit: {}",
                    config.analysis.recommendation_limit
                );
                println!("\nOutput:");
                println!("  Default format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Look up a target career, turning a miss into an error with a
/// nearest-name hint.
fn resolve_career(catalog: &CareerCatalog, name: &str) -> Result<CareerProfile> {
    match catalog.get(name) {
        Some(profile) => Ok(profile.clone()),
        None => {
            let mut message = format!("Unknown career '{}'", name);
            if let Some(hint) = catalog.closest_name(name) {
                message.push_str(&format!(". Did you mean '{}'?", hint));
            }
            message.push_str(" Run `career-compass careers` to list known careers.");
            Err(CareerCompassError::InvalidInput(message))
        }
    }
}

/// Guidance flows treat unknown careers as empty profiles, so only log a hint.
fn hint_unknown_career(catalog: &CareerCatalog, name: &str) {
    if catalog.get(name).is_none() {
        match catalog.closest_name(name) {
            Some(hint) => warn!("Unknown career '{}', did you mean '{}'?", name, hint),
            None => warn!(
                "Unknown career '{}', run `career-compass careers` for the list",
                name
            ),
        }
    }
}

async fn build_recommendations(
    config: &Config,
    mut profile: QuestionnaireProfile,
    resume: Option<&PathBuf>,
    limit: usize,
) -> Result<Vec<RecommendationEntry>> {
    let catalog = CareerCatalog::load(config)?;

    if let Some(resume_path) = resume {
        cli::validate_file_extension(resume_path, &["pdf", "txt", "md"])
            .map_err(|e| CareerCompassError::InvalidInput(format!("Resume file: {}", e)))?;

        info!(
            "Merging skills extracted from {} into the profile",
            resume_path.display()
        );
        let mut input_manager = InputManager::new();
        let text = input_manager.extract_text(resume_path).await?;
        let extractor = FeatureExtractor::new()?;
        profile.merge_skills(extractor.extract_skills(&text));
    }

    Ok(recommend(&catalog, &profile, limit))
}

/// Error payload for guidance commands running with JSON output.
fn print_json_error(error: &CareerCompassError) {
    println!("{}", serde_json::json!({ "error": error.to_string() }));
}

fn render_recommendations(entries: &[RecommendationEntry]) {
    println!("🎯 Career Recommendations\n");

    if entries.is_empty() {
        println!("No careers matched the questionnaire answers.");
        println!("💡 Try adding more interests or skills.");
        return;
    }

    for (i, entry) in entries.iter().enumerate() {
        println!("{}. {} (match score: {})", i + 1, entry.career, entry.score);
        if !entry.details.description.is_empty() {
            println!("   {}", truncate_text(&entry.details.description, 100));
        }
        if !entry.details.salary_range.is_empty() {
            println!("   💰 {}", entry.details.salary_range);
        }
        if !entry.details.job_outlook.is_empty() {
            println!("   📈 {}", entry.details.job_outlook);
        }
        if !entry.match_reasons.is_empty() {
            println!("   ✨ {}", entry.match_reasons.join("; "));
        }
        println!();
    }
}

fn render_comparison(report: &ComparisonReport) {
    println!("⚖️  Career Comparison\n");

    for overview in [&report.first, &report.second] {
        println!("📌 {}", overview.name);
        if !overview.description.is_empty() {
            println!("   {}", truncate_text(&overview.description, 120));
        }
        println!("   • Skill match: {:.1}%", overview.skill_match_percentage);
        if !overview.matching_skills.is_empty() {
            println!("   • Matching skills: {}", overview.matching_skills.join(", "));
        }
        if !overview.missing_skills.is_empty() {
            println!("   • Missing skills: {}", overview.missing_skills.join(", "));
        }
        if !overview.salary_range.is_empty() {
            println!("   • Salary: {}", overview.salary_range);
        }
        if !overview.job_outlook.is_empty() {
            println!("   • Outlook: {}", overview.job_outlook);
        }
        if !overview.work_environment.is_empty() {
            println!("   • Environment: {}", overview.work_environment);
        }
        if !overview.related_careers.is_empty() {
            println!("   • Related: {}", overview.related_careers.join(", "));
        }
        println!();
    }

    let transition = &report.transition;
    println!("🔀 Transition: {} to {}", report.first.name, report.second.name);
    println!("   • Difficulty: {}", transition.level);
    println!("   • Skill overlap: {:.1}%", transition.skill_overlap_percentage);
    if !transition.skill_gap.is_empty() {
        println!("   • Skills to pick up: {}", transition.skill_gap.join(", "));
    }
    if let Some(extra) = &transition.additional_education {
        println!("   • Additional education: {}", extra);
    }
    for note in &transition.notes {
        println!("   💡 {}", note);
    }
}

fn render_roadmap(report: &RoadmapReport) {
    println!("🗺️  Career Roadmap: {}\n", report.career);

    for (i, stage) in report.stages.iter().enumerate() {
        let marker = if stage.is_current { "➤" } else { " " };
        println!("{} {}. {} ({})", marker, i + 1, stage.name, stage.time_estimate);
        if !stage.typical_roles.is_empty() {
            println!("     Roles: {}", stage.typical_roles.join(", "));
        }
        if !stage.skills_to_develop.is_empty() {
            println!("     Skills to develop: {}", stage.skills_to_develop.join(", "));
        }
        if !stage.education.is_empty() {
            println!("     Education: {}", stage.education);
        }
        println!();
    }

    if !report.skill_gaps.is_empty() {
        println!("🎯 Skill gaps to close: {}", report.skill_gaps.join(", "));
    }
    if !report.starting_salary.is_empty() || !report.senior_salary.is_empty() {
        println!(
            "💰 Salary progression: {} to {}",
            report.starting_salary, report.senior_salary
        );
    }
    if !report.resources.is_empty() {
        println!("\n📚 Resources:");
        for resource in &report.resources {
            println!("  • {} ({}): {}", resource.title, resource.kind, resource.url);
        }
    }
}

fn render_career_profile(profile: &CareerProfile) {
    println!("📌 {}", profile.name);
    if !profile.description.is_empty() {
        println!("   {}", profile.description);
    }
    if !profile.required_education.is_empty() {
        println!("   🎓 Education: {}", profile.required_education);
    }
    if !profile.required_skills.is_empty() {
        println!("   🛠️  Skills: {}", profile.required_skills.join(", "));
    }
    if !profile.salary_range.is_empty() {
        println!("   💰 Salary: {}", profile.salary_range);
    }
    if !profile.job_outlook.is_empty() {
        println!("   📈 Outlook: {}", profile.job_outlook);
    }
    if !profile.work_environment.is_empty() {
        println!("   🏢 Environment: {}", profile.work_environment);
    }
    if !profile.related_careers.is_empty() {
        println!("   🔗 Related: {}", profile.related_careers.join(", "));
    }
    if !profile.resources.is_empty() {
        println!("   📚 Resources:");
        for resource in &profile.resources {
            println!("      • {} ({}): {}", resource.title, resource.kind, resource.url);
        }
    }
    println!();
}

/// Truncate text to a maximum length with ellipsis, breaking on a word.
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length).collect();
    let trimmed = match cut.rfind(' ') {
        Some(pos) => &cut[..pos],
        None => cut.as_str(),
    };
    format!("{}...", trimmed)
}
