//! CLI interface for the career compass

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-compass")]
#[command(about = "Career guidance tool: resume analysis, scoring, and recommendations")]
#[command(
    long_about = "Analyze and score resumes, match them against careers, and explore recommendations, career comparisons, and progression roadmaps"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze and score a resume
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target career to match the resume against
        #[arg(short = 't', long)]
        career: Option<String>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Recommend careers from questionnaire answers
    Recommend {
        /// Interests, comma separated (e.g. "technology,design")
        #[arg(short, long, value_delimiter = ',')]
        interests: Vec<String>,

        /// Skills, comma separated
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Work values, comma separated: worklife, compensation, growth
        #[arg(long, value_delimiter = ',')]
        values: Vec<String>,

        /// Personality type: analytical, creative, leader, social
        #[arg(short, long, default_value = "")]
        personality: String,

        /// Education level: highschool, associate, bachelor, master, phd
        #[arg(short, long, default_value = "")]
        education: String,

        /// Preferred work environment keywords, comma separated
        #[arg(short = 'w', long, value_delimiter = ',')]
        environment: Vec<String>,

        /// Resume file whose extracted skills supplement the questionnaire
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Maximum number of recommendations
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Compare two careers and the transition between them
    Compare {
        /// Career to transition from
        first: String,

        /// Career to transition to
        second: String,

        /// Your skills, comma separated
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Years of professional experience
        #[arg(short, long, default_value_t = 0)]
        experience_years: u32,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show the progression roadmap for a career
    Roadmap {
        /// Career name
        career: String,

        /// Current level: entry, mid, senior, expert
        #[arg(short, long, default_value = "entry")]
        level: String,

        /// Your skills, comma separated
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// List known careers
    Careers {
        /// Show full career profiles
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Parse output format for guidance commands, which render console or JSON
pub fn parse_guidance_output_format(
    format: &str,
) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_output_format_parsing() {
        assert!(matches!(
            parse_output_format("console"),
            Ok(OutputFormat::Console)
        ));
        assert!(matches!(parse_output_format("MD"), Ok(OutputFormat::Markdown)));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_guidance_output_format_rejects_document_formats() {
        assert!(matches!(
            parse_guidance_output_format("json"),
            Ok(OutputFormat::Json)
        ));
        assert!(parse_guidance_output_format("html").is_err());
    }

    #[test]
    fn test_extension_validation() {
        assert!(validate_file_extension(&PathBuf::from("resume.pdf"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("resume.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("resume"), &["pdf"]).is_err());
    }

    #[test]
    fn test_cli_parses_analyze_invocation() {
        let cli = Cli::try_parse_from([
            "career-compass",
            "analyze",
            "--resume",
            "resume.pdf",
            "--career",
            "Software Developer",
            "--detailed",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                resume,
                career,
                detailed,
                output,
                save,
            } => {
                assert_eq!(resume, PathBuf::from("resume.pdf"));
                assert_eq!(career.as_deref(), Some("Software Developer"));
                assert!(detailed);
                assert_eq!(output, "console");
                assert!(save.is_none());
            }
            _ => panic!("Expected analyze command"),
        }
    }

    #[test]
    fn test_cli_splits_comma_lists() {
        let cli = Cli::try_parse_from([
            "career-compass",
            "recommend",
            "--interests",
            "technology,design",
            "--skills",
            "python,sql",
        ])
        .unwrap();

        match cli.command {
            Commands::Recommend {
                interests, skills, ..
            } => {
                assert_eq!(interests, vec!["technology", "design"]);
                assert_eq!(skills, vec!["python", "sql"]);
            }
            _ => panic!("Expected recommend command"),
        }
    }
}
