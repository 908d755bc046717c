//! Output formatters for optimization reports

use crate::config::OutputFormat;
use crate::error::{CareerCompassError, Result};
use crate::output::report::{OptimizationReport, ScoreBand};
use crate::processing::suggestions::{Impact, SuggestionItem};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering optimization reports into one output format.
pub trait OutputFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and sectioned layout.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and API integration.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing.
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with inline styling.
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Coordinates the individual formatters behind one entry point.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

const MISSING_SKILL_DISPLAY_LIMIT: usize = 8;

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section {
            margin: 25px 0;
        }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .metrics {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 15px;
            margin: 20px 0;
        }
        .metric-item {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #007acc;
        }
        .suggestions {
            background: #f8f9fa;
            padding: 20px;
            border-radius: 6px;
            margin: 15px 0;
        }
        .suggestion {
            background: white;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #17a2b8;
        }
        .impact-critical { border-left-color: #dc3545; }
        .impact-high { border-left-color: #ffc107; }
        .impact-medium { border-left-color: #17a2b8; }
        .missing { color: #dc3545; }
        ul { margin: 10px 0; }
        li { margin: 5px 0; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📄 Resume Analysis Report</h1>
            <p>Generated: {{ generated_at }} | Resume: {{ resume_file }}</p>
        </div>

        <div class="section">
            <h2>Overview</h2>
            <h3>Overall Score: {{ overall_score }}/100 <span class="score-badge {{ score_class }}">{{ score_label }}</span></h3>
            <p><strong>Verdict:</strong> {{ verdict }}</p>
            {% if has_target_career %}
            <p><strong>Target Career:</strong> {{ target_career }}</p>
            {% endif %}
        </div>

        <div class="section">
            <h2>Resume Structure</h2>
            <div class="metrics">
                <div class="metric-item">
                    <h4>Words</h4>
                    <p><strong>{{ word_count }}</strong></p>
                </div>
                <div class="metric-item">
                    <h4>Bullet Points</h4>
                    <p><strong>{{ bullet_point_count }}</strong></p>
                </div>
                <div class="metric-item">
                    <h4>Action Verbs</h4>
                    <p><strong>{{ action_verb_count }}</strong></p>
                </div>
                <div class="metric-item">
                    <h4>Quantified Results</h4>
                    <p><strong>{{ quantifiable_count }}</strong></p>
                </div>
            </div>
            <p><strong>Sections found:</strong> {{ sections_found }}</p>
            {% if has_missing_sections %}
            <p class="missing"><strong>Missing sections:</strong> {{ missing_sections }}</p>
            {% endif %}
            <p><strong>Contact info:</strong> {{ contact_status }} | <strong>LinkedIn:</strong> {{ linkedin_status }}</p>
        </div>

        {% if has_skills %}
        <div class="section">
            <h2>Extracted Profile</h2>
            <p><strong>Experience:</strong> {{ experience_years }} years</p>
            <p><strong>Skills:</strong> {{ skills }}</p>
        </div>
        {% endif %}

        {% if has_alignment %}
        <div class="section">
            <h2>Career Alignment: {{ target_career }}</h2>
            <p><strong>Match:</strong> {{ match_percentage }}% of required skills</p>
            {{ alignment_html|safe }}
        </div>
        {% endif %}

        {% if has_suggestions %}
        <div class="section">
            <h2>💡 Suggestions</h2>
            <div class="suggestions">
                {{ suggestions_html|safe }}
            </div>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>ℹ️ Generated by Career Compass v{{ version }}</strong></p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    resume_file: String,
    overall_score: u8,
    score_class: String,
    score_label: String,
    verdict: String,
    has_target_career: bool,
    target_career: String,
    word_count: usize,
    bullet_point_count: usize,
    action_verb_count: usize,
    quantifiable_count: usize,
    sections_found: String,
    has_missing_sections: bool,
    missing_sections: String,
    contact_status: String,
    linkedin_status: String,
    has_skills: bool,
    experience_years: u32,
    skills: String,
    has_alignment: bool,
    match_percentage: String,
    alignment_html: String,
    has_suggestions: bool,
    suggestions_html: String,
    version: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let (badge, color) = match band {
            ScoreBand::Excellent => ("EXCELLENT", Color::Green),
            ScoreBand::Good => ("GOOD", Color::Yellow),
            ScoreBand::Fair => ("FAIR", Color::BrightYellow),
            ScoreBand::NeedsWork => ("NEEDS WORK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_impact_icon(&self, impact: Impact) -> String {
        if self.use_colors {
            let icon = match impact {
                Impact::Critical => "🚨",
                Impact::High => "⚠️",
                Impact::Medium => "📋",
            };
            format!("{} ", icon)
        } else {
            let icon = match impact {
                Impact::Critical => "[!]",
                Impact::High => "[*]",
                Impact::Medium => "[-]",
            };
            format!("{} ", icon)
        }
    }

    fn yes_no(flag: bool, yes: &'static str, no: &'static str) -> &'static str {
        if flag {
            yes
        } else {
            no
        }
    }

    fn join_limited(items: &[String], limit: usize) -> String {
        if items.len() <= limit {
            items.join(", ")
        } else {
            format!(
                "{} (+{} more)",
                items[..limit].join(", "),
                items.len() - limit
            )
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📄 RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!("Resume: {}\n", report.resume_file_name()));

        output.push_str(&self.format_header("Overview", 2));
        output.push_str(&format!(
            "Overall Score: {}/100 {}\n",
            report.overall_score,
            self.format_score_badge(report.band())
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(report.verdict(), Color::Cyan)
        ));
        if let Some(career) = &report.target_career {
            output.push_str(&format!("Target Career: {}\n", career));
        }

        let analysis = &report.analysis;
        output.push_str(&self.format_header("Resume Structure", 3));
        output.push_str(&format!(
            "Words: {} | Bullet points: {}\n",
            analysis.word_count, analysis.bullet_point_count
        ));
        let sections: Vec<String> = analysis.sections_present.iter().cloned().collect();
        output.push_str(&format!(
            "Sections found: {}\n",
            if sections.is_empty() {
                "none".to_string()
            } else {
                sections.join(", ")
            }
        ));
        if !analysis.missing_sections.is_empty() {
            let missing: Vec<String> = analysis.missing_sections.iter().cloned().collect();
            output.push_str(&format!(
                "Missing sections: {}\n",
                self.colorize(&missing.join(", "), Color::Red)
            ));
        }

        output.push_str(&self.format_header("Writing Quality", 3));
        output.push_str(&format!(
            "Action verbs: {} | Weak phrases: {}\n",
            analysis.action_verb_count, analysis.weak_phrase_count
        ));
        output.push_str(&format!(
            "Quantifiable achievements: {}\n",
            analysis.quantifiable_achievement_count
        ));
        output.push_str(&format!(
            "Contact info: {} | LinkedIn: {}\n",
            Self::yes_no(analysis.has_complete_contact_info, "complete", "incomplete"),
            Self::yes_no(analysis.has_linkedin, "found", "not found")
        ));

        output.push_str(&self.format_header("Extracted Profile", 3));
        output.push_str(&format!(
            "Experience: {} years\n",
            report.features.experience_years
        ));
        let skills: Vec<String> = report.features.skills.iter().cloned().collect();
        if skills.is_empty() {
            output.push_str("Skills: none recognized\n");
        } else {
            output.push_str(&format!(
                "Skills ({}): {}\n",
                skills.len(),
                skills.join(", ")
            ));
        }

        if let (Some(career), Some(keyword_match)) = (&report.target_career, &report.keyword_match)
        {
            output.push_str(&self.format_header(&format!("Career Alignment: {}", career), 2));
            output.push_str(&format!(
                "Match: {}% of required skills\n",
                keyword_match.match_percentage
            ));
            if !keyword_match.matching_skills.is_empty() {
                output.push_str(&format!(
                    "Matching: {}\n",
                    self.colorize(&keyword_match.matching_skills.join(", "), Color::Green)
                ));
            }
            if !keyword_match.missing_skills.is_empty() {
                let missing = if self.detailed {
                    keyword_match.missing_skills.join(", ")
                } else {
                    Self::join_limited(&keyword_match.missing_skills, MISSING_SKILL_DISPLAY_LIMIT)
                };
                output.push_str(&format!(
                    "Missing: {}\n",
                    self.colorize(&missing, Color::Yellow)
                ));
            }
        }

        if !report.suggestions.is_empty() {
            output.push_str(&self.format_header("💡 Suggestions", 2));
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {}{} {}\n",
                    i + 1,
                    self.format_impact_icon(suggestion.impact),
                    self.colorize(&suggestion.title, Color::White),
                    self.colorize(&format!("({})", suggestion.category), Color::BrightBlack)
                ));
                output.push_str(&format!("   {}\n\n", suggestion.description));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("📊 Detailed Analysis", 2));

            if !analysis.common_words.is_empty() {
                output.push_str("Most common words:\n");
                for (word, count) in &analysis.common_words {
                    output.push_str(&format!("  {} x{}\n", word, count));
                }
                output.push('\n');
            }

            if !report.features.education.is_empty() {
                output.push_str("Education mentions:\n");
                for sentence in &report.features.education {
                    output.push_str(&format!("  • {}\n", sentence));
                }
            }
        }

        output.push_str(&format!(
            "\n{} Generated by Career Compass v{}\n",
            self.colorize("ℹ️", Color::Blue),
            env!("CARGO_PKG_VERSION")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(band: ScoreBand) -> &'static str {
        match band {
            ScoreBand::Excellent => "🟢 Excellent",
            ScoreBand::Good => "🟡 Good",
            ScoreBand::Fair => "🟠 Fair",
            ScoreBand::NeedsWork => "🔴 Needs Work",
        }
    }

    fn format_markdown_suggestion(index: usize, suggestion: &SuggestionItem) -> String {
        let mut output = format!("#### {}. {}\n\n", index, suggestion.title);
        output.push_str(&format!(
            "**Category:** {} | **Impact:** {}\n\n",
            suggestion.category, suggestion.impact
        ));
        output.push_str(&format!("{}\n\n", suggestion.description));
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📄 Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}`\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.resume_file_name()
            ));
        }

        output.push_str("## Overview\n\n");
        output.push_str(&format!(
            "**Overall Score:** {}/100 {}\n\n",
            report.overall_score,
            Self::markdown_score_badge(report.band())
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict()));
        if let Some(career) = &report.target_career {
            output.push_str(&format!("**Target Career:** {}\n\n", career));
        }

        let analysis = &report.analysis;
        output.push_str("## Resume Metrics\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Words | {} |\n", analysis.word_count));
        output.push_str(&format!(
            "| Bullet points | {} |\n",
            analysis.bullet_point_count
        ));
        output.push_str(&format!(
            "| Action verbs | {} |\n",
            analysis.action_verb_count
        ));
        output.push_str(&format!(
            "| Weak phrases | {} |\n",
            analysis.weak_phrase_count
        ));
        output.push_str(&format!(
            "| Quantifiable achievements | {} |\n",
            analysis.quantifiable_achievement_count
        ));
        output.push_str(&format!(
            "| Contact info | {} |\n",
            if analysis.has_complete_contact_info {
                "complete"
            } else {
                "incomplete"
            }
        ));
        output.push_str(&format!(
            "| LinkedIn | {} |\n\n",
            if analysis.has_linkedin {
                "found"
            } else {
                "not found"
            }
        ));

        let sections: Vec<String> = analysis.sections_present.iter().cloned().collect();
        if !sections.is_empty() {
            output.push_str(&format!("**Sections found:** {}\n\n", sections.join(", ")));
        }
        if !analysis.missing_sections.is_empty() {
            let missing: Vec<String> = analysis.missing_sections.iter().cloned().collect();
            output.push_str(&format!("**Missing sections:** {}\n\n", missing.join(", ")));
        }

        let skills: Vec<String> = report.features.skills.iter().cloned().collect();
        output.push_str("## Extracted Profile\n\n");
        output.push_str(&format!(
            "- **Experience:** {} years\n",
            report.features.experience_years
        ));
        output.push_str(&format!(
            "- **Skills:** {}\n\n",
            if skills.is_empty() {
                "none recognized".to_string()
            } else {
                skills.join(", ")
            }
        ));

        if let (Some(career), Some(keyword_match)) = (&report.target_career, &report.keyword_match)
        {
            output.push_str(&format!("## Career Alignment: {}\n\n", career));
            output.push_str(&format!(
                "**Match:** {}% of required skills\n\n",
                keyword_match.match_percentage
            ));
            if !keyword_match.matching_skills.is_empty() {
                output.push_str(&format!(
                    "**Matching:** {}\n\n",
                    keyword_match.matching_skills.join(", ")
                ));
            }
            if !keyword_match.missing_skills.is_empty() {
                output.push_str(&format!(
                    "**Missing:** {}\n\n",
                    keyword_match.missing_skills.join(", ")
                ));
            }
        }

        if !report.suggestions.is_empty() {
            output.push_str("## 💡 Suggestions\n\n");

            let critical = report.suggestions_with_impact(Impact::Critical);
            let high = report.suggestions_with_impact(Impact::High);
            let medium = report.suggestions_with_impact(Impact::Medium);

            if !critical.is_empty() {
                output.push_str("### 🚨 Critical\n\n");
                for (i, suggestion) in critical.iter().enumerate() {
                    output.push_str(&Self::format_markdown_suggestion(i + 1, suggestion));
                }
            }
            if !high.is_empty() {
                output.push_str("### ⚠️ High Impact\n\n");
                for (i, suggestion) in high.iter().enumerate() {
                    output.push_str(&Self::format_markdown_suggestion(i + 1, suggestion));
                }
            }
            if !medium.is_empty() {
                output.push_str("### 📋 Medium Impact\n\n");
                for (i, suggestion) in medium.iter().enumerate() {
                    output.push_str(&Self::format_markdown_suggestion(i + 1, suggestion));
                }
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Career Compass v{}*\n",
                env!("CARGO_PKG_VERSION")
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &OptimizationReport) -> HtmlTemplate {
        let band = report.band();
        let analysis = &report.analysis;

        let sections: Vec<String> = analysis.sections_present.iter().cloned().collect();
        let missing: Vec<String> = analysis.missing_sections.iter().cloned().collect();
        let skills: Vec<String> = report.features.skills.iter().cloned().collect();

        let alignment_html = report
            .keyword_match
            .as_ref()
            .map(|keyword_match| {
                let mut html = String::new();
                if !keyword_match.matching_skills.is_empty() {
                    html.push_str(&format!(
                        "<p><strong>Matching:</strong> {}</p>\n",
                        keyword_match.matching_skills.join(", ")
                    ));
                }
                if !keyword_match.missing_skills.is_empty() {
                    html.push_str(&format!(
                        "<p class=\"missing\"><strong>Missing:</strong> {}</p>\n",
                        keyword_match.missing_skills.join(", ")
                    ));
                }
                html
            })
            .unwrap_or_default();

        let suggestions_html = report
            .suggestions
            .iter()
            .map(|suggestion| {
                let impact_class = match suggestion.impact {
                    Impact::Critical => "critical",
                    Impact::High => "high",
                    Impact::Medium => "medium",
                };
                format!(
                    "<div class=\"suggestion impact-{}\">\n    <h4>{}</h4>\n    <p><strong>Category:</strong> {} | <strong>Impact:</strong> {}</p>\n    <p>{}</p>\n</div>",
                    impact_class,
                    suggestion.title,
                    suggestion.category,
                    suggestion.impact,
                    suggestion.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            resume_file: report.resume_file_name(),
            overall_score: report.overall_score,
            score_class: band.css_class().to_string(),
            score_label: band.label().to_string(),
            verdict: report.verdict().to_string(),
            has_target_career: report.target_career.is_some(),
            target_career: report.target_career.clone().unwrap_or_default(),
            word_count: analysis.word_count,
            bullet_point_count: analysis.bullet_point_count,
            action_verb_count: analysis.action_verb_count,
            quantifiable_count: analysis.quantifiable_achievement_count,
            sections_found: if sections.is_empty() {
                "none".to_string()
            } else {
                sections.join(", ")
            },
            has_missing_sections: !missing.is_empty(),
            missing_sections: missing.join(", "),
            contact_status: if analysis.has_complete_contact_info {
                "complete".to_string()
            } else {
                "incomplete".to_string()
            },
            linkedin_status: if analysis.has_linkedin {
                "found".to_string()
            } else {
                "not found".to_string()
            },
            has_skills: !skills.is_empty(),
            experience_years: report.features.experience_years,
            skills: skills.join(", "),
            has_alignment: report.keyword_match.is_some() && report.target_career.is_some(),
            match_percentage: report
                .keyword_match
                .as_ref()
                .map(|m| format!("{}", m.match_percentage))
                .unwrap_or_default(),
            alignment_html,
            has_suggestions: !report.suggestions.is_empty(),
            suggestions_html,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let template_data = self.create_template_data(report);
        template_data
            .render()
            .map_err(|e| CareerCompassError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(
        &self,
        report: &OptimizationReport,
        format: &OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Write rendered report content to a file, creating parent directories.
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Default output file name for a report in the given format.
pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_analysis{}.html", base_name, timestamp_suffix),
    }
}
