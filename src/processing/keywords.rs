//! Static keyword vocabularies for resume analysis
//!
//! Every table is lower-case; extraction and matching always run against a
//! lower-cased copy of the input text, so the tables never need case folding.

use std::collections::HashSet;

/// Programming languages, frameworks, platforms.
pub fn technical_skills() -> Vec<&'static str> {
    vec![
        "python",
        "javascript",
        "typescript",
        "java",
        "c++",
        "c#",
        "sql",
        "html",
        "css",
        "react",
        "angular",
        "vue",
        "node.js",
        "django",
        "flask",
        "spring",
        "ruby on rails",
        "php",
        "swift",
        "kotlin",
        "golang",
        "rust",
        "aws",
        "azure",
        "gcp",
        "docker",
        "kubernetes",
        "terraform",
        "git",
        "linux",
        "rest api",
        "graphql",
        "machine learning",
        "data analysis",
        "statistics",
    ]
}

/// Interpersonal and organizational skills.
pub fn soft_skills() -> Vec<&'static str> {
    vec![
        "leadership",
        "communication",
        "teamwork",
        "problem solving",
        "critical thinking",
        "time management",
        "project management",
        "creativity",
        "adaptability",
        "collaboration",
        "public speaking",
        "negotiation",
        "mentoring",
        "decision making",
    ]
}

/// Workplace tools and methodologies.
pub fn tool_skills() -> Vec<&'static str> {
    vec![
        "excel",
        "powerpoint",
        "tableau",
        "power bi",
        "photoshop",
        "illustrator",
        "figma",
        "salesforce",
        "jira",
        "confluence",
        "agile",
        "scrum",
        "kanban",
        "six sigma",
    ]
}

/// The complete skill vocabulary in category order. Extracted skills are
/// always a subset of this list.
pub fn all_skills() -> Vec<&'static str> {
    let mut all = technical_skills();
    all.extend(soft_skills());
    all.extend(tool_skills());
    all
}

/// Words that mark a sentence as education-related.
pub fn education_keywords() -> Vec<&'static str> {
    vec![
        "bachelor",
        "master",
        "phd",
        "doctorate",
        "associate",
        "mba",
        "degree",
        "university",
        "college",
        "institute",
        "diploma",
        "certification",
        "certificate",
        "gpa",
        "graduated",
        "coursework",
    ]
}

/// Section headings a resume may carry, matched as plain substrings.
pub fn resume_sections() -> Vec<&'static str> {
    vec![
        "summary",
        "objective",
        "profile",
        "experience",
        "work experience",
        "employment",
        "work history",
        "education",
        "academic",
        "qualifications",
        "training",
        "skills",
        "abilities",
        "competencies",
        "expertise",
        "projects",
        "achievements",
        "accomplishments",
        "certifications",
        "certificates",
        "licenses",
        "volunteer",
        "community service",
        "languages",
        "interests",
        "hobbies",
        "activities",
    ]
}

/// Sections every resume is expected to have. Missing-section checks run
/// against this list only, never the full heading table.
pub fn required_sections() -> Vec<&'static str> {
    vec!["summary", "experience", "education", "skills"]
}

/// Verbs that signal ownership of results.
pub fn strong_action_verbs() -> Vec<&'static str> {
    vec![
        "achieved",
        "improved",
        "increased",
        "decreased",
        "reduced",
        "saved",
        "developed",
        "created",
        "designed",
        "implemented",
        "launched",
        "established",
        "managed",
        "led",
        "directed",
        "supervised",
        "mentored",
        "trained",
        "analyzed",
        "evaluated",
        "researched",
        "identified",
        "solved",
        "resolved",
        "coordinated",
        "organized",
        "planned",
        "executed",
        "delivered",
        "produced",
        "negotiated",
        "secured",
        "obtained",
        "generated",
        "streamlined",
        "optimized",
    ]
}

/// Passive phrasing that weakens accomplishment statements.
pub fn weak_phrases() -> Vec<&'static str> {
    vec![
        "responsible for",
        "duties included",
        "worked on",
        "helped with",
        "assisted with",
        "was tasked with",
        "tried to",
        "attempted to",
        "was involved in",
        "participated in",
        "supported",
        "handled",
    ]
}

/// English stop words removed before single-word skill matching.
pub fn stop_words() -> HashSet<&'static str> {
    vec![
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "did", "do", "does", "doing", "down", "during", "each",
        "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
        "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it",
        "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not",
        "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
        "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
        "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
        "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
        "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
        "with", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
}
