//! Resume score calculation
//!
//! A hand-tuned weighted sum over the quality metrics, starting from a base
//! of 50 and clamped to 0..=100. Career alignment only contributes when a
//! keyword match is supplied.

use crate::processing::matcher::KeywordMatch;
use crate::processing::quality::ResumeAnalysis;

const BASE_SCORE: f64 = 50.0;
const STRUCTURE_BONUS: f64 = 20.0;
const MISSING_SECTION_PENALTY: f64 = 5.0;
const ACTION_VERB_CAP: f64 = 10.0;
const WEAK_PHRASE_CAP: f64 = 5.0;
const QUANTIFIABLE_POINTS: f64 = 5.0;
const QUANTIFIABLE_CAP: f64 = 15.0;
const CONTACT_BONUS: f64 = 7.0;
const LINKEDIN_BONUS: f64 = 3.0;
const ALIGNMENT_WEIGHT: f64 = 0.4;

/// Score a resume from its quality metrics and optional career alignment.
pub fn score_resume(analysis: &ResumeAnalysis, keyword_match: Option<&KeywordMatch>) -> u8 {
    let mut score = BASE_SCORE;

    score += if analysis.missing_sections.is_empty() {
        STRUCTURE_BONUS
    } else {
        (STRUCTURE_BONUS - MISSING_SECTION_PENALTY * analysis.missing_sections.len() as f64)
            .max(0.0)
    };

    score += (analysis.action_verb_count as f64).min(ACTION_VERB_CAP);
    score -= (analysis.weak_phrase_count as f64).min(WEAK_PHRASE_CAP);

    score += (analysis.quantifiable_achievement_count as f64 * QUANTIFIABLE_POINTS)
        .min(QUANTIFIABLE_CAP);

    if analysis.has_complete_contact_info {
        score += CONTACT_BONUS;
    }
    if analysis.has_linkedin {
        score += LINKEDIN_BONUS;
    }

    if let Some(keyword_match) = keyword_match {
        score += keyword_match.match_percentage * ALIGNMENT_WEIGHT;
    }

    score.round().clamp(0.0, 100.0) as u8
}
