//! Keyword-triggered detection: label tokens announcing the name parts.
//!
//! Two sub-strategies, tried in order: separate "Nom:" / "Prénom:"
//! labels read independently across the whole page, then a "patient"
//! label followed by an adjacent name pair within a bounded window.

use crate::config::ExtractorConfig;
use crate::models::Word;

use super::candidate::PatientName;
use super::validate::{is_valid_family_name, is_valid_first_name};

/// Scan reading-ordered tokens for label keywords announcing the name.
pub fn detect_with_keywords(config: &ExtractorConfig, words: &[Word]) -> Option<PatientName> {
    // Matching happens on token texts trimmed of surrounding spaces and
    // colons; tokens reduced to nothing are dropped. Indices recorded
    // on the candidate refer to this trimmed sequence.
    let texts: Vec<&str> = words
        .iter()
        .map(|w| w.text.trim_matches([' ', ':']))
        .filter(|t| !t.is_empty())
        .collect();

    if let Some(found) = try_separate_keywords(config, &texts) {
        return Some(found);
    }

    try_patient_keyword(config, &texts)
}

/// Separate-label matching: one forward scan with two independent
/// accumulators. For each kind the last label occurrence followed by a
/// valid token wins: later matches overwrite earlier ones, and the two
/// kinds may come from unrelated positions on the page.
fn try_separate_keywords(config: &ExtractorConfig, texts: &[&str]) -> Option<PatientName> {
    let mut first_name: Option<(usize, &str)> = None;
    let mut family_name: Option<(usize, &str)> = None;

    for (i, text) in texts.iter().enumerate() {
        let Some(next) = texts.get(i + 1) else {
            break;
        };

        let lowered = text.to_lowercase();
        let label = lowered.trim_end_matches(':');

        if config.family_name_keywords.contains(label) && is_valid_family_name(next) {
            family_name = Some((i + 1, *next));
        } else if config.first_name_keywords.contains(label) && is_valid_first_name(next) {
            first_name = Some((i + 1, *next));
        }
    }

    match (first_name, family_name) {
        (Some((first_index, first)), Some((family_index, family))) => {
            PatientName::new(first_index, family_index, first, family).ok()
        }
        _ => None,
    }
}

/// Patient-label matching: a "patient" label opens a bounded window in
/// which the first adjacent (first name, family name) token pair wins.
/// An exhausted window does not stop the scan; a later patient label
/// gets its own window.
fn try_patient_keyword(config: &ExtractorConfig, texts: &[&str]) -> Option<PatientName> {
    for (i, text) in texts.iter().enumerate() {
        let lowered = text.to_lowercase();
        let label = lowered.trim_end_matches(':');

        if !config.patient_keywords.contains(label) {
            continue;
        }

        // Window stops one short of the end so the pair always has room.
        let window_end = (i + config.lookahead).min(texts.len().saturating_sub(1));
        for j in i + 1..window_end {
            if j + 1 >= texts.len() {
                break;
            }
            if is_valid_first_name(texts[j]) && is_valid_family_name(texts[j + 1]) {
                return PatientName::new(j, j + 1, texts[j], texts[j + 1]).ok();
            }
        }
    }

    None
}
