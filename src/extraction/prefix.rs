//! Prefix-triggered detection: a politeness title ("Monsieur",
//! "Madame") followed by the patient's name in either order.

use crate::config::ExtractorConfig;
use crate::models::Word;

use super::candidate::PatientName;
use super::validate::{is_valid_family_name, is_valid_first_name};

/// Scan reading-ordered tokens for a name prefix followed by two tokens
/// forming a valid first + family name pair.
///
/// Both assignments are tried at each prefix site: first name then
/// family name, and the reverse. The first site where either assignment
/// validates wins; a site where neither does is skipped and the scan
/// continues.
pub fn detect_with_prefix(config: &ExtractorConfig, words: &[Word]) -> Option<PatientName> {
    for (i, word) in words.iter().enumerate() {
        if i + 2 >= words.len() {
            continue;
        }

        if !config.name_prefixes.contains(&word.text.to_lowercase()) {
            continue;
        }

        let next = words[i + 1].text.as_str();
        let after_next = words[i + 2].text.as_str();

        if is_valid_first_name(next) && is_valid_family_name(after_next) {
            return PatientName::new(i + 1, i + 2, next, after_next).ok();
        }
        if is_valid_first_name(after_next) && is_valid_family_name(next) {
            return PatientName::new(i + 2, i + 1, after_next, next).ok();
        }
    }

    None
}
