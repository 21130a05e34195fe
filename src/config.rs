use std::collections::HashSet;

/// Application-level constants
pub const APP_NAME: &str = "Medinom";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,medinom=debug"
}

/// Configuration for the name-detection engine.
///
/// Built once at startup and shared read-only across all scans; nothing
/// in the engine mutates it afterwards.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Number of tokens after a patient label to search for a name pair.
    pub lookahead: usize,
    /// Sort each page's tokens into reading order before scanning.
    pub sort_document: bool,
    /// Politeness titles that precede a patient's name ("Monsieur Jean DUPONT").
    pub name_prefixes: HashSet<String>,
    /// Doctor titles ("Dr", "Docteur"). Reserved for filtering
    /// practitioner signatures; no detection strategy consults them yet.
    pub doctor_prefixes: HashSet<String>,
    /// Labels announcing the family name ("Nom: DUPONT").
    pub family_name_keywords: HashSet<String>,
    /// Labels announcing the first name ("Prénom: Jean").
    pub first_name_keywords: HashSet<String>,
    /// Labels announcing the full patient identity ("patient: Jean DUPONT").
    pub patient_keywords: HashSet<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            lookahead: 5,
            sort_document: true,
            name_prefixes: to_set(&["monsieur", "madame", "mme", "mlle", "mr", "mrs"]),
            doctor_prefixes: to_set(&["dr", "docteur"]),
            family_name_keywords: to_set(&["nom:", "nom", "nom de famille", "famille"]),
            first_name_keywords: to_set(&["prénom", "prenom"]),
            patient_keywords: to_set(&["patient:", "patient"]),
        }
    }
}

fn to_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lookahead_is_five() {
        let config = ExtractorConfig::default();
        assert_eq!(config.lookahead, 5);
        assert!(config.sort_document);
    }

    #[test]
    fn default_prefixes_cover_politeness_titles() {
        let config = ExtractorConfig::default();
        for title in ["monsieur", "madame", "mme", "mlle"] {
            assert!(config.name_prefixes.contains(title), "missing title {title}");
        }
    }

    #[test]
    fn default_keywords_cover_french_labels() {
        let config = ExtractorConfig::default();
        assert!(config.family_name_keywords.contains("nom"));
        assert!(config.first_name_keywords.contains("prénom"));
        assert!(config.patient_keywords.contains("patient"));
    }

    #[test]
    fn doctor_prefixes_populated() {
        let config = ExtractorConfig::default();
        assert!(config.doctor_prefixes.contains("dr"));
        assert!(config.doctor_prefixes.contains("docteur"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }
}
