//! French name-format validators: the sole gate for accepting a token
//! as part of a patient name.
//!
//! The modeled convention is the one printed French medical documents
//! follow: first names capitalized ("Jean"), family names fully
//! uppercase ("DUPONT"). Checks are Unicode-aware so accented names
//! ("Éric", "LEFÈVRE") validate like their ASCII counterparts.

/// Validate a French first name: at least 2 characters, fully
/// alphabetic, first character uppercase, the rest lowercase.
pub fn is_valid_first_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();

    !rest.is_empty()
        && first.is_uppercase()
        && rest.chars().all(char::is_lowercase)
        && name.chars().all(char::is_alphabetic)
}

/// Validate a French family name: at least 2 characters, fully
/// alphabetic, every character uppercase.
pub fn is_valid_family_name(name: &str) -> bool {
    name.chars().count() >= 2
        && name.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── First name ──────────────────────────────────────────────────

    #[test]
    fn first_name_accepts_capitalized() {
        assert!(is_valid_first_name("Jean"));
        assert!(is_valid_first_name("Pierre"));
        assert!(is_valid_first_name("Jo"));
    }

    #[test]
    fn first_name_accepts_accented() {
        assert!(is_valid_first_name("Éric"));
        assert!(is_valid_first_name("Aurélie"));
    }

    #[test]
    fn first_name_rejects_wrong_casing() {
        assert!(!is_valid_first_name("jean"));
        assert!(!is_valid_first_name("JEAN"));
        assert!(!is_valid_first_name("JeAn"));
    }

    #[test]
    fn first_name_rejects_non_alphabetic() {
        assert!(!is_valid_first_name("Jean-Pierre"));
        assert!(!is_valid_first_name("J3an"));
        assert!(!is_valid_first_name("Jean "));
    }

    #[test]
    fn first_name_rejects_too_short() {
        assert!(!is_valid_first_name(""));
        assert!(!is_valid_first_name("J"));
    }

    // ── Family name ─────────────────────────────────────────────────

    #[test]
    fn family_name_accepts_uppercase() {
        assert!(is_valid_family_name("DUPONT"));
        assert!(is_valid_family_name("MARTIN"));
        assert!(is_valid_family_name("DE"));
    }

    #[test]
    fn family_name_accepts_accented_uppercase() {
        assert!(is_valid_family_name("LEFÈVRE"));
    }

    #[test]
    fn family_name_rejects_wrong_casing() {
        assert!(!is_valid_family_name("dupont"));
        assert!(!is_valid_family_name("Dupont"));
        assert!(!is_valid_family_name("DuPont"));
    }

    #[test]
    fn family_name_rejects_non_alphabetic() {
        assert!(!is_valid_family_name("DUPONT-MARTIN"));
        assert!(!is_valid_family_name("DUP0NT"));
        assert!(!is_valid_family_name("DUPONT:"));
    }

    #[test]
    fn family_name_rejects_too_short() {
        assert!(!is_valid_family_name(""));
        assert!(!is_valid_family_name("D"));
    }

    // ── Mutual exclusivity ──────────────────────────────────────────

    #[test]
    fn validators_are_mutually_exclusive() {
        for name in ["Jean", "DUPONT", "Éric", "LEFÈVRE", "Jo", "DE"] {
            assert!(
                !(is_valid_first_name(name) && is_valid_family_name(name)),
                "{name} validated as both first and family name"
            );
        }
    }
}
