use super::validate::{is_valid_family_name, is_valid_first_name};
use super::ExtractionError;

/// A validated patient name and the token positions it was read from.
///
/// Construction validates both parts, so a `PatientName` can never hold
/// a string that fails its format check. Indices refer to positions in
/// the token sequence the detecting strategy scanned: reading-ordered
/// for prefix detection, and with empty tokens dropped for keyword
/// detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientName {
    first_name: String,
    family_name: String,
    first_name_index: usize,
    family_name_index: usize,
}

impl PatientName {
    /// Build a candidate, rejecting any part that fails its validator.
    pub fn new(
        first_name_index: usize,
        family_name_index: usize,
        first_name: &str,
        family_name: &str,
    ) -> Result<Self, ExtractionError> {
        if !is_valid_first_name(first_name) {
            return Err(ExtractionError::InvalidFirstName(first_name.to_string()));
        }
        if !is_valid_family_name(family_name) {
            return Err(ExtractionError::InvalidFamilyName(family_name.to_string()));
        }

        Ok(Self {
            first_name: first_name.to_string(),
            family_name: family_name.to_string(),
            first_name_index,
            family_name_index,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn first_name_index(&self) -> usize {
        self.first_name_index
    }

    pub fn family_name_index(&self) -> usize {
        self.family_name_index
    }
}
