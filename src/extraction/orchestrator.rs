//! Scan orchestration: reading order, then prefix detection, then
//! keyword detection, page by page until a candidate is found.

use tracing::{debug, info};

use crate::config::ExtractorConfig;
use crate::models::{MedicalDocument, Page};

use super::candidate::PatientName;
use super::keyword::detect_with_keywords;
use super::ordering::reading_order;
use super::prefix::detect_with_prefix;
use super::ExtractionError;

/// The name-detection engine. Holds the immutable configuration; every
/// scan is a pure function of its input, so one instance serves any
/// number of concurrent callers.
#[derive(Debug, Default)]
pub struct NameExtractor {
    config: ExtractorConfig,
}

impl NameExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Scan a document for the patient's name.
    ///
    /// Pages are visited in order; the first page producing a candidate
    /// short-circuits the rest. `Ok(None)` means the document is well
    /// formed but no name was found.
    pub fn extract_patient_name(
        &self,
        document: &MedicalDocument,
    ) -> Result<Option<PatientName>, ExtractionError> {
        let pages = document
            .pages
            .as_ref()
            .ok_or(ExtractionError::MissingPages)?;

        info!(pages = pages.len(), "scanning document for patient name");

        for (page_index, page) in pages.iter().enumerate() {
            debug!(page = page_index, "scanning page");
            if let Some(found) = self.detect_on_page(page, page_index)? {
                info!(
                    page = page_index,
                    first_name_index = found.first_name_index(),
                    family_name_index = found.family_name_index(),
                    "patient name found"
                );
                return Ok(Some(found));
            }
        }

        info!("no patient name found in document");
        Ok(None)
    }

    /// Scan a single page: order tokens, then try the strategies in
    /// priority order: prefix detection first, keywords as fallback.
    pub fn detect_on_page(
        &self,
        page: &Page,
        page_index: usize,
    ) -> Result<Option<PatientName>, ExtractionError> {
        let words = page
            .words
            .as_ref()
            .ok_or(ExtractionError::MissingWords { page: page_index })?;

        if words.is_empty() {
            return Ok(None);
        }

        let ordered = reading_order(words, self.config.sort_document);

        if let Some(found) = detect_with_prefix(&self.config, &ordered) {
            return Ok(Some(found));
        }

        Ok(detect_with_keywords(&self.config, &ordered))
    }
}
