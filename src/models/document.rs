//! Wire schema for machine-read documents: pages of positioned words.
//!
//! Mirrors the JSON the document reader produces; every word carries
//! its bounding box in normalized page coordinates. `pages` and `words`
//! are optional at the type level: their absence is a structural error
//! the scanner reports, distinct from a legitimately empty page.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a word, in normalized page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// A single machine-read token with its position on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub bbox: BoundingBox,
}

/// One page of a document. A missing `words` field is malformed input;
/// an empty list is a page that simply has no text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
}

/// A machine-read medical document as uploaded by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicalDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,
}
