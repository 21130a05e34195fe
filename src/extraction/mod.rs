pub mod validate;
pub mod candidate;
pub mod ordering;
pub mod prefix;
pub mod keyword;
pub mod orchestrator;

pub use candidate::*;
pub use orchestrator::*;
pub use validate::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("document must contain a 'pages' field")]
    MissingPages,

    #[error("page {page} must contain a 'words' field")]
    MissingWords { page: usize },

    #[error("invalid French first name format: {0}")]
    InvalidFirstName(String),

    #[error("invalid French family name format: {0}")]
    InvalidFamilyName(String),
}
