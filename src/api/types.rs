//! Shared types for the HTTP layer.

use std::sync::Arc;

use crate::extraction::NameExtractor;

/// Shared context for all API routes: the engine with its immutable
/// configuration. Scans hold no mutable state, so one engine instance
/// serves every request concurrently.
#[derive(Clone)]
pub struct ApiContext {
    pub extractor: Arc<NameExtractor>,
}

impl ApiContext {
    pub fn new(extractor: NameExtractor) -> Self {
        Self {
            extractor: Arc::new(extractor),
        }
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::new(NameExtractor::default())
    }
}
