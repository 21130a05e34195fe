//! Reading-order sort for a page's tokens.
//!
//! Two passes: first by `y_min`, then by `x_min`. Both passes use a
//! stable sort, so ties keep the order established before them.

use crate::models::Word;

/// Order a page's tokens for scanning. With `sort_document` disabled
/// the tokens are used exactly as the document source produced them.
pub fn reading_order(words: &[Word], sort_document: bool) -> Vec<Word> {
    let mut ordered = words.to_vec();
    if sort_document {
        ordered.sort_by(|a, b| a.bbox.y_min.total_cmp(&b.bbox.y_min));
        ordered.sort_by(|a, b| a.bbox.x_min.total_cmp(&b.bbox.x_min));
    }
    ordered
}
