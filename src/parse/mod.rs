//! Text extraction and counting.
//!
//! This module pulls names out of the site sources and counts things in them:
//! - Product labels, click-handler callees and categories from the document
//! - Declared function names from the script
//! - Raw substring and line counts
//!
//! Extraction is regex based and deliberately approximate: comments, quoted
//! strings and nesting are not distinguished from live markup.

mod counting;
mod extract;

// Re-export public API
pub use counting::{
    count_occurrences, frequency_table, line_count, normalize_newlines, FrequencyTable,
};
pub use extract::{
    extract_categories, extract_click_handlers, extract_declared_functions,
    extract_product_labels,
};
