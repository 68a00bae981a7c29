//! Regex extraction of names from the document and script.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    CATEGORY_PATTERN, CLICK_HANDLER_PATTERN, FUNCTION_DECLARATION_PATTERN, PRODUCT_LABEL_PATTERN,
};

/// Helper function to compile a static regex pattern, panicking with a detailed error message
/// if compilation fails. Only used for compile-time constant patterns.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static PRODUCT_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PRODUCT_LABEL_PATTERN, "PRODUCT_LABEL_REGEX"));
static CLICK_HANDLER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(CLICK_HANDLER_PATTERN, "CLICK_HANDLER_REGEX"));
static FUNCTION_DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(FUNCTION_DECLARATION_PATTERN, "FUNCTION_DECLARATION_REGEX")
});
static CATEGORY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(CATEGORY_PATTERN, "CATEGORY_REGEX"));

/// Returns the first capture group of every match, in document order.
fn captures(regex: &Regex, text: &str) -> Vec<String> {
    regex
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts every product label (`alt="..."` value) from the document.
///
/// Duplicates are kept; counting them is the point.
pub fn extract_product_labels(html: &str) -> Vec<String> {
    let labels = captures(&PRODUCT_LABEL_REGEX, html);
    log::debug!("Found {} product labels", labels.len());
    labels
}

/// Extracts the set of function names called from inline `onclick` handlers.
///
/// Only the callee at the very start of the attribute value is taken, so
/// `onclick="openCart('x')"` yields `openCart` while `onclick="return f()"`
/// yields nothing.
pub fn extract_click_handlers(html: &str) -> BTreeSet<String> {
    let names: BTreeSet<String> = captures(&CLICK_HANDLER_REGEX, html).into_iter().collect();
    log::debug!("Found {} distinct click handlers", names.len());
    names
}

/// Extracts the set of function names declared with the `function` keyword.
///
/// Arrow functions and method shorthand are not declarations for this purpose.
pub fn extract_declared_functions(js: &str) -> BTreeSet<String> {
    let names: BTreeSet<String> = captures(&FUNCTION_DECLARATION_REGEX, js)
        .into_iter()
        .collect();
    log::debug!("Found {} distinct declared functions", names.len());
    names
}

/// Extracts every product category (`data-cat="..."` value) from the document.
pub fn extract_categories(html: &str) -> Vec<String> {
    let categories = captures(&CATEGORY_REGEX, html);
    log::debug!("Found {} category labels", categories.len());
    categories
}
