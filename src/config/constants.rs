//! Configuration constants.
//!
//! This module defines the fixed parameters of the audit: where the site
//! sources live by default, which attribute patterns are extracted, which tags
//! are balanced, and which element identifiers the page cannot work without.

/// Default directory holding the site sources.
pub const DEFAULT_BASE_DIR: &str = ".";

/// Default file name of the HTML document.
pub const DEFAULT_DOCUMENT_FILE: &str = "index.html";

/// Default file name of the script.
pub const DEFAULT_SCRIPT_FILE: &str = "script.js";

// Extraction patterns
/// Product label: the value of any `alt` attribute.
pub const PRODUCT_LABEL_PATTERN: &str = r#"alt="([^"]+)""#;
/// Callee of an inline click handler, e.g. `onclick="openCart(`.
pub const CLICK_HANDLER_PATTERN: &str = r#"onclick="(\w+)\("#;
/// Name introduced by a script function declaration.
pub const FUNCTION_DECLARATION_PATTERN: &str = r"function\s+(\w+)\s*\(";
/// Product category label.
pub const CATEGORY_PATTERN: &str = r#"data-cat="(\w+)""#;

/// Structural tags whose opening and closing forms must balance, in report order.
///
/// Counted as raw substrings (`<div` / `</div`), not parsed.
pub const BALANCED_TAGS: &[&str] = &["div", "section"];

/// Element identifiers the page needs at runtime, in report order.
///
/// Presence is a literal substring test against the whole document.
pub const ESSENTIAL_ELEMENTS: &[&str] = &[
    "bookingModal",
    "cartOverlay",
    "cartSidebar",
    "pcGrid",
    "catEmpty",
    "catTitle",
    "catDesc",
];
