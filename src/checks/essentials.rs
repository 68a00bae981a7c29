//! Required element identifiers.

use std::fmt;

use crate::checks::{CheckKind, Finding};
use crate::config::ESSENTIAL_ELEMENTS;

/// Presence of one required identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementPresence {
    /// Identifier searched for
    pub id: &'static str,
    /// Whether it occurs anywhere in the document
    pub found: bool,
}

/// Presence of every required identifier, in the fixed list's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssentialElements {
    /// One entry per required identifier
    pub elements: Vec<ElementPresence>,
}

impl EssentialElements {
    /// Identifiers not found in the document, in list order.
    pub fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.elements.iter().filter(|e| !e.found).map(|e| e.id)
    }
}

/// Tests each required identifier for literal presence anywhere in `html`.
///
/// The match is not scoped to `id` attributes; a mention in a comment or a
/// class name counts.
pub fn check_essential_elements(html: &str) -> EssentialElements {
    EssentialElements {
        elements: ESSENTIAL_ELEMENTS
            .iter()
            .map(|&id| ElementPresence {
                id,
                found: html.contains(id),
            })
            .collect(),
    }
}

impl Finding for EssentialElements {
    fn kind(&self) -> CheckKind {
        CheckKind::EssentialElements
    }

    fn passed(&self) -> bool {
        self.elements.iter().all(|e| e.found)
    }
}

impl fmt::Display for EssentialElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            if element.found {
                writeln!(f, "  ✓ {}: found", element.id)?;
            } else {
                writeln!(f, "  ❌ {}: MISSING!", element.id)?;
            }
        }
        Ok(())
    }
}
