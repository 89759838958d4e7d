//! Bounded node labels.
//!
//! Every label that enters the tree goes through [`LabelBound::label`]:
//! surrounding whitespace is trimmed, text longer than the bound is cut on a
//! character boundary, and blank text is rejected.

use std::fmt;

use tracing::debug;

use crate::domain::error::{DomainError, DomainResult};

/// Default maximum label length in characters (a 256-byte buffer minus its terminator).
pub const DEFAULT_MAX_LABEL_CHARS: usize = 255;

/// Text of a question or an animal name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper bound on label length, applied uniformly to every label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelBound(usize);

impl Default for LabelBound {
    fn default() -> Self {
        Self(DEFAULT_MAX_LABEL_CHARS)
    }
}

impl LabelBound {
    pub fn new(max_chars: usize) -> DomainResult<Self> {
        if max_chars == 0 {
            return Err(DomainError::InvalidBound);
        }
        Ok(Self(max_chars))
    }

    pub fn max_chars(&self) -> usize {
        self.0
    }

    /// Build a label from raw text, truncating overlong input.
    pub fn label(&self, text: &str) -> DomainResult<Label> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyLabel);
        }
        let bounded = match trimmed.char_indices().nth(self.0) {
            Some((cut, _)) => {
                debug!("truncating label to {} chars", self.0);
                trimmed[..cut].trim_end()
            }
            None => trimmed,
        };
        Ok(Label(bounded.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_surrounding_whitespace_when_labeling_then_trims() {
        let label = LabelBound::default().label("  pato \n").unwrap();
        assert_eq!(label.as_str(), "pato");
    }

    #[test]
    fn given_blank_text_when_labeling_then_rejects() {
        assert_eq!(
            LabelBound::default().label(" \t\n"),
            Err(DomainError::EmptyLabel)
        );
    }

    #[test]
    fn given_overlong_text_when_labeling_then_truncates_on_char_boundary() {
        let bound = LabelBound::new(3).unwrap();
        assert_eq!(bound.label("ornitorrinco").unwrap().as_str(), "orn");
        // multi-byte characters count as one
        assert_eq!(bound.label("ção e pão").unwrap().as_str(), "ção");
    }

    #[test]
    fn given_text_at_bound_when_labeling_then_keeps_it() {
        let bound = LabelBound::new(4).unwrap();
        assert_eq!(bound.label("gato").unwrap().as_str(), "gato");
    }

    #[test]
    fn given_zero_bound_when_creating_then_rejects() {
        assert_eq!(LabelBound::new(0), Err(DomainError::InvalidBound));
    }
}
