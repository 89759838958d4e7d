//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::Branch;

/// Domain errors represent violated tree invariants or rejected labels.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("label is empty")]
    EmptyLabel,

    #[error("no node at path {}", format_path(.path))]
    MissingNode { path: Vec<Branch> },

    #[error("expected a question node at path {}", format_path(.path))]
    NotAQuestion { path: Vec<Branch> },

    #[error("expected a leaf node at path {}", format_path(.path))]
    NotALeaf { path: Vec<Branch> },

    #[error("label has {chars} characters, the limit is {max}")]
    LabelTooLong { chars: usize, max: usize },

    #[error("label bound must be at least one character")]
    InvalidBound,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Render a path as `root/yes/no`.
pub fn format_path(path: &[Branch]) -> String {
    let mut out = String::from("root");
    for branch in path {
        out.push('/');
        out.push_str(branch.as_str());
    }
    out
}
