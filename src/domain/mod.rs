//! Domain layer: the knowledge tree and its rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod answer;
pub mod error;
pub mod label;
pub mod node;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use label::{Label, LabelBound, DEFAULT_MAX_LABEL_CHARS};
pub use node::{Branch, Node};
pub use tree::{Cursor, DecisionTree, Lesson, Position};
