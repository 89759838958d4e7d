//! Tree nodes: questions with two owned branches, or animal leaves.

use std::fmt;
use std::ops::Not;

use crate::domain::label::Label;

/// Child slot of a question, selected by a yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    No,
    Yes,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::No => "no",
            Branch::Yes => "yes",
        }
    }
}

impl From<bool> for Branch {
    fn from(answer: bool) -> Self {
        if answer {
            Branch::Yes
        } else {
            Branch::No
        }
    }
}

impl From<Branch> for bool {
    fn from(branch: Branch) -> Self {
        branch == Branch::Yes
    }
}

impl Not for Branch {
    type Output = Branch;

    fn not(self) -> Self::Output {
        match self {
            Branch::No => Branch::Yes,
            Branch::Yes => Branch::No,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the knowledge tree.
///
/// A `Question` always owns both of its children, a `Leaf` owns none, so a
/// half-built question cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Question {
        text: Label,
        no: Box<Node>,
        yes: Box<Node>,
    },
    Leaf {
        animal: Label,
    },
}

impl Node {
    pub fn leaf(animal: Label) -> Self {
        Node::Leaf { animal }
    }

    pub fn question(text: Label, yes: Node, no: Node) -> Self {
        Node::Question {
            text,
            no: Box::new(no),
            yes: Box::new(yes),
        }
    }

    pub fn label(&self) -> &Label {
        match self {
            Node::Question { text, .. } => text,
            Node::Leaf { animal } => animal,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn child(&self, branch: Branch) -> Option<&Node> {
        match self {
            Node::Question { no, yes, .. } => Some(match branch {
                Branch::No => &**no,
                Branch::Yes => &**yes,
            }),
            Node::Leaf { .. } => None,
        }
    }

    pub fn child_mut(&mut self, branch: Branch) -> Option<&mut Node> {
        match self {
            Node::Question { no, yes, .. } => Some(match branch {
                Branch::No => &mut **no,
                Branch::Yes => &mut **yes,
            }),
            Node::Leaf { .. } => None,
        }
    }

    /// Turn this leaf into a question in place.
    ///
    /// The current animal moves to the `!correct_branch` side and
    /// `correct` goes to `correct_branch`. Returns `false` (and leaves the
    /// node untouched) when called on a question.
    pub fn split(&mut self, question: Label, correct: Label, correct_branch: Branch) -> bool {
        let Node::Leaf { animal } = self else {
            return false;
        };
        let previous = Node::leaf(animal.clone());
        let learned = Node::leaf(correct);
        *self = match correct_branch {
            Branch::Yes => Node::question(question, learned, previous),
            Branch::No => Node::question(question, previous, learned),
        };
        true
    }
}
