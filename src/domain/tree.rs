//! The knowledge tree and its traversal cursor.

use termtree::Tree;
use tracing::{debug, instrument, warn};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::label::{Label, LabelBound};
use crate::domain::node::{Branch, Node};

/// Everything the player told us after a wrong guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    /// The animal the player was actually thinking of
    pub animal: String,
    /// Yes/no question telling the wrong guess and `animal` apart
    pub question: String,
    /// Answer to `question` for `animal`
    pub answer_for_animal: Branch,
}

/// Binary yes/no decision tree. Never empty once seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    root: Node,
    bound: LabelBound,
}

impl DecisionTree {
    /// Build the initial three-node tree with the default label bound.
    pub fn seed(question: &str, answer_if_yes: &str, answer_if_no: &str) -> DomainResult<Self> {
        Self::seed_with_bound(LabelBound::default(), question, answer_if_yes, answer_if_no)
    }

    #[instrument(level = "debug")]
    pub fn seed_with_bound(
        bound: LabelBound,
        question: &str,
        answer_if_yes: &str,
        answer_if_no: &str,
    ) -> DomainResult<Self> {
        let root = Node::question(
            bound.label(question)?,
            Node::leaf(bound.label(answer_if_yes)?),
            Node::leaf(bound.label(answer_if_no)?),
        );
        Ok(Self { root, bound })
    }

    /// Create a detached leaf using this tree's label bound.
    pub fn new_leaf(&self, animal: &str) -> DomainResult<Node> {
        Ok(Node::leaf(self.bound.label(animal)?))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn bound(&self) -> LabelBound {
        self.bound
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            node: &self.root,
            path: Vec::new(),
        }
    }

    pub fn node_at(&self, path: &[Branch]) -> DomainResult<&Node> {
        let mut node = &self.root;
        for (depth, branch) in path.iter().enumerate() {
            node = node.child(*branch).ok_or_else(|| DomainError::MissingNode {
                path: path[..=depth].to_vec(),
            })?;
        }
        Ok(node)
    }

    pub fn node_at_mut(&mut self, path: &[Branch]) -> DomainResult<&mut Node> {
        descend_mut(&mut self.root, path, 0)
    }

    /// Replace the child of the question at `parent` on `branch`.
    ///
    /// Returns the subtree that used to hang there; dropping it releases it.
    #[instrument(level = "debug", skip(self, child))]
    pub fn attach_child(
        &mut self,
        parent: &[Branch],
        child: Node,
        branch: Branch,
    ) -> DomainResult<Node> {
        let node = self.node_at_mut(parent)?;
        let slot = node.child_mut(branch).ok_or_else(|| DomainError::NotAQuestion {
            path: parent.to_vec(),
        })?;
        Ok(std::mem::replace(slot, child))
    }

    /// Split the leaf at `leaf` into a question separating its animal from
    /// the newly learned one.
    #[instrument(level = "debug", skip(self))]
    pub fn learn(&mut self, leaf: &[Branch], lesson: &Lesson) -> DomainResult<()> {
        let question = self.bound.label(&lesson.question)?;
        let animal = self.bound.label(&lesson.animal)?;
        let node = self.node_at_mut(leaf)?;

        if node.label().as_str().eq_ignore_ascii_case(animal.as_str()) {
            warn!("learning '{}' again at the leaf that already holds it", animal);
        }
        if !node.split(question, animal, lesson.answer_for_animal) {
            return Err(DomainError::NotALeaf {
                path: leaf.to_vec(),
            });
        }
        debug!("learned '{}' under '{}'", lesson.animal, lesson.question);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|node| node.is_leaf()).count()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(&self.root, 1)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Node::Question { no, yes, .. } = node {
                stack.push((&**no, depth + 1));
                stack.push((&**yes, depth + 1));
            }
        }
        max_depth
    }

    /// Animal names in depth-first order, yes branches first.
    pub fn animals(&self) -> Vec<&str> {
        self.nodes()
            .filter(|node| node.is_leaf())
            .map(|node| node.label().as_str())
            .collect()
    }

    /// Pre-order iterator over every node.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: vec![&self.root],
        }
    }

    /// Verify that every label honors the bound.
    ///
    /// Child presence is guaranteed by [`Node`] itself.
    pub fn check_invariants(&self) -> DomainResult<()> {
        for node in self.nodes() {
            let text = node.label().as_str();
            if text.trim().is_empty() {
                return Err(DomainError::EmptyLabel);
            }
            let chars = text.chars().count();
            if chars > self.bound.max_chars() {
                return Err(DomainError::LabelTooLong {
                    chars,
                    max: self.bound.max_chars(),
                });
            }
        }
        Ok(())
    }

    /// Release every node without recursion and report how many were freed.
    #[instrument(level = "debug", skip(self))]
    pub fn teardown(self) -> usize {
        let mut released = 0;
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            released += 1;
            if let Node::Question { no, yes, .. } = node {
                stack.push(*no);
                stack.push(*yes);
            }
        }
        debug!("released {} nodes", released);
        released
    }

    pub fn to_termtree(&self) -> Tree<String> {
        render(&self.root, None)
    }
}

fn descend_mut<'a>(node: &'a mut Node, path: &[Branch], depth: usize) -> DomainResult<&'a mut Node> {
    match path.get(depth) {
        None => Ok(node),
        Some(branch) => match node.child_mut(*branch) {
            Some(child) => descend_mut(child, path, depth + 1),
            None => Err(DomainError::MissingNode {
                path: path[..=depth].to_vec(),
            }),
        },
    }
}

fn render(node: &Node, branch: Option<Branch>) -> Tree<String> {
    let prefix = branch.map(|b| format!("{}: ", b)).unwrap_or_default();
    match node {
        Node::Question { text, no, yes } => Tree::new(format!("{}{}?", prefix, text))
            .with_leaves([render(yes, Some(Branch::Yes)), render(no, Some(Branch::No))]),
        Node::Leaf { animal } => Tree::new(format!("{}{}", prefix, animal)),
    }
}

/// Pre-order node iterator.
pub struct Nodes<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Question { no, yes, .. } = node {
            self.stack.push(&**no);
            self.stack.push(&**yes);
        }
        Some(node)
    }
}

/// Where a traversal currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position<'a> {
    AtQuestion(&'a Label),
    AtLeaf(&'a Label),
}

/// Read-only walk from the root towards a leaf, recording the answers taken.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    node: &'a Node,
    path: Vec<Branch>,
}

impl<'a> Cursor<'a> {
    pub fn position(&self) -> Position<'a> {
        match self.node {
            Node::Question { text, .. } => Position::AtQuestion(text),
            Node::Leaf { animal } => Position::AtLeaf(animal),
        }
    }

    /// Move to the child selected by `answer`.
    pub fn follow(&mut self, answer: Branch) -> DomainResult<()> {
        let child = self
            .node
            .child(answer)
            .ok_or_else(|| DomainError::NotAQuestion {
                path: self.path.clone(),
            })?;
        self.node = child;
        self.path.push(answer);
        Ok(())
    }

    pub fn path(&self) -> &[Branch] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Branch> {
        self.path
    }
}
