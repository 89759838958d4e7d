//! Learning service
//!
//! Asks the player what they were thinking of and splits the rejected leaf.

use tracing::{debug, info, instrument};

use crate::application::prompts;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::answer::clean_question;
use crate::domain::{Branch, DecisionTree, DomainError, Lesson, Node};
use crate::infrastructure::traits::Interaction;

/// Service growing the tree after a wrong guess.
#[derive(Debug, Default, Clone)]
pub struct LearningService;

impl LearningService {
    pub fn new() -> Self {
        Self
    }

    /// Learn a new animal at the leaf addressed by `leaf`.
    ///
    /// Blank animal names and questions are asked again.
    #[instrument(level = "debug", skip(self, tree, io))]
    pub fn learn(
        &self,
        tree: &mut DecisionTree,
        leaf: &[Branch],
        io: &mut dyn Interaction,
    ) -> ApplicationResult<Lesson> {
        let wrong = match tree.node_at(leaf)? {
            Node::Leaf { animal } => animal.to_string(),
            Node::Question { .. } => {
                return Err(DomainError::NotALeaf {
                    path: leaf.to_vec(),
                }
                .into())
            }
        };

        let animal = ask_until_filled(tree, || {
            io.ask_text(prompts::GIVE_UP)
                .with_context("read animal name")
        })?;

        let distinguish = prompts::distinguish(&wrong, &animal);
        let question = ask_until_filled(tree, || {
            io.ask_text(&distinguish)
                .with_context("read distinguishing question")
                .map(|line| clean_question(&line).to_string())
        })?;

        let answer = io
            .ask_yes_no(&prompts::answer_for(&animal, &question))
            .with_context("read answer for new animal")?;

        let lesson = Lesson {
            animal,
            question,
            answer_for_animal: Branch::from(answer),
        };
        tree.learn(leaf, &lesson)?;
        info!(
            "learned '{}' ({} to '{}'), tree has {} nodes",
            lesson.animal,
            lesson.answer_for_animal,
            lesson.question,
            tree.node_count()
        );
        Ok(lesson)
    }
}

/// Repeat `ask` until it yields text the tree accepts as a label, and
/// return that label as the tree will store it.
fn ask_until_filled<F>(tree: &DecisionTree, mut ask: F) -> ApplicationResult<String>
where
    F: FnMut() -> ApplicationResult<String>,
{
    loop {
        let text = ask()?;
        match tree.bound().label(&text) {
            Ok(label) => return Ok(label.into_string()),
            Err(DomainError::EmptyLabel) => debug!("blank input, asking again"),
            Err(e) => return Err(ApplicationError::Domain(e)),
        }
    }
}
