//! Guessing service
//!
//! Walks the tree one question at a time, then guesses the animal at the leaf.

use tracing::{debug, instrument};

use crate::application::prompts;
use crate::application::services::LearningService;
use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Branch, DecisionTree, Lesson, Position};
use crate::infrastructure::traits::Interaction;

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The guess was confirmed; the tree is unchanged.
    Guessed { animal: String, questions: usize },
    /// The guess was rejected and the tree learned a new animal.
    Learned { lesson: Lesson, questions: usize },
}

/// Service playing a single guess-and-maybe-learn round.
#[derive(Debug, Default, Clone)]
pub struct GuessService {
    learning: LearningService,
}

impl GuessService {
    pub fn new(learning: LearningService) -> Self {
        Self { learning }
    }

    /// Play one round against `tree`.
    #[instrument(level = "debug", skip_all)]
    pub fn play_round(
        &self,
        tree: &mut DecisionTree,
        io: &mut dyn Interaction,
    ) -> ApplicationResult<RoundOutcome> {
        let (guess, path) = self.walk(tree, io)?;
        let questions = path.len();

        let confirmed = io
            .ask_yes_no(&prompts::guess(&guess))
            .with_context("read guess confirmation")?;
        if confirmed {
            io.tell(prompts::KNEW_IT).with_context("show result")?;
            return Ok(RoundOutcome::Guessed {
                animal: guess,
                questions,
            });
        }

        debug!("guess '{}' rejected after {} questions", guess, questions);
        let lesson = self.learning.learn(tree, &path, io)?;
        Ok(RoundOutcome::Learned { lesson, questions })
    }

    /// Ask questions until a leaf is reached; returns its animal and the path taken.
    fn walk(
        &self,
        tree: &DecisionTree,
        io: &mut dyn Interaction,
    ) -> ApplicationResult<(String, Vec<Branch>)> {
        let mut cursor = tree.cursor();
        loop {
            match cursor.position() {
                Position::AtQuestion(question) => {
                    let answer = io
                        .ask_yes_no(question.as_str())
                        .with_context("read answer")?;
                    cursor.follow(Branch::from(answer))?;
                }
                Position::AtLeaf(animal) => {
                    let animal = animal.to_string();
                    return Ok((animal, cursor.into_path()));
                }
            }
        }
    }
}
