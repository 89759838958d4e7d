//! Session loop: rounds against one shared tree until the input ends.

use tracing::{info, instrument};

use crate::application::prompts;
use crate::application::services::{GuessService, RoundOutcome};
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::DecisionTree;
use crate::infrastructure::traits::Interaction;

/// What happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to the end
    pub rounds: usize,
    /// Animals added to the tree
    pub learned: usize,
}

/// A game session owning the knowledge tree and the player connection.
pub struct Session<I> {
    tree: DecisionTree,
    io: I,
    guess: GuessService,
    show_tree: bool,
}

impl<I: Interaction> Session<I> {
    pub fn new(tree: DecisionTree, io: I, guess: GuessService) -> Self {
        Self {
            tree,
            io,
            guess,
            show_tree: false,
        }
    }

    /// Print the tree after every learned animal.
    pub fn with_show_tree(mut self, show_tree: bool) -> Self {
        self.show_tree = show_tree;
        self
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn into_parts(self) -> (DecisionTree, I) {
        (self.tree, self.io)
    }

    /// Play one round.
    pub fn play_round(&mut self) -> ApplicationResult<RoundOutcome> {
        self.guess.play_round(&mut self.tree, &mut self.io)
    }

    /// Play rounds until the player closes the input.
    ///
    /// A closed input ends the session normally; any other error is returned.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> ApplicationResult<SessionSummary> {
        let mut summary = SessionSummary::default();
        self.io.tell(prompts::BANNER).with_context("show banner")?;

        loop {
            match self.play_round() {
                Ok(outcome) => {
                    summary.rounds += 1;
                    if let RoundOutcome::Learned { .. } = outcome {
                        summary.learned += 1;
                        if self.show_tree {
                            let rendered = self.tree.to_termtree().to_string();
                            self.io.tell(&rendered).with_context("show tree")?;
                        }
                    }
                    self.io
                        .tell(prompts::ANOTHER_ANIMAL)
                        .with_context("show separator")?;
                }
                Err(ApplicationError::InputClosed) => {
                    info!(
                        "input closed after {} rounds, {} animals learned, {} known",
                        summary.rounds,
                        summary.learned,
                        self.tree.leaf_count()
                    );
                    return Ok(summary);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
