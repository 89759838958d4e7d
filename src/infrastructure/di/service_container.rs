//! Service container for dependency injection
//!
//! Wires up the game services and seeds the knowledge tree from settings.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::{GuessService, LearningService};
use crate::application::{ApplicationResult, Session};
use crate::config::Settings;
use crate::domain::{DecisionTree, LabelBound};
use crate::infrastructure::traits::Interaction;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Round player (owns the learning service)
    pub guess: GuessService,
}

impl ServiceContainer {
    /// Create a new service container.
    pub fn new(settings: Settings) -> Self {
        Self::with_services(settings, GuessService::new(LearningService::new()))
    }

    /// Create a service container with custom services (for testing).
    pub fn with_services(settings: Settings, guess: GuessService) -> Self {
        Self {
            settings: Arc::new(settings),
            guess,
        }
    }

    /// Build the starting tree from the configured seed.
    pub fn seed_tree(&self) -> ApplicationResult<DecisionTree> {
        let bound = LabelBound::new(self.settings.max_label_chars)?;
        let seed = &self.settings.seed;
        debug!(
            "seeding tree: '{}' yes='{}' no='{}'",
            seed.question, seed.yes_animal, seed.no_animal
        );
        Ok(DecisionTree::seed_with_bound(
            bound,
            &seed.question,
            &seed.yes_animal,
            &seed.no_animal,
        )?)
    }

    /// Start a session talking to the player through `io`.
    pub fn session<I: Interaction>(&self, io: I) -> ApplicationResult<Session<I>> {
        let tree = self.seed_tree()?;
        Ok(Session::new(tree, io, self.guess.clone()).with_show_tree(self.settings.show_tree))
    }
}
