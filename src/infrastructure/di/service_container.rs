//! Service container for dependency injection
//!
//! Wires up the services with their dependencies.

use std::sync::Arc;

use crate::application::services::{BoardService, TreeService};
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{Board, Forest};
use crate::infrastructure::fixtures;
use crate::infrastructure::traits::{CatalogProvider, ChildProvider};

/// Container holding settings and the provider shared by the services it builds.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Lazy child provider
    pub provider: Arc<dyn ChildProvider>,
}

impl ServiceContainer {
    /// Create a new service container with the bundled catalogue provider.
    pub fn new(settings: Settings) -> Self {
        let provider = Arc::new(CatalogProvider::new(settings.provider_delay()));
        Self::with_deps(settings, provider)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, provider: Arc<dyn ChildProvider>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, provider }
    }

    /// Tree service over the sample forest, or an empty one when `seed` is false.
    pub fn tree_service(&self, seed: bool) -> ApplicationResult<TreeService> {
        let forest = if seed {
            fixtures::seed_forest()?
        } else {
            Forest::new()
        };
        Ok(TreeService::new(forest, Arc::clone(&self.provider))
            .with_timeout(self.settings.fetch_timeout()))
    }

    /// Board service on the configured columns.
    ///
    /// An invalid column set (blank or repeated id) is a configuration error.
    pub fn board_service(&self, seed: bool) -> ApplicationResult<BoardService> {
        let columns = self.settings.columns();
        let board = if seed {
            fixtures::seed_board(columns)
        } else {
            Board::new(columns)
        };
        let board = board.map_err(|e| ApplicationError::Config {
            message: format!("board.columns: {e}"),
        })?;
        Ok(BoardService::new(board))
    }
}
