//! Tree service
//!
//! Owns the forest and the child provider; handles tree intents including lazy expansion.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, Outcome, TreeIntent};
use crate::domain::{DomainError, Forest, NodeId, NodeView};
use crate::infrastructure::traits::{ChildProvider, ChildRequest};

/// Explicit state holder for the tree widget.
pub struct TreeService {
    forest: Forest,
    provider: Arc<dyn ChildProvider>,
    fetch_timeout: Option<Duration>,
}

impl TreeService {
    pub fn new(forest: Forest, provider: Arc<dyn ChildProvider>) -> Self {
        Self {
            forest,
            provider,
            fetch_timeout: None,
        }
    }

    /// Bound every provider fetch. `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn into_forest(self) -> Forest {
        self.forest
    }

    pub fn add(&mut self, parent: Option<&NodeId>, name: &str) -> Outcome<NodeId> {
        Outcome::from_result("add", self.forest.insert(parent, name))
    }

    pub fn rename(&mut self, id: &NodeId, name: &str) -> Outcome {
        Outcome::from_result("rename", self.forest.rename(id, name))
    }

    /// Returns the number of nodes removed.
    pub fn delete(&mut self, id: &NodeId) -> Outcome<usize> {
        Outcome::from_result("delete", self.forest.remove(id))
    }

    pub fn move_node(&mut self, id: &NodeId, target: Option<&NodeId>) -> Outcome {
        Outcome::from_result("move", self.forest.move_node(id, target))
    }

    pub fn toggle(&mut self, id: &NodeId) -> Outcome<bool> {
        Outcome::from_result("toggle", self.forest.toggle(id))
    }

    /// Load a node's children on first expansion and mark it expanded.
    ///
    /// A loaded node returns its current children without calling the
    /// provider. On fetch failure or timeout the node stays unloaded and can
    /// be expanded again.
    #[instrument(level = "debug", skip(self))]
    pub async fn expand(&mut self, id: &NodeId) -> ApplicationResult<Vec<NodeView>> {
        let node = self
            .forest
            .get(id)
            .ok_or_else(|| DomainError::NodeNotFound(id.clone()))?;

        if !node.loaded {
            let request = ChildRequest {
                id: id.clone(),
                name: node.name.clone(),
            };
            let fetch = self.provider.fetch_children(&request);
            let fetched = match self.fetch_timeout {
                Some(limit) => tokio::time::timeout(limit, fetch).await.map_err(|_| {
                    ApplicationError::Timeout {
                        name: request.name.clone(),
                        ms: limit.as_millis(),
                    }
                })?,
                None => fetch.await,
            };
            let children = fetched.map_err(|source| ApplicationError::Fetch {
                name: request.name.clone(),
                source,
            })?;
            info!("loaded {} child(ren) for '{}'", children.len(), request.name);
            self.forest.install_children(id, children)?;
        } else {
            debug!("{} already loaded", id);
        }

        self.forest.set_expanded(id, true)?;
        Ok(self
            .forest
            .view(id)
            .map(|view| view.children)
            .unwrap_or_default())
    }

    /// Handle one intent.
    ///
    /// Invalid references and names come back as `Outcome::Ignored`; only a
    /// failing provider is reported as an error.
    pub async fn dispatch(&mut self, intent: TreeIntent) -> ApplicationResult<Outcome> {
        debug!("dispatch: {}", intent);
        let outcome = match intent {
            TreeIntent::Add { parent, name } => self.add(parent.as_ref(), &name).map(|_| ()),
            TreeIntent::Rename { id, name } => self.rename(&id, &name),
            TreeIntent::Delete { id } => self.delete(&id).map(|_| ()),
            TreeIntent::Move { id, target } => self.move_node(&id, target.as_ref()),
            TreeIntent::Toggle { id } => self.toggle(&id).map(|_| ()),
            TreeIntent::Expand { id } => match self.expand(&id).await {
                Ok(_) => Outcome::Applied(()),
                Err(ApplicationError::Domain(reason)) => {
                    Outcome::from_result("expand", Err::<(), _>(reason))
                }
                Err(e) => return Err(e),
            },
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures::seed_forest;
    use crate::infrastructure::CatalogProvider;

    fn service() -> TreeService {
        TreeService::new(
            seed_forest().unwrap(),
            Arc::new(CatalogProvider::new(Duration::ZERO)),
        )
    }

    #[tokio::test]
    async fn given_loaded_node_when_expanding_then_returns_existing_children() {
        let mut svc = service();
        let children = svc.expand(&"root3".into()).await.unwrap();
        let names: Vec<_> = children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["README.md", "CHANGELOG.md"]);
        assert!(svc.forest().get(&"root3".into()).unwrap().expanded);
    }

    #[tokio::test]
    async fn given_missing_node_when_dispatching_expand_then_ignored() {
        let mut svc = service();
        let outcome = svc
            .dispatch(TreeIntent::Expand { id: "ghost".into() })
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored(DomainError::NodeNotFound("ghost".into())));
    }

    #[tokio::test]
    async fn given_blank_name_when_dispatching_add_then_forest_unchanged() {
        let mut svc = service();
        let before = svc.forest().snapshot();
        let outcome = svc
            .dispatch(TreeIntent::Add {
                parent: None,
                name: "  ".to_string(),
            })
            .await
            .unwrap();
        assert!(!outcome.is_applied());
        assert_eq!(svc.forest().snapshot(), before);
    }
}
