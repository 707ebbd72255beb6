//! I/O boundary traits for testability
//!
//! The lazy child provider is the only external collaborator of the tree
//! engine. Services hold it as `Arc<dyn ChildProvider>` so tests can swap in
//! their own implementations.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{ChildSpec, NodeId};

/// Identifies the node whose children are requested.
///
/// Carries both id and display name; providers choose which one to key by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRequest {
    pub id: NodeId,
    pub name: String,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of lazily loaded children.
#[async_trait]
pub trait ChildProvider: Send + Sync {
    /// Fetch the immediate children of a node. Called at most once per expansion.
    async fn fetch_children(&self, request: &ChildRequest) -> Result<Vec<ChildSpec>, FetchError>;
}

/// In-memory provider keyed by display name, with a simulated latency.
///
/// Unknown names yield no children.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    catalogue: HashMap<String, Vec<ChildSpec>>,
    delay: Duration,
}

impl CatalogProvider {
    pub fn new(delay: Duration) -> Self {
        Self::with_catalogue(default_catalogue(), delay)
    }

    pub fn with_catalogue(catalogue: HashMap<String, Vec<ChildSpec>>, delay: Duration) -> Self {
        Self { catalogue, delay }
    }
}

#[async_trait]
impl ChildProvider for CatalogProvider {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_children(&self, request: &ChildRequest) -> Result<Vec<ChildSpec>, FetchError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let children = self.catalogue.get(&request.name).cloned().unwrap_or_default();
        debug!("{} child(ren) for '{}'", children.len(), request.name);
        Ok(children)
    }
}

/// Sample project layout served by [`CatalogProvider::new`].
pub fn default_catalogue() -> HashMap<String, Vec<ChildSpec>> {
    let entries: [(&str, &[(&str, &str)]); 5] = [
        ("Project A", &[("a1", "Components"), ("a2", "Utils"), ("a3", "Hooks")]),
        ("Project B", &[("b1", "API"), ("b2", "Database")]),
        (
            "Components",
            &[("c1", "Button.tsx"), ("c2", "Modal.tsx"), ("c3", "Card.tsx")],
        ),
        ("Utils", &[("u1", "helpers.ts"), ("u2", "validators.ts")]),
        ("Hooks", &[("h1", "useForm.ts"), ("h2", "useFetch.ts")]),
    ];
    entries
        .iter()
        .map(|(parent, children)| {
            let specs = children
                .iter()
                .map(|&(id, name)| ChildSpec::new(id, name))
                .collect();
            (parent.to_string(), specs)
        })
        .collect()
}
