//! Domain entities: identifiers and plain data shared by both engines

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Opaque, immutable identifier of a tree node.
    NodeId
);
string_id!(
    /// Opaque, immutable identifier of a board card.
    CardId
);
string_id!(
    /// Opaque, immutable identifier of a board column.
    ColumnId
);

impl NodeId {
    /// Fresh id for a node created by the user.
    pub fn generate() -> Self {
        Self(format!("node_{}", Uuid::new_v4().simple()))
    }
}

impl CardId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

/// Trim a user-supplied label, rejecting it when nothing is left.
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A child as delivered by a lazy child provider.
///
/// Installed children start unloaded with no children of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSpec {
    pub id: NodeId,
    pub name: String,
}

impl ChildSpec {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Nested, owned view of a subtree. Used for rendering and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: NodeId,
    pub name: String,
    pub loaded: bool,
    pub expanded: bool,
    pub children: Vec<NodeView>,
}

impl NodeView {
    /// Unloaded, collapsed node without children.
    pub fn stub(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            loaded: false,
            expanded: false,
            children: Vec::new(),
        }
    }

    /// Loaded node with the given children.
    pub fn with_children(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        children: Vec<NodeView>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            loaded: true,
            expanded: false,
            children,
        }
    }
}

/// Kanban column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Kanban card. Column membership is the `column_id` tag, not nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub column_id: ColumnId,
}

impl Card {
    pub fn new(
        id: impl Into<CardId>,
        title: impl Into<String>,
        column_id: impl Into<ColumnId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column_id: column_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_padded_name_when_normalizing_then_trims() {
        assert_eq!(normalize_name("  Docs \t"), Some("Docs".to_string()));
    }

    #[test]
    fn given_blank_name_when_normalizing_then_rejects() {
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name(""), None);
    }

    #[test]
    fn given_two_generated_ids_then_they_differ() {
        assert_ne!(NodeId::generate(), NodeId::generate());
        assert!(NodeId::generate().as_str().starts_with("node_"));
        assert_ne!(CardId::generate(), CardId::generate());
    }
}
