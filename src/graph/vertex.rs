//! Vertex record type

use super::property::{PropertyMap, PropertyValue};
use super::types::VertexId;
use serde::{Deserialize, Serialize};

/// A vertex in the property graph.
///
/// Identity is the `id`; attributes are free-form key/value pairs.
/// Vertices are immutable once added to a [`GraphStore`](super::GraphStore)
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: VertexId,

    /// Attributes associated with this vertex
    pub properties: PropertyMap,
}

impl Vertex {
    /// Create a new vertex with no attributes
    pub fn new(id: impl Into<VertexId>) -> Self {
        Vertex {
            id: id.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a new vertex with attributes
    pub fn new_with_properties(id: impl Into<VertexId>, properties: PropertyMap) -> Self {
        Vertex {
            id: id.into(),
            properties,
        }
    }

    /// Set an attribute, consuming and returning the vertex (builder style,
    /// for use before the vertex enters a store)
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check if attribute exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Get number of attributes
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
