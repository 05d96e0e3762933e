//! Edge record type

use super::property::{PropertyMap, PropertyValue};
use super::types::VertexId;
use serde::{Deserialize, Serialize};

/// A directed edge in the property graph.
///
/// Edges go FROM `src` TO `dst` and carry free-form attributes (e.g.
/// `relationship`). Multiple edges between the same ordered pair are
/// allowed (the graph is a multigraph).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    /// Source vertex (edge goes FROM this vertex)
    pub src: VertexId,

    /// Destination vertex (edge goes TO this vertex)
    pub dst: VertexId,

    /// Attributes associated with this edge
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new directed edge with no attributes
    pub fn new(src: impl Into<VertexId>, dst: impl Into<VertexId>) -> Self {
        Edge {
            src: src.into(),
            dst: dst.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a new edge with attributes
    pub fn new_with_properties(
        src: impl Into<VertexId>,
        dst: impl Into<VertexId>,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            src: src.into(),
            dst: dst.into(),
            properties,
        }
    }

    /// Set an attribute, consuming and returning the edge (builder style,
    /// for use before the edge enters a store)
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

    /// Check if this edge connects two specific vertices (either direction)
    pub fn connects(&self, a: &VertexId, b: &VertexId) -> bool {
        (&self.src == a && &self.dst == b) || (&self.src == b && &self.dst == a)
    }
}
