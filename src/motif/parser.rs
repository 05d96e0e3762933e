//! Chain motif parser using Pest

use crate::graph::{GraphError, GraphResult};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "motif/motif.pest"]
struct MotifParser;

/// One `-[e]->(b)` step of a motif chain
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    /// Edge variable name, if named
    pub edge: Option<String>,
    /// Destination vertex variable name, if named
    pub vertex: Option<String>,
}

/// A parsed chain motif: a start vertex followed by zero or more hops in
/// `src -> dst` direction, e.g. `(a)-[e]->(b)-[e2]->(c)`.
///
/// A single-vertex motif (`(a)`) is legal and matches every vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    /// Start vertex variable name, if named
    pub start: Option<String>,
    /// Remaining edge/vertex steps
    pub hops: Vec<Hop>,
}

impl Motif {
    /// Parse a motif pattern string.
    ///
    /// Malformed patterns fail with [`GraphError::InvalidMotif`].
    pub fn parse(input: &str) -> GraphResult<Motif> {
        let mut pairs = MotifParser::parse(Rule::motif, input)
            .map_err(|e| GraphError::InvalidMotif(e.to_string()))?;

        let motif_pair = pairs
            .next()
            .ok_or_else(|| GraphError::InvalidMotif("empty pattern".to_string()))?;

        let mut start = None;
        let mut hops = Vec::new();
        let mut pending_edge: Option<Option<String>> = None;
        let mut seen_start = false;

        for pair in motif_pair.into_inner() {
            match pair.as_rule() {
                Rule::vertex => {
                    let name = var_name(pair);
                    if !seen_start {
                        start = name;
                        seen_start = true;
                    } else if let Some(edge) = pending_edge.take() {
                        hops.push(Hop { edge, vertex: name });
                    }
                }
                Rule::edge => {
                    pending_edge = Some(var_name(pair));
                }
                Rule::EOI => {}
                _ => {}
            }
        }

        Ok(Motif { start, hops })
    }

    /// Number of edge hops in the chain
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// True for a single-vertex motif
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}

fn var_name(pair: pest::iterators::Pair<Rule>) -> Option<String> {
    pair.into_inner()
        .find(|p| p.as_rule() == Rule::name)
        .map(|p| p.as_str().to_string())
}
