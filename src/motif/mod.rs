//! Motif (structural pattern) matching
//!
//! A motif is a chain of optionally-named vertex and edge variables in
//! `src -> dst` direction, e.g. `(a)-[e]->(b)`. Parsing produces a
//! [`Motif`]; [`find_motif`] enumerates every satisfying [`PathBinding`].

pub mod matcher;
pub mod parser;

pub use matcher::{find_motif, Bound, PathBinding};
pub use parser::{Hop, Motif};
