//! Shopping-list parsing: item splitting and grocery tagging.

pub mod splitter;
pub mod tags;

pub use splitter::split_on_and;
pub use tags::{Tag, classify, classify_tags};
