//! Search module for the computer player
//!
//! Contains the exhaustive minimax search that selects the computer's move.

pub mod minimax;

pub use minimax::{SearchResult, Searcher};
