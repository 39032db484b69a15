pub mod graphs;
pub mod search;
