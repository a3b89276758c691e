//! Game implementations built on the search engine.

pub mod teddy;
