//! Error types for the AskSG protocol layer.

mod corpus;
mod embedding;
mod index;
mod search;

pub use corpus::*;
pub use embedding::*;
pub use index::*;
pub use search::*;
