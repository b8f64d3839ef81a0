//! Hybrid collection search for AskSG.
//!
//! Combines BM25 keyword scoring with vector nearest-neighbour search over
//! the same corpus and fuses both with a weighted linear combination.
//!
//! ## How It Works
//!
//! 1. Keyword scores are computed for every document and normalized by the maximum
//! 2. The query is embedded and the nearest collections are looked up
//! 3. Distances become similarities relative to the farthest candidate
//! 4. Candidates from both sides are merged and ranked by the weighted sum

mod corpus;
mod fusion;
mod lexical;
mod normalize;
mod ranker;

pub use corpus::CorpusStore;
pub use fusion::{FusedScore, FusionWeights, fuse, rank_descending};
pub use lexical::{Bm25Index, Bm25Params, tokenize};
pub use normalize::normalize_by_max;
pub use ranker::{HybridRanker, RankerConfig};
