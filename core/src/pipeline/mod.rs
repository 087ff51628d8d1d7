// uitour/src/pipeline/mod.rs

//! Strictly sequential chains of possibly asynchronous stages.

pub mod sequence;

pub use sequence::{Sequence, StageFuture};
