//! Pipelines.
//!
//! - [Concat] prepares the annotator input from the metadata table and the article files,
//! - [Extract] reads the annotator output back and writes the feature table,
//! - [Full] runs both, with the annotator in between.
mod concat;
mod extract;
mod full;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use concat::Concat;
pub use extract::Extract;
pub use full::Full;
pub use pipeline::Pipeline;
