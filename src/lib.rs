pub mod annotator;
pub mod document;
pub mod error;
pub mod features;
pub mod io;
pub mod metadata;
pub mod pipelines;
