/*!
# Table and text writing

- [ConcatWriter] writes articles into a single annotator input, separated by boundary tokens.
- [FeatureWriter] writes [crate::features::FeatureRow]s to a comma-separated table.

Both implement [WriterTrait].
!*/
mod concatwriter;
mod featurewriter;
mod writertrait;

pub use concatwriter::ConcatWriter;
pub use featurewriter::FeatureWriter;
pub use writertrait::WriterTrait;
