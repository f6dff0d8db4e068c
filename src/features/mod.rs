/*! Document features

Annotated tokens, feature types and the aggregation of the former into the latter.

See [aggregate] for the run detection and classification rules.
!*/
pub mod aggregate;
mod feature;
mod token;

pub use aggregate::{EntityAggregator, Rule, Run};
pub use feature::{Counts, FeatureRow, FeatureType, Features};
pub use token::{AnnotatedToken, NameField, Ner};
