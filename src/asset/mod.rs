//! Asset classification.

mod kind;

pub use kind::AssetKind;
