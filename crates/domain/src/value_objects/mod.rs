//! Value objects - small immutable vocabulary types

mod attribute;
mod delta;

pub use attribute::Attribute;
pub use delta::Delta;
