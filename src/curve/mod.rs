pub mod hilbert;
pub mod masks;
pub mod spec;
pub mod visitor;

#[cfg(test)]
pub(crate) mod tests;

pub use hilbert::CompactHilbertCurve;
pub use masks::HilbertIndexMasks;
pub use spec::MultiDimensionalSpec;
pub use visitor::{SpaceVisitor, ZoomingNavigator, ZoomingSpaceVisitorAdapter};
