mod atoms;
mod info;
mod iterator;

pub use atoms::ResidueAtoms;
pub use info::AtomInfo;
pub use iterator::ResidueIter;
