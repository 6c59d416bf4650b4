//! # tcrdesign-core
//!
//! Structural input preparation for inverse-folding sequence design on
//! multi-chain complexes.
//!
//! __tcrdesign-core__ provides functionality for:
//! * Reading PDB / mmCIF files into a flat [`AtomCollection`]
//! * Extracting per-chain N / CA / C backbone coordinates and native sequences
//! * Concatenating chains into a single NaN-padded coordinate array ([`MultichainLayout`])
//! * Resolving design residues such as `110D` to sequence positions
//! * Building the partial-sequence pattern ([`SeqToken`]) handed to the model
//!
mod atomcollection;
mod conversions;
mod coords;
mod design;
mod error;
mod info;
mod multichain;
mod partial;
mod residue;

#[cfg(test)]
mod test_utilities;

pub use self::atomcollection::AtomCollection;
pub use self::coords::{extract_coords_from_complex, load_structure, ChainCoords, ComplexCoords};
pub use self::design::{get_chains, seq2index, DesignResidue};
pub use self::error::StructureError;
pub use self::info::constants::{aa3to1, is_amino_acid, AminoAcid, BACKBONE_ATOMS};
pub use self::multichain::{concatenate_multichain_coords, ChainSpan, MultichainLayout};
pub use self::partial::{build_partial_sequence, SeqToken};
pub use self::residue::ResidueAtoms;
