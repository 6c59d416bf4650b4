//! # Constants
//!
//! Residue vocabulary used when reading structures and summarising designs.
//!
//! - `is_amino_acid()` - Check if a residue name is a (possibly modified) amino acid
//! - `aa3to1()` - Three letter to one letter code, `X` for anything non-canonical
//! - [`AminoAcid`] - The 20 canonical amino acids in one-letter alphabetical order
//!
use std::collections::HashSet;
use std::sync::OnceLock;
use strum::{Display, EnumIter, EnumString};

/// Backbone atoms handed to the inverse-folding model, in order.
pub const BACKBONE_ATOMS: [&str; 3] = ["N", "CA", "C"];

#[rustfmt::skip]
const AMINO_ACIDS: [&str; 30] = [
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    // common modified residues and placeholders seen in deposited complexes
    "MSE", "SEC", "PYL", "HYP", "SEP", "TPO", "PTR", "CSO", "MLY", "UNK",
];

static AMINO_ACID_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_amino_acids() -> &'static HashSet<&'static str> {
    AMINO_ACID_SET.get_or_init(|| AMINO_ACIDS.into_iter().collect())
}

pub fn is_amino_acid(symbol: &str) -> bool {
    get_amino_acids().contains(symbol)
}

#[rustfmt::skip]
pub fn aa3to1(aa: &str) -> char {
    match aa {
        "ALA" => 'A', "CYS" => 'C', "ASP" => 'D',
        "GLU" => 'E', "PHE" => 'F', "GLY" => 'G',
        "HIS" => 'H', "ILE" => 'I', "LYS" => 'K',
        "LEU" => 'L', "MET" => 'M', "ASN" => 'N',
        "PRO" => 'P', "GLN" => 'Q', "ARG" => 'R',
        "SER" => 'S', "THR" => 'T', "VAL" => 'V',
        "TRP" => 'W', "TYR" => 'Y', _     => 'X',
    }
}

/// Canonical amino acids, ordered by one-letter code.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum AminoAcid {
    A, C, D, E, F, G, H, I, K, L,
    M, N, P, Q, R, S, T, V, W, Y,
}

impl AminoAcid {
    pub fn code1(&self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::I => 'I',
            Self::K => 'K',
            Self::L => 'L',
            Self::M => 'M',
            Self::N => 'N',
            Self::P => 'P',
            Self::Q => 'Q',
            Self::R => 'R',
            Self::S => 'S',
            Self::T => 'T',
            Self::V => 'V',
            Self::W => 'W',
            Self::Y => 'Y',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_residue_checking() {
        assert!(is_amino_acid("ALA"));
        assert!(is_amino_acid("MSE"));
        assert!(!is_amino_acid("HOH"));
        assert!(!is_amino_acid("ZZZ"));
    }

    #[test]
    fn test_aa3to1() {
        assert_eq!(aa3to1("TRP"), 'W');
        assert_eq!(aa3to1("MSE"), 'X');
    }

    #[test]
    fn test_amino_acid_order() {
        let codes: String = AminoAcid::iter().map(|aa| aa.code1()).collect();
        assert_eq!(codes, "ACDEFGHIKLMNPQRSTVWY");
        assert_eq!(AminoAcid::W.to_string(), "W");
    }
}
