//! Design residues, written `<residue number><chain id>` (e.g. `110D`).
use crate::{MultichainLayout, StructureError};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DesignResidue {
    pub res_id: i32,
    pub chain_id: String,
}

impl FromStr for DesignResidue {
    type Err = StructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || StructureError::InvalidDesignResidue(s.to_string());
        let chain = s.chars().last().ok_or_else(invalid)?;
        if !chain.is_ascii_alphanumeric() {
            return Err(invalid());
        }
        let number = &s[..s.len() - chain.len_utf8()];
        let res_id = number.parse::<i32>().map_err(|_| invalid())?;
        Ok(DesignResidue {
            res_id,
            chain_id: chain.to_string(),
        })
    }
}

impl fmt::Display for DesignResidue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.res_id, self.chain_id)
    }
}

/// Chains referenced by the design, in order of first mention.
pub fn get_chains(design: &[DesignResidue]) -> Vec<String> {
    design
        .iter()
        .map(|residue| residue.chain_id.clone())
        .unique()
        .collect()
}

/// Native-frame indices of the design residues, ascending.
///
/// A residue number selects every residue carrying it, whatever its insertion
/// code: `111D` covers both `111D` and `111AD`.
///
/// Design residues on chains outside the layout's targets, or absent from the
/// structure, are reported and skipped.
pub fn seq2index(
    layout: &MultichainLayout,
    complex: &crate::ComplexCoords,
    design: &[DesignResidue],
) -> Result<Vec<usize>, StructureError> {
    let mut indexes = Vec::with_capacity(design.len());
    let mut offset = 0;
    for span in layout.target_spans() {
        let chain = complex.chain(&span.chain_id)?;
        for residue in design.iter().filter(|r| r.chain_id == span.chain_id) {
            let positions = chain.positions_of(residue.res_id);
            if positions.is_empty() {
                log::warn!("design residue {} not found in structure", residue);
            }
            indexes.extend(positions.into_iter().map(|pos| offset + pos));
        }
        offset += span.len;
    }
    for residue in design {
        if !layout.target_spans().any(|s| s.chain_id == residue.chain_id) {
            log::warn!(
                "design residue {} is not on a target chain; skipping",
                residue
            );
        }
    }

    let indexes: Vec<usize> = indexes.into_iter().sorted().dedup().collect();
    if indexes.is_empty() {
        return Err(StructureError::NoDesignPositions {
            chains: layout.target_spans().map(|s| s.chain_id.clone()).collect(),
        });
    }
    Ok(indexes)
}
