//! Backbone coordinates per chain.
//!
//! Each chain becomes an `[L, 3, 3]` array of N / CA / C positions. Atoms missing
//! from the file are NaN so that the model treats them as unknown.
use crate::info::constants::{aa3to1, BACKBONE_ATOMS};
use crate::{AtomCollection, StructureError};
use ndarray::Array3;

/// Open a PDB or mmCIF file and flatten its first model.
pub fn load_structure(path: &str) -> Result<AtomCollection, StructureError> {
    let (pdb, warnings) = pdbtbx::open(path).map_err(|errors| StructureError::Read {
        path: path.to_string(),
        message: errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; "),
    })?;
    for warning in warnings {
        log::debug!("{}: {}", path, warning);
    }
    Ok(AtomCollection::from(&pdb))
}

#[derive(Debug, Clone)]
pub struct ChainCoords {
    pub chain_id: String,
    /// Residue numbers, one per row of `coords`.
    pub res_ids: Vec<i32>,
    /// Insertion codes, empty when absent.
    pub ins_codes: Vec<String>,
    /// One-letter native sequence, `X` for non-canonical residues.
    pub sequence: String,
    /// `[L, 3, 3]` N / CA / C coordinates.
    pub coords: Array3<f32>,
}

impl ChainCoords {
    pub fn len(&self) -> usize {
        self.res_ids.len()
    }
    pub fn is_empty(&self) -> bool {
        self.res_ids.is_empty()
    }
    /// Positions of every residue numbered `res_id`, insertion codes included.
    pub fn positions_of(&self, res_id: i32) -> Vec<usize> {
        self.res_ids
            .iter()
            .enumerate()
            .filter(|(_, &id)| id == res_id)
            .map(|(pos, _)| pos)
            .collect()
    }
    /// `<res_id><ins_code><chain_id>` of the residue at `pos`, e.g. `111AD`.
    pub fn residue_label(&self, pos: usize) -> Option<String> {
        let res_id = self.res_ids.get(pos)?;
        let ins_code = self.ins_codes.get(pos).map(String::as_str).unwrap_or_default();
        Some(format!("{}{}{}", res_id, ins_code.trim(), self.chain_id))
    }
}

/// All protein chains of a complex, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct ComplexCoords {
    chains: Vec<ChainCoords>,
}

impl ComplexCoords {
    pub fn chains(&self) -> &[ChainCoords] {
        &self.chains
    }
    pub fn chain_ids(&self) -> Vec<&str> {
        self.chains.iter().map(|c| c.chain_id.as_str()).collect()
    }
    pub fn chain(&self, chain_id: &str) -> Result<&ChainCoords, StructureError> {
        self.chains
            .iter()
            .find(|c| c.chain_id == chain_id)
            .ok_or_else(|| StructureError::UnknownChain(chain_id.to_string()))
    }
    /// Native sequences of `chain_ids`, joined without separators.
    pub fn native_sequence(&self, chain_ids: &[String]) -> Result<String, StructureError> {
        chain_ids
            .iter()
            .map(|id| self.chain(id).map(|c| c.sequence.as_str()))
            .collect()
    }
}

struct ChainBuilder {
    chain_id: String,
    res_ids: Vec<i32>,
    ins_codes: Vec<String>,
    sequence: String,
    flat: Vec<f32>,
}

/// Collect backbone coordinates and native sequence for every protein chain.
///
/// Residues that are not amino acids, or that carry none of the backbone
/// atoms, are skipped.
pub fn extract_coords_from_complex(ac: &AtomCollection) -> ComplexCoords {
    let mut builders: Vec<ChainBuilder> = Vec::new();

    for residue in ac.iter_residues_aminoacid() {
        let backbone = BACKBONE_ATOMS.map(|name| residue.find_atom_by_name(name));
        if backbone.iter().all(Option::is_none) {
            continue;
        }

        let idx = match builders.iter().position(|b| b.chain_id == residue.chain_id) {
            Some(idx) => idx,
            None => {
                builders.push(ChainBuilder {
                    chain_id: residue.chain_id.clone(),
                    res_ids: Vec::new(),
                    ins_codes: Vec::new(),
                    sequence: String::new(),
                    flat: Vec::new(),
                });
                builders.len() - 1
            }
        };
        let builder = &mut builders[idx];

        builder.res_ids.push(residue.res_id);
        builder.ins_codes.push(residue.ins_code.clone());
        builder.sequence.push(aa3to1(&residue.res_name));
        for atom in backbone {
            match atom {
                Some(atom) => builder.flat.extend_from_slice(atom.coords),
                None => builder.flat.extend_from_slice(&[f32::NAN; 3]),
            }
        }
    }

    let chains = builders
        .into_iter()
        .map(|b| {
            let n = b.res_ids.len();
            // n * 3 * 3 values were pushed above
            let coords = Array3::from_shape_vec((n, 3, 3), b.flat)
                .unwrap_or_else(|_| Array3::from_elem((n, 3, 3), f32::NAN));
            ChainCoords {
                chain_id: b.chain_id,
                res_ids: b.res_ids,
                ins_codes: b.ins_codes,
                sequence: b.sequence,
                coords,
            }
        })
        .collect();

    ComplexCoords { chains }
}
