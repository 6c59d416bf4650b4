//! Atoms of a single residue.
//!
//! A residue is a contiguous run of atoms in the parent [`AtomCollection`] that
//! share chain, residue number, insertion code and residue name.
//!
use super::info::AtomInfo;
use crate::info::constants::is_amino_acid;
use crate::AtomCollection;

pub struct ResidueAtoms<'a> {
    pub start_idx: usize,
    pub end_idx: usize,
    pub res_id: i32,
    pub ins_code: String,
    pub res_name: String,
    pub chain_id: String,
    pub parent: &'a AtomCollection,
}

impl<'a> ResidueAtoms<'a> {
    pub fn is_amino_acid(&self) -> bool {
        is_amino_acid(&self.res_name)
    }

    fn atom_info(&self, i: usize) -> AtomInfo<'a> {
        let parent = self.parent;
        AtomInfo {
            coords: parent.get_coord(i),
            atom_name: parent.get_atom_name(i),
        }
    }

    // Find atom by name within this residue
    pub fn find_atom_by_name(&self, name: &str) -> Option<AtomInfo<'a>> {
        (self.start_idx..self.end_idx)
            .find(|&i| self.parent.get_atom_name(i) == name)
            .map(|i| self.atom_info(i))
    }
}
