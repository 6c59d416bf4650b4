use super::atoms::ResidueAtoms;
use crate::AtomCollection;

pub struct ResidueIter<'a> {
    atom_collection: &'a AtomCollection,
    residue_starts: Vec<usize>,
    current_idx: usize,
}

impl<'a> ResidueIter<'a> {
    pub fn new(atom_collection: &'a AtomCollection, residue_starts: Vec<usize>) -> Self {
        ResidueIter {
            atom_collection,
            residue_starts,
            current_idx: 0,
        }
    }
}

impl<'a> Iterator for ResidueIter<'a> {
    type Item = ResidueAtoms<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_idx + 1 >= self.residue_starts.len() {
            return None;
        }

        let start_idx = self.residue_starts[self.current_idx];
        let end_idx = self.residue_starts[self.current_idx + 1];

        let residue = ResidueAtoms {
            start_idx,
            end_idx,
            res_id: *self.atom_collection.get_res_id(start_idx),
            ins_code: self.atom_collection.get_ins_code(start_idx).clone(),
            res_name: self.atom_collection.get_res_name(start_idx).clone(),
            chain_id: self.atom_collection.get_chain_id(start_idx).clone(),
            parent: self.atom_collection,
        };

        self.current_idx += 1;
        Some(residue)
    }
}
