use crate::info::constants::is_amino_acid;
use crate::residue::{ResidueAtoms, ResidueIter};
use itertools::{izip, Itertools};

/// Flat, column-oriented view of a biomolecular structure.
///
/// Every per-atom property lives in its own vector; index `i` in each vector
/// refers to the same atom.
#[derive(Debug, Clone)]
pub struct AtomCollection {
    size: usize,
    coords: Vec<[f32; 3]>,
    res_ids: Vec<i32>,
    ins_codes: Vec<String>,
    res_names: Vec<String>,
    atom_names: Vec<String>,
    chain_ids: Vec<String>,
}

impl AtomCollection {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        size: usize,
        coords: Vec<[f32; 3]>,
        res_ids: Vec<i32>,
        ins_codes: Vec<String>,
        res_names: Vec<String>,
        atom_names: Vec<String>,
        chain_ids: Vec<String>,
    ) -> Self {
        AtomCollection {
            size,
            coords,
            res_ids,
            ins_codes,
            res_names,
            atom_names,
            chain_ids,
        }
    }
    pub fn get_atom_name(&self, idx: usize) -> &String {
        &self.atom_names[idx]
    }
    pub fn get_chain_id(&self, idx: usize) -> &String {
        &self.chain_ids[idx]
    }
    pub fn get_coord(&self, idx: usize) -> &[f32; 3] {
        &self.coords[idx]
    }
    pub fn get_ins_code(&self, idx: usize) -> &String {
        &self.ins_codes[idx]
    }
    pub fn get_res_id(&self, idx: usize) -> &i32 {
        &self.res_ids[idx]
    }
    pub fn get_res_name(&self, idx: usize) -> &String {
        &self.res_names[idx]
    }
    /// Chain ids in order of first appearance.
    pub fn get_chain_ids(&self) -> Vec<String> {
        self.chain_ids.iter().unique().cloned().collect()
    }
    /// A new residue starts, either when the chain ID, residue ID,
    /// insertion code or residue name changes from one to the next atom.
    ///
    /// The returned vector is terminated by `size` so that consecutive pairs
    /// delimit every residue.
    pub(crate) fn get_residue_starts(&self) -> Vec<usize> {
        if self.size == 0 {
            return vec![0];
        }
        let mut starts = vec![0];
        starts.extend(
            izip!(
                &self.res_ids,
                &self.ins_codes,
                &self.res_names,
                &self.chain_ids
            )
            .tuple_windows()
            .enumerate()
            .filter_map(|(i, ((id1, ins1, name1, chain1), (id2, ins2, name2, chain2)))| {
                if id1 != id2 || ins1 != ins2 || name1 != name2 || chain1 != chain2 {
                    Some(i + 1)
                } else {
                    None
                }
            }),
        );
        starts.push(self.size);
        starts
    }
    /// IterResidues will iterate through the AtomCollection one residue at a time.
    ///
    /// This is the base for any other residue filtration code.
    pub fn iter_residues_all(&self) -> ResidueIter {
        ResidueIter::new(self, self.get_residue_starts())
    }
    pub fn iter_residues_aminoacid(&self) -> impl Iterator<Item = ResidueAtoms> {
        self.iter_residues_all()
            .filter(|residue| is_amino_acid(&residue.res_name))
    }
}
