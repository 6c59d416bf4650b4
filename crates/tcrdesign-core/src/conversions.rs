use crate::AtomCollection;
use itertools::Itertools;
use pdbtbx::PDB;

impl From<&PDB> for AtomCollection {
    // the PDB API requires us to iterate:
    // PDB --> Chain --> Residue --> Atom if we want data from all.
    // Here we collect all the data in one go and return an AtomCollection
    fn from(pdb_data: &PDB) -> Self {
        #[allow(clippy::type_complexity)]
        let (coords, atom_names, res_ids, ins_codes, res_names, chain_ids): (
            Vec<[f32; 3]>,
            Vec<String>,
            Vec<i32>,
            Vec<String>,
            Vec<String>,
            Vec<String>,
        ) = pdb_data
            .chains()
            .flat_map(|chain| {
                let chain_id = chain.id().to_string();
                chain.residues().flat_map(move |residue| {
                    let (res_number, insertion_code) = residue.id();
                    let res_id = res_number as i32;
                    let ins_code = insertion_code.unwrap_or_default().trim().to_string();
                    let res_name = residue.name().unwrap_or_default().to_string();
                    let chain_id = chain_id.clone();
                    residue.atoms().map(move |atom| {
                        let (x, y, z) = atom.pos();
                        (
                            [x as f32, y as f32, z as f32],
                            atom.name().to_string(),
                            res_id,
                            ins_code.clone(),
                            res_name.clone(),
                            chain_id.clone(),
                        )
                    })
                })
            })
            .multiunzip();

        AtomCollection::new(
            coords.len(),
            coords,
            res_ids,
            ins_codes,
            res_names,
            atom_names,
            chain_ids,
        )
    }
}
