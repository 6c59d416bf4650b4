use crate::{load_structure, AtomCollection};
use tcrdesign_test_data::TestFile;

pub(crate) fn get_atom_container() -> AtomCollection {
    let (path, _tmp) = TestFile::tcr_pmhc().create_temp().unwrap();
    load_structure(&path).unwrap()
}

pub(crate) fn get_tcr_only() -> AtomCollection {
    let (path, _tmp) = TestFile::tcr_only().create_temp().unwrap();
    load_structure(&path).unwrap()
}

pub(crate) fn get_tcr_insertion() -> AtomCollection {
    let (path, _tmp) = TestFile::tcr_insertion().create_temp().unwrap();
    load_structure(&path).unwrap()
}
