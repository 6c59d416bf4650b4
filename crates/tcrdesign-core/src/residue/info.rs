//! Per-atom information borrowed from an [`AtomCollection`](crate::AtomCollection).

#[derive(Debug)]
pub struct AtomInfo<'a> {
    pub coords: &'a [f32; 3],
    pub atom_name: &'a String,
}
