//! Multi-chain concatenation.
//!
//! The inverse-folding model takes a single chain. Complexes are presented as
//! one coordinate array: target chains first, then the remaining chains, with a
//! block of NaN rows between every two chains.
//!
//! Two index frames are in play:
//! - the *native frame*: target chain residues back to back, no padding. Native
//!   sequences, samples and design indices live here.
//! - the *concatenated frame*: rows of [`MultichainLayout::coords`], padding included.
use crate::{ComplexCoords, StructureError};
use ndarray::{concatenate, Array3, ArrayView3, Axis};

#[derive(Debug, Clone, PartialEq)]
pub struct ChainSpan {
    pub chain_id: String,
    /// First row of this chain in the concatenated frame.
    pub start: usize,
    pub len: usize,
    pub is_target: bool,
}

impl ChainSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

#[derive(Debug, Clone)]
pub struct MultichainLayout {
    pub coords: Array3<f32>,
    pub spans: Vec<ChainSpan>,
    pub padding_length: usize,
    native_sequence: String,
}

impl MultichainLayout {
    /// Total number of rows, padding included.
    pub fn len(&self) -> usize {
        self.coords.shape()[0]
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn target_spans(&self) -> impl Iterator<Item = &ChainSpan> {
        self.spans.iter().filter(|s| s.is_target)
    }
    /// Target chain sequences joined without padding.
    pub fn native_sequence(&self) -> &str {
        &self.native_sequence
    }
    /// Number of target residues, i.e. the length of the native frame.
    pub fn target_len(&self) -> usize {
        self.target_spans().map(|s| s.len).sum()
    }
    /// Rows covering all target chains, inter-target padding included.
    pub fn target_region_len(&self) -> usize {
        self.target_spans().map(ChainSpan::end).max().unwrap_or(0)
    }
    /// Map a native-frame index to its row in the concatenated frame.
    pub fn to_concat_index(&self, native_index: usize) -> Option<usize> {
        let mut offset = native_index;
        for span in self.target_spans() {
            if offset < span.len {
                return Some(span.start + offset);
            }
            offset -= span.len;
        }
        None
    }
    /// Pull the target residues out of a full-length sampled sequence.
    ///
    /// The result is in the native frame and has [`Self::target_len`] characters.
    pub fn extract_target_sequence(&self, sampled: &str) -> Result<String, StructureError> {
        let chars: Vec<char> = sampled.chars().collect();
        if chars.len() != self.len() {
            return Err(StructureError::SampleLength {
                expected: self.len(),
                found: chars.len(),
            });
        }
        Ok(self
            .target_spans()
            .flat_map(|span| chars[span.start..span.end()].iter())
            .collect())
    }
}

/// Concatenate chains for sampling, target chains first.
///
/// `padding_length` NaN rows separate consecutive chains. Non-target chains
/// follow in structure order.
pub fn concatenate_multichain_coords(
    complex: &ComplexCoords,
    target_chain_ids: &[String],
    padding_length: usize,
) -> Result<MultichainLayout, StructureError> {
    if target_chain_ids.is_empty() {
        return Err(StructureError::NoTargetChains);
    }
    let pad_coords = Array3::<f32>::from_elem((padding_length, 3, 3), f32::NAN);

    let mut ordered = Vec::with_capacity(complex.chains().len());
    for chain_id in target_chain_ids {
        ordered.push((complex.chain(chain_id)?, true));
    }
    for chain in complex.chains() {
        if !target_chain_ids.contains(&chain.chain_id) {
            ordered.push((chain, false));
        }
    }

    let mut views: Vec<ArrayView3<f32>> = Vec::with_capacity(ordered.len() * 2);
    let mut spans = Vec::with_capacity(ordered.len());
    let mut cursor = 0;
    for (i, (chain, is_target)) in ordered.iter().enumerate() {
        if i > 0 {
            views.push(pad_coords.view());
            cursor += padding_length;
        }
        views.push(chain.coords.view());
        spans.push(ChainSpan {
            chain_id: chain.chain_id.clone(),
            start: cursor,
            len: chain.len(),
            is_target: *is_target,
        });
        cursor += chain.len();
    }

    let coords = concatenate(Axis(0), &views)
        .unwrap_or_else(|_| Array3::from_elem((cursor, 3, 3), f32::NAN));

    Ok(MultichainLayout {
        coords,
        spans,
        padding_length,
        native_sequence: complex.native_sequence(target_chain_ids)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract_coords_from_complex;
    use crate::test_utilities::get_atom_container;

    fn targets() -> Vec<String> {
        vec!["D".to_string(), "E".to_string()]
    }

    #[test]
    fn test_targets_first_with_padding() {
        let complex = extract_coords_from_complex(&get_atom_container());
        let layout = concatenate_multichain_coords(&complex, &targets(), 10).unwrap();

        // D(6) pad E(5) pad A(4) pad C(3)
        assert_eq!(layout.len(), 6 + 10 + 5 + 10 + 4 + 10 + 3);
        let order: Vec<(&str, usize, bool)> = layout
            .spans
            .iter()
            .map(|s| (s.chain_id.as_str(), s.start, s.is_target))
            .collect();
        assert_eq!(
            order,
            vec![("D", 0, true), ("E", 16, true), ("A", 31, false), ("C", 45, false)]
        );

        assert!(layout.coords[[6, 0, 0]].is_nan());
        assert!(layout.coords[[15, 2, 2]].is_nan());
        assert!(!layout.coords[[16, 1, 0]].is_nan());
        assert_eq!(
            layout.coords[[16, 1, 0]],
            complex.chain("E").unwrap().coords[[0, 1, 0]]
        );
    }

    #[test]
    fn test_index_frames() {
        let complex = extract_coords_from_complex(&get_atom_container());
        let layout = concatenate_multichain_coords(&complex, &targets(), 10).unwrap();

        assert_eq!(layout.native_sequence(), "ASGQTLYRFNM");
        assert_eq!(layout.target_len(), 11);
        assert_eq!(layout.target_region_len(), 21);
        assert_eq!(layout.to_concat_index(0), Some(0));
        assert_eq!(layout.to_concat_index(5), Some(5));
        assert_eq!(layout.to_concat_index(6), Some(16));
        assert_eq!(layout.to_concat_index(10), Some(20));
        assert_eq!(layout.to_concat_index(11), None);
    }

    #[test]
    fn test_extract_target_sequence() {
        let complex = extract_coords_from_complex(&get_atom_container());
        let layout = concatenate_multichain_coords(&complex, &targets(), 2).unwrap();
        // D(6) pad(2) E(5) pad(2) A(4) pad(2) C(3)
        let sampled = "ASGQTL--YRFNM--GSHS--NLV";
        assert_eq!(
            layout.extract_target_sequence(sampled).unwrap(),
            "ASGQTLYRFNM"
        );
        assert!(matches!(
            layout.extract_target_sequence("ASG"),
            Err(StructureError::SampleLength { expected: 24, found: 3 })
        ));
    }

    #[test]
    fn test_zero_padding_and_target_order() {
        let complex = extract_coords_from_complex(&get_atom_container());
        let chains = vec!["E".to_string(), "D".to_string()];
        let layout = concatenate_multichain_coords(&complex, &chains, 0).unwrap();
        assert_eq!(layout.len(), 18);
        assert_eq!(layout.native_sequence(), "YRFNMASGQTL");
        assert_eq!(layout.spans[1].start, 5);
    }

    #[test]
    fn test_unknown_target_chain() {
        let complex = extract_coords_from_complex(&get_atom_container());
        let err = concatenate_multichain_coords(&complex, &["Q".to_string()], 10).unwrap_err();
        assert!(matches!(err, StructureError::UnknownChain(_)));
        let err = concatenate_multichain_coords(&complex, &[], 10).unwrap_err();
        assert!(matches!(err, StructureError::NoTargetChains));
    }
}
