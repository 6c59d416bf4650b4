use crate::MultichainLayout;
use std::fmt;

/// One entry of the partial sequence given to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqToken {
    /// Fixed residue, kept as-is by the model.
    Residue(char),
    /// Position to be sampled.
    Mask,
    /// Position the model ignores.
    Pad,
}

impl fmt::Display for SeqToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqToken::Residue(c) => write!(f, "{}", c),
            SeqToken::Mask => write!(f, "<mask>"),
            SeqToken::Pad => write!(f, "<pad>"),
        }
    }
}

/// Build the partial sequence for a layout.
///
/// Target residues carry their native letter, designed residues (native-frame
/// indices) are masked and everything else is padding, so that no effort is
/// spent sampling non-target chains.
pub fn build_partial_sequence(layout: &MultichainLayout, designed: &[usize]) -> Vec<SeqToken> {
    let mut pattern = vec![SeqToken::Pad; layout.len()];
    for (native_index, residue) in layout.native_sequence().chars().enumerate() {
        if let Some(row) = layout.to_concat_index(native_index) {
            pattern[row] = if designed.contains(&native_index) {
                SeqToken::Mask
            } else {
                SeqToken::Residue(residue)
            };
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::get_tcr_only;
    use crate::{concatenate_multichain_coords, extract_coords_from_complex};

    #[test]
    fn test_partial_sequence() {
        let complex = extract_coords_from_complex(&get_tcr_only());
        let chains = vec!["D".to_string(), "E".to_string()];
        let layout = concatenate_multichain_coords(&complex, &chains, 3).unwrap();

        let pattern = build_partial_sequence(&layout, &[2, 3, 8]);
        assert_eq!(pattern.len(), 6 + 3 + 5);

        let rendered: Vec<String> = pattern.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "A", "S", "<mask>", "<mask>", "T", "L", "<pad>", "<pad>", "<pad>", "Y", "R",
                "<mask>", "N", "M"
            ]
        );
    }

    #[test]
    fn test_non_target_chains_are_padding() {
        let complex = extract_coords_from_complex(&get_tcr_only());
        let layout = concatenate_multichain_coords(&complex, &["E".to_string()], 10).unwrap();
        let pattern = build_partial_sequence(&layout, &[0]);

        assert_eq!(pattern[0], SeqToken::Mask);
        assert_eq!(pattern[1], SeqToken::Residue('R'));
        assert!(pattern[5..].iter().all(|t| *t == SeqToken::Pad));
    }
}
