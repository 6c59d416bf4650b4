//! ESM-IF vocabulary.
//!
//! Layout: four leading specials, the protein letters, one filler token to
//! reach a multiple of 8, then `<mask>` and the two conditioning tokens.
use std::collections::HashMap;

const PREPEND_TOKS: [&str; 4] = ["<null_0>", "<pad>", "<eos>", "<unk>"];
const PROTEIN_TOKS: [&str; 27] = [
    "L", "A", "G", "V", "S", "E", "R", "T", "I", "D", "P", "K", "Q", "N", "F", "Y", "M", "H", "W",
    "C", "X", "B", "U", "Z", "O", ".", "-",
];
const APPEND_TOKS: [&str; 3] = ["<mask>", "<cath>", "<af2>"];
const STANDARD_RESIDUES: &str = "ACDEFGHIKLMNPQRSTVWY";

#[derive(Debug, Clone)]
pub struct Alphabet {
    all_toks: Vec<String>,
    tok_to_idx: HashMap<String, usize>,
}

impl Alphabet {
    pub fn esm_if() -> Self {
        let mut all_toks: Vec<String> = PREPEND_TOKS
            .iter()
            .chain(PROTEIN_TOKS.iter())
            .map(|t| t.to_string())
            .collect();
        let mut i = 1;
        while all_toks.len() % 8 != 0 {
            all_toks.push(format!("<null_{}>", i));
            i += 1;
        }
        all_toks.extend(APPEND_TOKS.iter().map(|t| t.to_string()));

        let tok_to_idx = all_toks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self {
            all_toks,
            tok_to_idx,
        }
    }
    pub fn len(&self) -> usize {
        self.all_toks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.all_toks.is_empty()
    }
    /// Index of `tok`, `<unk>` for anything outside the vocabulary.
    pub fn get_idx(&self, tok: &str) -> usize {
        self.tok_to_idx
            .get(tok)
            .copied()
            .unwrap_or_else(|| self.unk_idx())
    }
    pub fn get_tok(&self, idx: usize) -> Option<&str> {
        self.all_toks.get(idx).map(String::as_str)
    }
    pub fn unk_idx(&self) -> usize {
        self.tok_to_idx["<unk>"]
    }
    pub fn padding_idx(&self) -> usize {
        self.tok_to_idx["<pad>"]
    }
    pub fn mask_idx(&self) -> usize {
        self.tok_to_idx["<mask>"]
    }
    /// First decoder token.
    pub fn bos_idx(&self) -> usize {
        self.tok_to_idx["<cath>"]
    }
    /// Indices of the 20 canonical amino acids, the only tokens that are sampled.
    pub fn standard_residue_indices(&self) -> Vec<usize> {
        STANDARD_RESIDUES
            .chars()
            .map(|c| self.get_idx(&c.to_string()))
            .collect()
    }
    /// One character per token: residue letters as-is, anything else `X`.
    pub fn decode_residue(&self, idx: usize) -> char {
        match self.get_tok(idx) {
            Some(tok) if tok.len() == 1 => tok.chars().next().unwrap_or('X'),
            _ => 'X',
        }
    }
}
