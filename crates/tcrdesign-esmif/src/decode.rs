//! Autoregressive filling of a partial sequence.
//!
//! The decoder input is `<cath>` followed by one token per position. Fixed
//! residues and `<pad>` stay as they are; each `<mask>` is replaced, left to
//! right, by the token chosen from the prefix decoded so far.
use crate::Alphabet;
use anyhow::Result;
use tcrdesign_core::SeqToken;

/// `<cath>` then the token index of every position.
pub fn encode_partial_sequence(alphabet: &Alphabet, partial_seq: &[SeqToken]) -> Vec<i64> {
    let mut tokens = Vec::with_capacity(partial_seq.len() + 1);
    tokens.push(alphabet.bos_idx() as i64);
    tokens.extend(
        partial_seq
            .iter()
            .map(|tok| alphabet.get_idx(&tok.to_string()) as i64),
    );
    tokens
}

/// Fill every `<mask>` of `partial_seq` with `next_token(prefix)`.
///
/// `prefix` is the decoder input up to, not including, the masked position.
/// The result has one character per position; `<pad>` and other non-residue
/// tokens come out as `X`.
pub fn fill_masked<F>(
    alphabet: &Alphabet,
    partial_seq: &[SeqToken],
    mut next_token: F,
) -> Result<String>
where
    F: FnMut(&[i64]) -> Result<usize>,
{
    let mask_idx = alphabet.mask_idx() as i64;
    let mut tokens = encode_partial_sequence(alphabet, partial_seq);
    for i in 1..tokens.len() {
        if tokens[i] != mask_idx {
            continue;
        }
        tokens[i] = next_token(&tokens[..i])? as i64;
    }

    Ok(tokens[1..]
        .iter()
        .map(|&t| alphabet.decode_residue(t as usize))
        .collect())
}
