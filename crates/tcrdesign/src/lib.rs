//! tcrdesign
//!
//! Sequence design on multi-chain complexes with an inverse-folding model.
//!
//! - [`pipeline`]: sample designs for one structure or a whole design config.
//! - [`stats`]: recovery, uniqueness and per-position residue frequencies.
//! - CLI (`tcrdesign run`, `tcrdesign sample`) wiring the above to ESM-IF1.
//!
pub mod cli;
mod commands;
pub mod pipeline;
pub mod stats;

pub use pipeline::{
    design_targets, sample_seq_multichain, sample_structures, SampleOutput, SamplingParams,
};
pub use stats::{frequency_of_residues, prepare_sample_output, recovery, uniqueness};
