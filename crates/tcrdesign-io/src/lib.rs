//! tcrdesign-io
//!
//! Reading design configurations and writing results: FASTA files of sampled
//! sequences and CSV summaries built with polars.
mod config;
mod fasta;
mod tables;

pub use config::{read_config, DesignTarget};
pub use fasta::write_fasta;
pub use tables::{
    write_designs, write_frequency, write_recoveries, write_recovery_summary, write_uniqueness,
    StructureSummary,
};
