use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("failed to read structure {path}: {message}")]
    Read { path: String, message: String },

    #[error("chain {0} not found in structure")]
    UnknownChain(String),

    #[error("no target chains given")]
    NoTargetChains,

    #[error("invalid design residue {0:?}; expected <residue number><chain id>, e.g. 110D")]
    InvalidDesignResidue(String),

    #[error("none of the design residues were found on chains {chains:?}")]
    NoDesignPositions { chains: Vec<String> },

    #[error("sampled sequence has length {found}, expected {expected}")]
    SampleLength { expected: usize, found: usize },
}
