//! tcrdesign-esmif
//!
//! The inverse-folding model seam.
//!
//! - [`InverseFoldingModel`]: what the sampling pipeline needs from a model.
//! - [`Alphabet`]: the ESM-IF token vocabulary.
//! - [`CoordBatch`]: coordinates framed the way the ESM-IF encoder expects.
//! - [`fill_masked`]: left-to-right filling of `<mask>` positions.
//! - [`EsmIfOnnx`]: ESM-IF1 exported to ONNX and run with ONNX Runtime. Weights
//!   come from local files or a HuggingFace repository.
//!
mod alphabet;
mod batch;
mod decode;
mod onnx;
mod sampler;

pub use alphabet::Alphabet;
pub use batch::CoordBatch;
pub use decode::{encode_partial_sequence, fill_masked};
pub use onnx::{EsmIfOnnx, ModelSource, DECODER_FILE, ENCODER_FILE};
pub use sampler::ResidueSampler;

use ndarray::Array3;
use tcrdesign_core::SeqToken;

/// A pretrained inverse-folding model.
///
/// `coords` is `[L, 3, 3]` (N / CA / C), NaN rows marking chain breaks.
/// `partial_seq` has length `L`. The returned sequence has one character per
/// row: fixed residues are returned unchanged and masked positions are
/// sampled at `temperature`.
pub trait InverseFoldingModel {
    fn sample(
        &mut self,
        coords: &Array3<f32>,
        partial_seq: &[SeqToken],
        temperature: f64,
    ) -> anyhow::Result<String>;
}
