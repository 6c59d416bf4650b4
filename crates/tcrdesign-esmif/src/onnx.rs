//! ESM-IF1 (`esm_if1_gvp4_t16_142M_UR50`) exported to ONNX.
//!
//! Two graphs are expected:
//!
//! * encoder: `coords [1, L+2, 3, 3] f32`, `confidence [1, L+2] f32`,
//!   `padding_mask [1, L+2] bool` -> `encoder_out`
//! * decoder: `tokens [1, T] i64`, `encoder_out`, `padding_mask` -> `logits [1, vocab, T]`
//!
//! Decoding follows the ESM-IF sampler: `<cath>` first, then the partial
//! sequence; every `<mask>` is filled left to right from the logits of the last
//! decoded step.
use crate::decode::fill_masked;
use crate::{Alphabet, CoordBatch, InverseFoldingModel, ResidueSampler};
use anyhow::{anyhow, Result};
use hf_hub::api::sync::Api;
use ndarray::{Array2, Array3, ArrayD};
use ort::{
    execution_providers::CUDAExecutionProvider,
    session::{builder::GraphOptimizationLevel, Session},
    value::Tensor,
};
use std::path::PathBuf;
use tcrdesign_core::SeqToken;

pub const ENCODER_FILE: &str = "esm_if1_encoder.onnx";
pub const DECODER_FILE: &str = "esm_if1_decoder.onnx";

/// Where to find the encoder and decoder graphs.
#[derive(Debug, Clone)]
pub enum ModelSource {
    Local { encoder: PathBuf, decoder: PathBuf },
    /// HuggingFace repository holding [`ENCODER_FILE`] and [`DECODER_FILE`].
    Hub { repo_id: String },
}

impl ModelSource {
    pub fn load_model_path(&self) -> Result<(PathBuf, PathBuf)> {
        match self {
            ModelSource::Local { encoder, decoder } => {
                for path in [encoder, decoder] {
                    if !path.exists() {
                        return Err(anyhow!("model file {} does not exist", path.display()));
                    }
                }
                Ok((encoder.clone(), decoder.clone()))
            }
            ModelSource::Hub { repo_id } => {
                let api = Api::new()?;
                let repo = api.model(repo_id.clone());
                let encoder_path = repo.get(ENCODER_FILE)?;
                let decoder_path = repo.get(DECODER_FILE)?;
                Ok((encoder_path, decoder_path))
            }
        }
    }
}

pub struct EsmIfOnnx {
    encoder: Session,
    decoder: Session,
    alphabet: Alphabet,
    sampler: ResidueSampler,
}

impl EsmIfOnnx {
    pub fn new(source: &ModelSource, seed: u64) -> Result<Self> {
        let (encoder_path, decoder_path) = source.load_model_path()?;

        // CUDA when the runtime has it, CPU otherwise
        ort::init()
            .with_name("ESM-IF1")
            .with_execution_providers([CUDAExecutionProvider::default().build()])
            .commit()?;

        let session_config = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level1)?
            .with_intra_threads(1)?;

        log::info!("Loading encoder from {}", encoder_path.display());
        let encoder = session_config.clone().commit_from_file(&encoder_path)?;
        log::info!("Loading decoder from {}", decoder_path.display());
        let decoder = session_config.commit_from_file(&decoder_path)?;

        let alphabet = Alphabet::esm_if();
        let sampler = ResidueSampler::new(&alphabet, seed);
        Ok(Self {
            encoder,
            decoder,
            alphabet,
            sampler,
        })
    }

    fn encode(&self, batch: &CoordBatch) -> Result<ArrayD<f32>> {
        let outputs = self.encoder.run(ort::inputs![
            "coords" => Tensor::from_array(batch.coords.clone())?,
            "confidence" => Tensor::from_array(batch.confidence.clone())?,
            "padding_mask" => Tensor::from_array(batch.padding_mask.clone())?,
        ]?)?;
        Ok(outputs["encoder_out"]
            .try_extract_tensor::<f32>()?
            .to_owned())
    }
}

/// Logits of the last position for the decoded prefix.
fn last_step_logits(
    decoder: &Session,
    vocab_size: usize,
    prefix: &[i64],
    encoder_out: &ArrayD<f32>,
    batch: &CoordBatch,
) -> Result<Vec<f32>> {
    let tokens = Array2::from_shape_vec((1, prefix.len()), prefix.to_vec())?;
    let outputs = decoder.run(ort::inputs![
        "tokens" => Tensor::from_array(tokens)?,
        "encoder_out" => Tensor::from_array(encoder_out.clone())?,
        "padding_mask" => Tensor::from_array(batch.padding_mask.clone())?,
    ]?)?;

    // [1, vocab, T]
    let logits = outputs["logits"].try_extract_tensor::<f32>()?;
    let shape = logits.shape().to_vec();
    if shape.len() != 3 || shape[1] != vocab_size {
        return Err(anyhow!("unexpected decoder logits shape {:?}", shape));
    }
    let last = shape[2] - 1;
    Ok((0..shape[1]).map(|v| logits[[0, v, last]]).collect())
}

impl InverseFoldingModel for EsmIfOnnx {
    fn sample(
        &mut self,
        coords: &Array3<f32>,
        partial_seq: &[SeqToken],
        temperature: f64,
    ) -> Result<String> {
        let length = coords.shape()[0];
        if partial_seq.len() != length {
            return Err(anyhow!(
                "partial sequence has {} tokens for {} positions",
                partial_seq.len(),
                length
            ));
        }

        let batch = CoordBatch::new(coords);
        let encoder_out = self.encode(&batch)?;

        let Self {
            decoder,
            alphabet,
            sampler,
            ..
        } = self;
        let vocab_size = alphabet.len();
        fill_masked(alphabet, partial_seq, |prefix| {
            let logits = last_step_logits(decoder, vocab_size, prefix, &encoder_out, &batch)?;
            sampler.sample(&logits, temperature)
        })
    }
}
