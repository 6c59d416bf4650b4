use crate::Alphabet;
use anyhow::Result;
use candle_core::{Device, Tensor};
use candle_transformers::generation::LogitsProcessor;

/// Temperature sampling over the canonical amino acids.
///
/// Logits of every other token are set to `-inf` before sampling. A
/// temperature of zero picks the arg-max.
pub struct ResidueSampler {
    allowed: Vec<usize>,
    seed: u64,
    processor: Option<(LogitsProcessor, u64)>,
}

impl ResidueSampler {
    pub fn new(alphabet: &Alphabet, seed: u64) -> Self {
        Self {
            allowed: alphabet.standard_residue_indices(),
            seed,
            processor: None,
        }
    }

    /// Sample one token index from a full-vocabulary logit row.
    pub fn sample(&mut self, logits: &[f32], temperature: f64) -> Result<usize> {
        let mut masked = vec![f32::NEG_INFINITY; logits.len()];
        for &idx in &self.allowed {
            if let Some(&value) = logits.get(idx) {
                masked[idx] = value;
            }
        }

        // the processor owns its rng, keep it across calls at a fixed temperature
        let key = temperature.to_bits();
        if !matches!(&self.processor, Some((_, bits)) if *bits == key) {
            self.processor = Some((LogitsProcessor::new(self.seed, Some(temperature), None), key));
            self.seed = self.seed.wrapping_add(1);
        }
        let (processor, _) = self
            .processor
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("logits processor not initialised"))?;

        let logits = Tensor::new(masked.as_slice(), &Device::Cpu)?;
        Ok(processor.sample(&logits)? as usize)
    }
}
