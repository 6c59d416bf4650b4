//! Sampling designs on multi-chain structures.
use crate::stats::{frequency_of_residues, prepare_sample_output, recovery, uniqueness};
use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use rand::Rng;
use std::path::{Path, PathBuf};
use tcrdesign_core::{
    build_partial_sequence, concatenate_multichain_coords, extract_coords_from_complex,
    get_chains, load_structure, seq2index, ComplexCoords, DesignResidue, MultichainLayout,
};
use tcrdesign_esmif::InverseFoldingModel;
use tcrdesign_io::{
    write_designs, write_fasta, write_frequency, write_recoveries, write_recovery_summary,
    write_uniqueness, DesignTarget, StructureSummary,
};

#[derive(Debug, Clone)]
pub struct SamplingParams {
    pub num_samples: usize,
    pub temperature: f64,
    /// NaN rows inserted between consecutive chains.
    pub padding_length: usize,
    pub verbose: bool,
    pub seed: Option<u64>,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            num_samples: 10,
            temperature: 1.0,
            padding_length: 10,
            verbose: false,
            seed: None,
        }
    }
}

impl SamplingParams {
    pub fn validate(&self) -> Result<()> {
        if self.num_samples == 0 {
            return Err(anyhow!("num_samples must be at least 1"));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(anyhow!(
                "temperature must be a non-negative number, got {}",
                self.temperature
            ));
        }
        Ok(())
    }

    /// The configured seed, or a random one.
    pub fn resolve_seed(&self) -> u64 {
        match self.seed {
            Some(s) => s,
            None => {
                let mut rng = rand::thread_rng();
                rng.gen_range(0..99999)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SampleOutput {
    /// Target chains joined, no padding.
    pub native: String,
    /// Sampled target sequences, same frame as `native`.
    pub samples: Vec<String>,
    pub recoveries: Vec<f64>,
    pub design_indices: Vec<usize>,
    /// `<res_id><ins_code><chain>` labels of `design_indices`.
    pub design_residues: Vec<String>,
}

impl SampleOutput {
    pub fn designs(&self) -> Vec<String> {
        prepare_sample_output(&self.samples, &self.design_indices)
    }

    pub fn mean_recovery(&self) -> f64 {
        if self.recoveries.is_empty() {
            return f64::NAN;
        }
        self.recoveries.iter().sum::<f64>() / self.recoveries.len() as f64
    }

    pub fn summarize(&self, name: &str) -> StructureSummary {
        let designs = self.designs();
        let num_samples = self.samples.len();
        StructureSummary {
            name: name.to_string(),
            design_residues: self.design_residues.clone(),
            uniqueness: uniqueness(&designs, num_samples),
            frequency: frequency_of_residues(&designs, num_samples),
            recoveries: self.recoveries.clone(),
            designs,
        }
    }
}

fn residue_labels(
    layout: &MultichainLayout,
    complex: &ComplexCoords,
    design_indices: &[usize],
) -> Result<Vec<String>> {
    let mut labels = Vec::with_capacity(design_indices.len());
    for &index in design_indices {
        let mut offset = index;
        let mut label = None;
        for span in layout.target_spans() {
            if offset < span.len {
                label = complex.chain(&span.chain_id)?.residue_label(offset);
                break;
            }
            offset -= span.len;
        }
        labels.push(label.ok_or_else(|| anyhow!("design index {} out of range", index))?);
    }
    Ok(labels)
}

/// Log lines for one sample. Sequences are shown when verbose, the recovery always.
fn sample_report(
    index: usize,
    sampled: &str,
    native_design: &str,
    designed: &str,
    recovery: f64,
    verbose: bool,
) -> Vec<(log::Level, String)> {
    let detail = if verbose {
        log::Level::Info
    } else {
        log::Level::Debug
    };
    vec![
        (detail, format!("Sampled sequence {}: {}", index, sampled)),
        (detail, format!("Native {} designed {}", native_design, designed)),
        (
            log::Level::Info,
            format!("Sequence recovery: {:.4}", recovery),
        ),
    ]
}

/// Sample `num_samples` sequences for the designed positions of `pdbfile`.
///
/// `chains` are the target chains, in order; repeats are ignored. The FASTA at
/// `outpath` holds the native sequence and every sample, restricted to the
/// target chains.
pub fn sample_seq_multichain<M: InverseFoldingModel + ?Sized>(
    model: &mut M,
    pdbfile: &Path,
    chains: &[String],
    design: &[DesignResidue],
    outpath: &Path,
    params: &SamplingParams,
) -> Result<SampleOutput> {
    params.validate()?;
    let chains: Vec<String> = chains.iter().unique().cloned().collect();
    let path = pdbfile
        .to_str()
        .ok_or_else(|| anyhow!("invalid path {}", pdbfile.display()))?;
    let structure = load_structure(path)?;
    let complex = extract_coords_from_complex(&structure);
    log::debug!("Loaded chains {:?} from {}", complex.chain_ids(), path);

    let layout = concatenate_multichain_coords(&complex, &chains, params.padding_length)?;
    let native = layout.native_sequence().to_string();
    let design_indices = seq2index(&layout, &complex, design)?;
    let design_residues = residue_labels(&layout, &complex, &design_indices)?;
    let pattern = build_partial_sequence(&layout, &design_indices);

    log::info!("Native sequence loaded from structure file:");
    log::info!("{}", native);
    log::info!(
        "Sampling {} sequences at temperature {} for {} positions",
        params.num_samples,
        params.temperature,
        design_indices.len()
    );

    let native_design: String = prepare_sample_output(&[native.clone()], &design_indices).concat();

    let mut samples = Vec::with_capacity(params.num_samples);
    let mut recoveries = Vec::with_capacity(params.num_samples);
    for i in 0..params.num_samples {
        let sampled = model
            .sample(&layout.coords, &pattern, params.temperature)
            .with_context(|| format!("sample {} of {} failed", i + 1, params.num_samples))?;
        let sampled = layout.extract_target_sequence(&sampled)?;
        let sample_recovery = recovery(&native, &sampled, &design_indices);

        let designed = prepare_sample_output(&[sampled.clone()], &design_indices).concat();
        let report = sample_report(
            i + 1,
            &sampled,
            &native_design,
            &designed,
            sample_recovery,
            params.verbose,
        );
        for (level, line) in report {
            log::log!(level, "{}", line);
        }

        samples.push(sampled);
        recoveries.push(sample_recovery);
    }

    write_fasta(outpath, &native, &samples)?;
    log::info!("Saved {} samples to {}", samples.len(), outpath.display());

    Ok(SampleOutput {
        native,
        samples,
        recoveries,
        design_indices,
        design_residues,
    })
}

/// Sample every structure of a design config.
///
/// Structures are read from `<data_dir>/<name>.pdb`; FASTA files and the
/// `designs`, `recoveries`, `uniqueness` and `frequency` tables go to `results_dir`.
pub fn design_targets<M: InverseFoldingModel + ?Sized>(
    model: &mut M,
    targets: &[DesignTarget],
    data_dir: &Path,
    results_dir: &Path,
    params: &SamplingParams,
) -> Result<Vec<StructureSummary>> {
    let mut summaries = Vec::with_capacity(targets.len());
    for target in targets {
        log::info!("> Sampling {}", target.name);
        let pdbfile = data_dir.join(format!("{}.pdb", target.name));
        let outpath = results_dir.join(format!("{}.fasta", target.name));
        let chains = get_chains(&target.design);
        let output = sample_seq_multichain(model, &pdbfile, &chains, &target.design, &outpath, params)
            .with_context(|| format!("failed to sample {}", target.name))?;
        let summary = output.summarize(&target.name);
        log::info!(
            "{}: mean recovery {:.4}, uniqueness {:.2}",
            target.name,
            output.mean_recovery(),
            summary.uniqueness
        );
        summaries.push(summary);
    }

    write_designs(&results_dir.join("designs.csv"), &summaries)?;
    write_recoveries(&results_dir.join("recoveries.csv"), &summaries)?;
    write_uniqueness(&results_dir.join("uniqueness.csv"), &summaries)?;
    write_frequency(&results_dir.join("frequency.csv"), &summaries)?;
    Ok(summaries)
}

fn structure_name(pdbfile: &Path) -> Result<String> {
    pdbfile
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("no file name in {}", pdbfile.display()))
}

/// Sample the same design on several structures and write `summary.csv`.
///
/// Without explicit `chains` the target chains are those of the design.
/// Structures are named by file stem, which must be unique across `pdbfiles`.
pub fn sample_structures<M: InverseFoldingModel + ?Sized>(
    model: &mut M,
    pdbfiles: &[PathBuf],
    chains: Option<&[String]>,
    design: &[DesignResidue],
    results_dir: &Path,
    params: &SamplingParams,
) -> Result<Vec<StructureSummary>> {
    let chains = match chains {
        Some(c) if !c.is_empty() => c.to_vec(),
        _ => get_chains(design),
    };

    let names = pdbfiles
        .iter()
        .map(|p| structure_name(p))
        .collect::<Result<Vec<_>>>()?;
    if let Some(name) = names.iter().duplicates().next() {
        return Err(anyhow!(
            "structures share the name {}; output files would collide",
            name
        ));
    }

    let mut summaries = Vec::with_capacity(pdbfiles.len());
    for (pdbfile, name) in pdbfiles.iter().zip(names) {
        log::info!("> Sampling {}", name);
        let outpath = results_dir.join(format!("{}.fasta", name));
        let output = sample_seq_multichain(model, pdbfile, &chains, design, &outpath, params)
            .with_context(|| format!("failed to sample {}", pdbfile.display()))?;
        log::info!("{}: mean recovery {:.4}", name, output.mean_recovery());
        summaries.push(output.summarize(&name));
    }

    write_recovery_summary(&results_dir.join("summary.csv"), &summaries)?;
    Ok(summaries)
}
