use crate::cli::ModelArgs;
use crate::pipeline::{sample_structures, SamplingParams};
use std::path::PathBuf;
use tcrdesign_core::DesignResidue;
use tcrdesign_esmif::EsmIfOnnx;

pub fn execute(
    pdb: Vec<PathBuf>,
    design: Vec<DesignResidue>,
    chains: Vec<String>,
    results_dir: PathBuf,
    model_args: ModelArgs,
    params: SamplingParams,
) -> anyhow::Result<()> {
    params.validate()?;
    if let Some(missing) = pdb.iter().find(|p| !p.exists()) {
        return Err(anyhow::anyhow!("structure {} does not exist", missing.display()));
    }

    let source = model_args.source()?;
    let seed = params.resolve_seed();
    log::info!("Temperature {} and seed {}", params.temperature, seed);
    let mut model = EsmIfOnnx::new(&source, seed)?;

    let chains = (!chains.is_empty()).then_some(chains);
    let summaries = sample_structures(
        &mut model,
        &pdb,
        chains.as_deref(),
        &design,
        &results_dir,
        &params,
    )?;
    for summary in &summaries {
        let mean = summary.recoveries.iter().sum::<f64>() / summary.recoveries.len() as f64;
        println!("{}\tmean recovery {:.4}", summary.name, mean);
    }
    Ok(())
}
