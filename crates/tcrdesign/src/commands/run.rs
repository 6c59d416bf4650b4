use crate::cli::ModelArgs;
use crate::pipeline::{design_targets, SamplingParams};
use std::path::PathBuf;
use tcrdesign_esmif::EsmIfOnnx;
use tcrdesign_io::read_config;

pub fn execute(
    config: PathBuf,
    data_dir: PathBuf,
    results_dir: PathBuf,
    model_args: ModelArgs,
    params: SamplingParams,
) -> anyhow::Result<()> {
    params.validate()?;
    let targets = read_config(&config)?;
    log::info!("{} structures in {}", targets.len(), config.display());

    let source = model_args.source()?;
    let seed = params.resolve_seed();
    log::info!("Temperature {} and seed {}", params.temperature, seed);
    let mut model = EsmIfOnnx::new(&source, seed)?;

    let summaries = design_targets(&mut model, &targets, &data_dir, &results_dir, &params)?;
    for summary in &summaries {
        println!(
            "{}\t{}\tuniqueness {:.2}",
            summary.name,
            summary.design_residues.join(","),
            summary.uniqueness
        );
    }
    log::info!("Results written to {}", results_dir.display());
    Ok(())
}
