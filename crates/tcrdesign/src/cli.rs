use super::commands;
use crate::pipeline::SamplingParams;
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tcrdesign_core::DesignResidue;
use tcrdesign_esmif::ModelSource;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample every structure listed in a design config
    Run {
        /// JSON object of structure name to design residues
        #[arg(long)]
        config: PathBuf,

        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        #[arg(long, default_value = "results")]
        results_dir: PathBuf,

        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        sampling: SamplingArgs,
    },
    /// Sample one design on one or more structures
    Sample {
        #[arg(long, required = true, num_args = 1..)]
        pdb: Vec<PathBuf>,

        /// Design residues, e.g. `110D,111D,133E`
        #[arg(long, required = true, value_delimiter = ',')]
        design: Vec<DesignResidue>,

        /// Target chains; defaults to the chains of the design residues
        #[arg(long, value_delimiter = ',')]
        chains: Vec<String>,

        #[arg(long, default_value = "results")]
        results_dir: PathBuf,

        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        sampling: SamplingArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// ESM-IF1 encoder graph
    #[arg(long, requires = "decoder", conflicts_with = "model_repo")]
    encoder: Option<PathBuf>,

    /// ESM-IF1 decoder graph
    #[arg(long, requires = "encoder", conflicts_with = "model_repo")]
    decoder: Option<PathBuf>,

    /// HuggingFace repository holding both graphs
    #[arg(long)]
    model_repo: Option<String>,
}

impl ModelArgs {
    pub fn source(&self) -> Result<ModelSource> {
        match (&self.encoder, &self.decoder, &self.model_repo) {
            (Some(encoder), Some(decoder), _) => Ok(ModelSource::Local {
                encoder: encoder.clone(),
                decoder: decoder.clone(),
            }),
            (_, _, Some(repo_id)) => Ok(ModelSource::Hub {
                repo_id: repo_id.clone(),
            }),
            _ => Err(anyhow!(
                "no model given: pass --encoder and --decoder, or --model-repo"
            )),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SamplingArgs {
    #[arg(long, default_value_t = 10)]
    num_samples: usize,

    #[arg(long, default_value_t = 1.0)]
    temperature: f64,

    /// NaN rows between chains
    #[arg(long, default_value_t = 10)]
    padding: usize,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    seed: Option<u64>,
}

impl From<SamplingArgs> for SamplingParams {
    fn from(args: SamplingArgs) -> Self {
        SamplingParams {
            num_samples: args.num_samples,
            temperature: args.temperature,
            padding_length: args.padding,
            verbose: args.verbose,
            seed: args.seed,
        }
    }
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Run {
                config,
                data_dir,
                results_dir,
                model,
                sampling,
            } => commands::run::execute(config, data_dir, results_dir, model, sampling.into()),
            Commands::Sample {
                pdb,
                design,
                chains,
                results_dir,
                model,
                sampling,
            } => commands::sample::execute(
                pdb,
                design,
                chains,
                results_dir,
                model,
                sampling.into(),
            ),
        }
    }
}
