//! CSV summaries across structures.
use anyhow::{anyhow, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use strum::IntoEnumIterator;
use tcrdesign_core::AminoAcid;

/// Per-structure results that end up in the summary tables.
#[derive(Debug, Clone, Default)]
pub struct StructureSummary {
    pub name: String,
    /// Design residues as written in the config, in sequence order.
    pub design_residues: Vec<String>,
    /// Designed residues of each sample.
    pub designs: Vec<String>,
    pub recoveries: Vec<f64>,
    pub uniqueness: f64,
    /// For every amino acid, its frequency at each design position.
    pub frequency: Vec<(AminoAcid, Vec<f64>)>,
}

fn write_csv(path: &Path, columns: Vec<Column>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut df = DataFrame::new(columns)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    log::info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

fn sample_column(n: usize) -> Column {
    Column::new("sample".into(), (1..=n as u32).collect::<Vec<u32>>())
}

fn sample_count(summaries: &[StructureSummary]) -> Result<usize> {
    let n = summaries.first().map(|s| s.designs.len()).unwrap_or(0);
    if let Some(other) = summaries.iter().find(|s| s.designs.len() != n) {
        return Err(anyhow!(
            "{} has {} samples, expected {}",
            other.name,
            other.designs.len(),
            n
        ));
    }
    Ok(n)
}

/// `sample` then one column of designed residues per structure.
pub fn write_designs(path: &Path, summaries: &[StructureSummary]) -> Result<()> {
    let mut columns = vec![sample_column(sample_count(summaries)?)];
    columns.extend(
        summaries
            .iter()
            .map(|s| Column::new(s.name.as_str().into(), s.designs.clone())),
    );
    write_csv(path, columns)
}

/// `sample` then one column of recoveries per structure.
pub fn write_recoveries(path: &Path, summaries: &[StructureSummary]) -> Result<()> {
    let mut columns = vec![sample_column(sample_count(summaries)?)];
    columns.extend(
        summaries
            .iter()
            .map(|s| Column::new(s.name.as_str().into(), s.recoveries.clone())),
    );
    write_csv(path, columns)
}

/// A single row with the uniqueness of each structure.
pub fn write_uniqueness(path: &Path, summaries: &[StructureSummary]) -> Result<()> {
    let columns = summaries
        .iter()
        .map(|s| Column::new(s.name.as_str().into(), vec![s.uniqueness]))
        .collect();
    write_csv(path, columns)
}

/// Long table: `pdb`, `position`, `residue`, then one column per amino acid.
pub fn write_frequency(path: &Path, summaries: &[StructureSummary]) -> Result<()> {
    let mut pdb = Vec::new();
    let mut position = Vec::new();
    let mut residue = Vec::new();
    let mut per_aa: Vec<Vec<f64>> = vec![Vec::new(); AminoAcid::iter().count()];

    for summary in summaries {
        for (pos, label) in summary.design_residues.iter().enumerate() {
            pdb.push(summary.name.clone());
            position.push(pos as u32 + 1);
            residue.push(label.clone());
            for (column, aa) in per_aa.iter_mut().zip(AminoAcid::iter()) {
                let value = summary
                    .frequency
                    .iter()
                    .find(|(a, _)| *a == aa)
                    .and_then(|(_, values)| values.get(pos).copied())
                    .unwrap_or(0.0);
                column.push(value);
            }
        }
    }

    let mut columns = vec![
        Column::new("pdb".into(), pdb),
        Column::new("position".into(), position),
        Column::new("residue".into(), residue),
    ];
    columns.extend(
        AminoAcid::iter()
            .zip(per_aa)
            .map(|(aa, values)| Column::new(aa.to_string().as_str().into(), values)),
    );
    write_csv(path, columns)
}

/// Recoveries per sample with a final `Average` row.
pub fn write_recovery_summary(path: &Path, summaries: &[StructureSummary]) -> Result<()> {
    let n = sample_count(summaries)?;
    let mut labels: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
    labels.push("Average".to_string());

    let mut columns = vec![Column::new("sample".into(), labels)];
    columns.extend(summaries.iter().map(|s| {
        let mut values = s.recoveries.clone();
        let mean = if values.is_empty() {
            f64::NAN
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        };
        values.push(mean);
        Column::new(s.name.as_str().into(), values)
    }));
    write_csv(path, columns)
}
