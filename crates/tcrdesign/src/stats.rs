//! Statistics over sampled designs.
use itertools::Itertools;
use strum::IntoEnumIterator;
use tcrdesign_core::AminoAcid;

/// The designed residues of every sample, in index order.
pub fn prepare_sample_output(samples: &[String], design_indices: &[usize]) -> Vec<String> {
    samples
        .iter()
        .map(|sample| {
            let chars: Vec<char> = sample.chars().collect();
            design_indices
                .iter()
                .filter_map(|&i| chars.get(i))
                .collect()
        })
        .collect()
}

/// Fraction of designed positions where the sample matches the native residue.
///
/// NaN when there are no designed positions.
pub fn recovery(native: &str, sample: &str, design_indices: &[usize]) -> f64 {
    if design_indices.is_empty() {
        return f64::NAN;
    }
    let native: Vec<char> = native.chars().collect();
    let sample: Vec<char> = sample.chars().collect();
    let matches = design_indices
        .iter()
        .filter(|&&i| matches!((native.get(i), sample.get(i)), (Some(a), Some(b)) if a == b))
        .count();
    matches as f64 / design_indices.len() as f64
}

/// Number of distinct designs over the number of samples.
pub fn uniqueness(designs: &[String], num_samples: usize) -> f64 {
    if num_samples == 0 {
        return f64::NAN;
    }
    designs.iter().unique().count() as f64 / num_samples as f64
}

/// Per design position, how often each amino acid was sampled.
pub fn frequency_of_residues(designs: &[String], num_samples: usize) -> Vec<(AminoAcid, Vec<f64>)> {
    let columns: Vec<Vec<char>> = designs.iter().map(|d| d.chars().collect()).collect();
    let positions = columns.iter().map(Vec::len).min().unwrap_or(0);

    AminoAcid::iter()
        .map(|aa| {
            let code = aa.code1();
            let per_position = (0..positions)
                .map(|pos| {
                    let count = columns.iter().filter(|c| c[pos] == code).count();
                    count as f64 / num_samples as f64
                })
                .collect();
            (aa, per_position)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prepare_sample_output() {
        let samples = strings(&["ASGQTLYRFNM", "ASWWTLYRANM"]);
        let designs = prepare_sample_output(&samples, &[2, 3, 8]);
        assert_eq!(designs, strings(&["GQF", "WWA"]));
    }

    #[test]
    fn test_recovery() {
        let native = "ASGQTLYRFNM";
        assert_eq!(recovery(native, native, &[2, 3, 8]), 1.0);
        assert_eq!(recovery(native, "ASWQTLYRANM", &[2, 3, 8, 9]), 0.5);
        assert!(recovery(native, native, &[]).is_nan());
    }

    #[test]
    fn test_uniqueness() {
        let designs = strings(&["GQF", "GQF", "WWA", "GQA"]);
        assert_eq!(uniqueness(&designs, 4), 0.75);
        assert_eq!(uniqueness(&strings(&["GQF"; 10]), 10), 0.1);
    }

    #[test]
    fn test_frequency_of_residues() {
        let designs = strings(&["GQ", "GW", "AW", "GW"]);
        let frequency = frequency_of_residues(&designs, 4);
        assert_eq!(frequency.len(), 20);

        let lookup = |aa: AminoAcid| {
            frequency
                .iter()
                .find(|(a, _)| *a == aa)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(lookup(AminoAcid::G), vec![0.75, 0.0]);
        assert_eq!(lookup(AminoAcid::A), vec![0.25, 0.0]);
        assert_eq!(lookup(AminoAcid::W), vec![0.0, 0.75]);
        assert_eq!(lookup(AminoAcid::Y), vec![0.0, 0.0]);

        let column_sums: Vec<f64> = (0..2)
            .map(|pos| frequency.iter().map(|(_, v)| v[pos]).sum())
            .collect();
        assert_eq!(column_sums, vec![1.0, 1.0]);
    }
}
