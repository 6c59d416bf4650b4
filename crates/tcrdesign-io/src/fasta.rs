use anyhow::Result;
use std::fs;
use std::path::Path;

/// Write the native sequence followed by every sample.
///
/// Records are `>native_seq` and `>sampled_seq_{i}` with `i` starting at 1.
/// Missing parent directories are created.
pub fn write_fasta(path: &Path, native: &str, samples: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut fasta_content = format!(">native_seq\n{}\n", native);
    for (i, seq) in samples.iter().enumerate() {
        fasta_content.push_str(&format!(">sampled_seq_{}\n{}\n", i + 1, seq));
    }
    fs::write(path, fasta_content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_fasta() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results").join("6ZKW.fasta");
        let samples = vec!["ASGQ".to_string(), "AWWQ".to_string()];
        write_fasta(&path, "ASGQ", &samples).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            ">native_seq\nASGQ\n>sampled_seq_1\nASGQ\n>sampled_seq_2\nAWWQ\n"
        );
    }
}
