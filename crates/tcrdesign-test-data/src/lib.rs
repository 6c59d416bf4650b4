//! tcrdesign-test-data
//!
//! Test structures embedded in the crate for use in testing.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use tcrdesign_test_data::TestFile;
/// let (prot_file, _temp) = TestFile::tcr_pmhc().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Small TCR-pMHC style complex.
    ///
    /// | chain | residues  | sequence |
    /// |-------|-----------|----------|
    /// | A     | 1-4       | GSHS     |
    /// | C     | 1-3       | NLV      |
    /// | D     | 108-113   | ASGQTL   |
    /// | E     | 131-135   | YRFNM    |
    ///
    /// Residue `113D` has no `C` atom and chain A carries two waters.
    pub fn tcr_pmhc() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/tcr_pmhc.pdb"),
            suffix: "pdb",
        }
    }
    /// The D and E chains of [`TestFile::tcr_pmhc`] only.
    pub fn tcr_only() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/tcr_only.pdb"),
            suffix: "pdb",
        }
    }

    /// [`TestFile::tcr_only`] with `112D` renumbered to `111AD`, so that residue
    /// number 111 of chain D carries two residues.
    pub fn tcr_insertion() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/tcr_insertion.pdb"),
            suffix: "pdb",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }

    /// Write the file into `dir` under `name`, for commands that resolve
    /// structures by name inside a data directory.
    pub fn write_to(&self, dir: &std::path::Path, name: &str) -> std::io::Result<std::path::PathBuf> {
        let path = dir.join(format!("{}.{}", name, self.suffix));
        fs::write(&path, self.filebinary)?;
        Ok(path)
    }
}
