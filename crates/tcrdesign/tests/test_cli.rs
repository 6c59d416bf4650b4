use assert_cmd::Command;
use tcrdesign_test_data::TestFile;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("tcrdesign").unwrap();
    cmd.arg("--help");
    cmd.assert().success();

    let output = Command::cargo_bin("tcrdesign")
        .unwrap()
        .args(["sample", "--help"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--design"));
    assert!(stdout.contains("--model-repo"));
}

#[test]
fn test_sample_requires_model() {
    let (pdbfile, _tmp) = TestFile::tcr_pmhc().create_temp().unwrap();
    let results = tempfile::tempdir().unwrap();

    let output = Command::cargo_bin("tcrdesign")
        .unwrap()
        .arg("sample")
        .arg("--pdb")
        .arg(&pdbfile)
        .arg("--design")
        .arg("110D,111D")
        .arg("--results-dir")
        .arg(results.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no model given"));
}

#[test]
fn test_sample_missing_model_files() {
    let (pdbfile, _tmp) = TestFile::tcr_pmhc().create_temp().unwrap();
    let results = tempfile::tempdir().unwrap();

    let output = Command::cargo_bin("tcrdesign")
        .unwrap()
        .arg("sample")
        .arg("--pdb")
        .arg(&pdbfile)
        .arg("--design")
        .arg("110D")
        .arg("--encoder")
        .arg("/nonexistent/esm_if1_encoder.onnx")
        .arg("--decoder")
        .arg("/nonexistent/esm_if1_decoder.onnx")
        .arg("--results-dir")
        .arg(results.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_sample_rejects_bad_design_residue() {
    let (pdbfile, _tmp) = TestFile::tcr_pmhc().create_temp().unwrap();
    let mut cmd = Command::cargo_bin("tcrdesign").unwrap();
    cmd.arg("sample")
        .arg("--pdb")
        .arg(&pdbfile)
        .arg("--design")
        .arg("D110")
        .arg("--model-repo")
        .arg("unused/repo");
    cmd.assert().failure();
}

#[test]
fn test_encoder_needs_decoder() {
    let (pdbfile, _tmp) = TestFile::tcr_pmhc().create_temp().unwrap();
    let mut cmd = Command::cargo_bin("tcrdesign").unwrap();
    cmd.arg("sample")
        .arg("--pdb")
        .arg(&pdbfile)
        .arg("--design")
        .arg("110D")
        .arg("--encoder")
        .arg("encoder.onnx");
    cmd.assert().failure();
}

#[test]
fn test_run_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::cargo_bin("tcrdesign")
        .unwrap()
        .arg("run")
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .arg("--model-repo")
        .arg("unused/repo")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read config"));
}

#[test]
fn test_run_rejects_zero_samples() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"6ZKW": ["110D"]}"#).unwrap();

    let output = Command::cargo_bin("tcrdesign")
        .unwrap()
        .arg("run")
        .arg("--config")
        .arg(&config)
        .arg("--num-samples")
        .arg("0")
        .arg("--model-repo")
        .arg("unused/repo")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("num_samples must be at least 1"));
}
