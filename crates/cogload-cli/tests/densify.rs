use assert_cmd::cargo::cargo_bin_cmd;
use cogload_lib::series::DenseSeries;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn densify_csv_outputs_unit_grid() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("cogload");
    cmd.args([
        "densify",
        "--input",
        &fixture_path("test_data/lecture_load.csv"),
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let dense: DenseSeries = serde_json::from_slice(&output)?;
    assert_eq!(dense.times, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(dense.values, vec![0.2, 0.6, 0.8, 0.65, 0.3]);
    Ok(())
}

#[test]
fn densify_payload_covers_every_second() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("cogload");
    cmd.args([
        "densify",
        "--payload",
        &fixture_path("test_data/analysis_payload.json"),
        "--series",
        "instantaneous",
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let dense: DenseSeries = serde_json::from_slice(&output)?;
    assert_eq!(dense.times.len(), 31);
    assert_eq!(dense.values[0], 0.2);
    assert_eq!(dense.values[30], 0.7);
    assert!(dense.values.iter().all(|&v| (0.0..=1.0).contains(&v)));
    for w in dense.times.windows(2) {
        assert_eq!(w[1] - w[0], 1.0);
    }
    Ok(())
}

#[test]
fn duplicate_timestamps_fail_with_a_clear_message() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("dup.csv");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "time,load")?;
    writeln!(file, "0,0.2")?;
    writeln!(file, "5,0.4")?;
    writeln!(file, "5,0.6")?;

    let mut cmd = cargo_bin_cmd!("cogload");
    cmd.args(["densify", "--input", path.to_str().expect("utf8 path")]);
    let output = cmd.assert().failure().get_output().stderr.clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("duplicate timestamp"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn input_and_payload_are_mutually_exclusive() -> Result<(), Box<dyn Error>> {
    let mut cmd = cargo_bin_cmd!("cogload");
    cmd.args([
        "densify",
        "--input",
        &fixture_path("test_data/lecture_load.csv"),
        "--payload",
        &fixture_path("test_data/analysis_payload.json"),
    ]);
    cmd.assert().failure();
    Ok(())
}

fn fixture_path(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join(relative);
    root.to_string_lossy().to_string()
}
