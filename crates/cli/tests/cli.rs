//! End-to-end tests driving the built `layer-arithmetics` binary directly,
//! exercising the CLI contract (flags, exit codes, file I/O) rather than the
//! engine's internals — those are covered in the `layer-arithmetics` crate.

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_layer-arithmetics"))
}

fn write_cif(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn full_overlap_produces_intersection_and_empty_pure_diffusion() {
    let dir = tempdir().unwrap();
    let input = write_cif(
        dir.path(),
        "in.cif",
        "L diffusion; P 0 0 0 10 10 10 10 0; L polysilicon; P 0 0 0 10 10 10 10 0; E",
    );
    let inter_out = dir.path().join("inter.cif");
    let pdiff_out = dir.path().join("pdiff.cif");

    let status = bin()
        .arg("--input")
        .arg(&input)
        .arg("--inter")
        .arg(&inter_out)
        .arg("--pdiff")
        .arg(&pdiff_out)
        .status()
        .unwrap();
    assert!(status.success());

    let inter_text = fs::read_to_string(&inter_out).unwrap();
    assert!(inter_text.contains("L polysilicon;"));
    assert!(inter_text.contains("0 0 0 10 10 10 10 0"));

    let pdiff_text = fs::read_to_string(&pdiff_out).unwrap();
    assert!(!pdiff_text.contains("L diffusion;"));
    assert_eq!(pdiff_text.lines().filter(|l| l.starts_with('P')).count(), 0);
}

#[test]
fn missing_output_flag_is_a_usage_error_with_synopsis_on_stdout() {
    let dir = tempdir().unwrap();
    let input = write_cif(dir.path(), "in.cif", "L diffusion; P 0 0 0 1 1 1 1 0; E");

    let output = bin().arg("--input").arg(&input).output().unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.to_lowercase().contains("usage"));
}

#[test]
fn missing_input_file_is_input_unavailable() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.cif");
    let inter_out = dir.path().join("inter.cif");

    let output = bin()
        .arg("--input")
        .arg(&missing)
        .arg("--inter")
        .arg(&inter_out)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!inter_out.exists());
}

#[test]
fn malformed_cif_is_reported_and_nonzero() {
    let dir = tempdir().unwrap();
    let input = write_cif(dir.path(), "in.cif", "L diffusion; P 0 0 0 10 10; E");
    let inter_out = dir.path().join("inter.cif");

    let status = bin()
        .arg("--input")
        .arg(&input)
        .arg("--inter")
        .arg(&inter_out)
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn ps_dump_is_written_alongside_requested_outputs() {
    let dir = tempdir().unwrap();
    let input = write_cif(
        dir.path(),
        "in.cif",
        "L diffusion; P 0 0 0 10 10 10 10 0; E",
    );
    let pdiff_out = dir.path().join("pdiff.cif");
    let ps_out = dir.path().join("tree.txt");

    let status = bin()
        .arg("--input")
        .arg(&input)
        .arg("--pdiff")
        .arg(&pdiff_out)
        .arg("--ps")
        .arg(&ps_out)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(ps_out.exists());
    let dump = fs::read_to_string(&ps_out).unwrap();
    assert!(dump.contains('['));
}
