mod common;

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use std::fs;
use tfnet::perturbation::{Perturbation, PerturbationRegistry};

use crate::common::{build_command, run_perturb, setup};

#[test]
fn build_without_arguments() {
    let mut cmd = Command::cargo_bin("tfnet-build").unwrap();
    let output = cmd.assert().failure().get_output().clone();
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn build_rejects_file_as_directory() {
    let root = tempfile::tempdir().unwrap();
    setup(root.path());
    let mut cmd = Command::cargo_bin("tfnet-build").unwrap();
    cmd.arg("--basetram")
        .arg(root.path().join("basetram"))
        .arg("--genbank")
        .arg(root.path().join("hgnc.txt"))
        .arg("--hgnc")
        .arg(root.path().join("hgnc.txt"))
        .arg("--matrices")
        .arg(root.path().join("matrix.dat"));
    let output = cmd.assert().failure().code(1).get_output().clone();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("is not a directory"));
}

#[test]
fn perturb_lists_operators() {
    let mut cmd = Command::cargo_bin("tfnet-perturb").unwrap();
    cmd.arg("--operator").arg("help");
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    let registry = PerturbationRegistry::with_defaults();
    let names = registry.names().collect::<Vec<_>>();
    assert_eq!(
        vec!["edge-deletion", "edge-insertion", "edge-replacement", "label-switching"],
        names
    );
    for name in names {
        let operator = registry.get(name).unwrap();
        assert!(text.contains(name));
        assert!(text.contains(operator.parameters_help()));
    }
}

#[test]
fn perturb_rejects_unknown_operator() {
    let root = tempfile::tempdir().unwrap();
    let model = root.path().join("model.txt");
    fs::write(&model, "VERTICES\nENDVERTICES\n").unwrap();

    let mut cmd = Command::cargo_bin("tfnet-perturb").unwrap();
    cmd.arg("--model").arg(&model).arg("--operator").arg("shuffle");
    let output = cmd.assert().failure().get_output().clone();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown operator `shuffle`"));
}

#[test]
fn perturb_rejects_invalid_parameters() {
    let root = tempfile::tempdir().unwrap();
    let model = root.path().join("model.txt");
    fs::write(&model, "VERTICES\nVERTEX 1 A\nENDVERTICES\n").unwrap();

    let mut cmd = Command::cargo_bin("tfnet-perturb").unwrap();
    cmd.arg("--model")
        .arg(&model)
        .arg("--operator")
        .arg("edge-deletion")
        .arg("--params")
        .arg("2");
    let output = cmd.assert().failure().code(1).get_output().clone();
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn build_then_perturb() {
    let root = tempfile::tempdir().unwrap();
    setup(root.path());

    let mut cmd = build_command(root.path());
    let output = cmd.assert().success().get_output().stdout.clone();
    let network = String::from_utf8(output).unwrap();
    assert!(network.starts_with(concat!(
        "VERTICES\nVERTEX 1 TP53\nVERTEX 2 MYC\nVERTEX 3 GATA1\nENDVERTICES\n",
        "EDGES 1 (2 3 )\nEDGES 2 (3 )\n",
    )));
    assert!(network.contains("# There are 3 edges\n"));

    let model = root.path().join("model.txt");
    fs::write(&model, &network).unwrap();

    // Nothing deleted: the model is reproduced exactly, comments included.
    assert_eq!(network, run_perturb(&model, "edge-deletion", "0", 1).unwrap());

    // The same seed gives the same network.
    let first = run_perturb(&model, "edge-replacement", "0.5", 7).unwrap();
    let second = run_perturb(&model, "edge-replacement", "0.5", 7).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with(
        "VERTICES\nVERTEX 1 TP53\nVERTEX 2 MYC\nVERTEX 3 GATA1\nENDVERTICES\n"
    ));
    let edges = first.lines().filter(|it| it.starts_with("EDGES")).count();
    assert!(edges >= 1);

    let first = run_perturb(&model, "label-switching", "", 3).unwrap();
    let second = run_perturb(&model, "label-switching", "", 3).unwrap();
    assert_eq!(first, second);
}
