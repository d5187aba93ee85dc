//! End-to-end tests of the `kmer-match` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn reference_file() -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
    temp.write_all(
        b">R1 first reference\nACGTACGTAC\n>R2 poly-T\nTTTTTTTTTT\n>R3 partial\nGGACGTAGGG\n",
    )
    .unwrap();
    temp.flush().unwrap();
    temp
}

fn kmer_match() -> Command {
    Command::cargo_bin("kmer-match").unwrap()
}

#[test]
fn test_search_text_output() {
    let refs = reference_file();

    kmer_match()
        .args(["search", refs.path().to_str().unwrap(), "acgtacgtac", "-k", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R1"))
        .stdout(predicate::str::contains("100.00%"))
        .stdout(predicate::str::contains("first reference"))
        .stdout(predicate::str::contains("R2").not());
}

#[test]
fn test_search_json_output() {
    let refs = reference_file();

    let output = kmer_match()
        .args([
            "--format",
            "json",
            "search",
            refs.path().to_str().unwrap(),
            "ACGTACGTAC",
            "-k",
            "4",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let matches = json["matches"].as_array().unwrap();
    // R1 at 100%, R3 shares ACGT and CGTA (2 of 4); R2 shares nothing
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["id"], "R1");
    assert_eq!(matches[0]["rank"], 1);
    assert_eq!(matches[0]["fragments"][0]["kmer"], "ACGT");
    assert_eq!(matches[0]["fragments"][0]["position"], 0);
    assert_eq!(matches[1]["id"], "R3");
    assert_eq!(matches[1]["percentage"], 50.0);
    assert_eq!(json["query"]["kmer_size"], 4);
}

#[test]
fn test_search_tsv_output() {
    let refs = reference_file();

    kmer_match()
        .args([
            "-f",
            "tsv",
            "search",
            refs.path().to_str().unwrap(),
            "ACGTACGTAC",
            "-k",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rank\tid\tdescription"))
        .stdout(predicate::str::contains("1\tR1\tfirst reference\t100.00\t4\t4\tACGT\t0"));
}

#[test]
fn test_search_parallel_matches_sequential() {
    let refs = reference_file();
    let path = refs.path().to_str().unwrap();

    let sequential = kmer_match()
        .args(["-f", "json", "search", path, "ACGTACGTAC", "-k", "3"])
        .output()
        .unwrap();
    let parallel = kmer_match()
        .args(["-f", "json", "search", path, "ACGTACGTAC", "-k", "3", "-t", "2"])
        .output()
        .unwrap();

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_search_query_shorter_than_k() {
    let refs = reference_file();

    kmer_match()
        .args(["search", refs.path().to_str().unwrap(), "ACG"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No matching references found."));
}

#[test]
fn test_search_rejects_non_positive_k() {
    let refs = reference_file();

    for k in ["0", "-5"] {
        kmer_match()
            .args(["search", refs.path().to_str().unwrap(), "ACGT", "-k", k])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid parameter"));
    }
}

#[test]
fn test_search_rejects_zero_max_matches() {
    let refs = reference_file();

    kmer_match()
        .args([
            "-f",
            "tsv",
            "search",
            refs.path().to_str().unwrap(),
            "ACGTACGTAC",
            "-k",
            "4",
            "-n",
            "0",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid parameter"));
}

#[test]
fn test_search_rejects_invalid_query() {
    let refs = reference_file();

    kmer_match()
        .args(["search", refs.path().to_str().unwrap(), "ACGUACGU"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid DNA sequence"));
}

#[test]
fn test_search_query_from_file() {
    let refs = reference_file();
    let mut query = NamedTempFile::with_suffix(".fa").unwrap();
    query.write_all(b">q\nTTTTT\nTTTTT\n").unwrap();
    query.flush().unwrap();

    kmer_match()
        .args([
            "search",
            refs.path().to_str().unwrap(),
            "--query-file",
            query.path().to_str().unwrap(),
            "-k",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("R2"));
}

#[test]
fn test_show_reference() {
    let refs = reference_file();

    kmer_match()
        .args(["show", refs.path().to_str().unwrap(), "R3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: partial"))
        .stdout(predicate::str::contains("ID: R3"))
        .stdout(predicate::str::contains("GGACGTAGGG"));
}

#[test]
fn test_show_unknown_reference() {
    let refs = reference_file();

    kmer_match()
        .args(["show", refs.path().to_str().unwrap(), "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_kmers_listing() {
    kmer_match()
        .args(["kmers", "ACGACGA", "-k", "3"])
        .assert()
        .success()
        .stdout(predicate::eq("ACG\t2\nCGA\t2\nGAC\t1\n"));
}
