//! Tests for the `assign-unmapped-pos` and `assign-unmapped-pos-one-way` binaries.

use std::fs;

use tempfile::TempDir;

use crate::helpers::{
    run_tool, stderr_of, stdout_of, ASSIGN_UNMAPPED_POS, ASSIGN_UNMAPPED_POS_ONE_WAY, HEADER,
};

const UNMAPPED_READ: &str = "frag1\t133\t*\t0\t0\t*\tchr1\t500\t0\tACGT\tIIII";
const MAPPED_MATE: &str = "frag1\t73\tchr1\t500\t60\t4M\t*\t0\t0\tACGT\tIIII";
const PROPER_PAIR: &str = "frag2\t99\tchr1\t1000\t60\t4M\t=\t1200\t204\tACGT\tIIII\tMC:Z:4M";

fn input() -> String {
    format!("{}{}\n{}\n{}\n", HEADER, UNMAPPED_READ, MAPPED_MATE, PROPER_PAIR)
}

#[test]
fn test_assign_unmapped_pos_both_directions() {
    let output = run_tool(ASSIGN_UNMAPPED_POS, &[], &input());
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let expected = format!(
        "{}{}\n{}\n{}\n",
        HEADER,
        "frag1\t133\tchr1\t500\t0\t*\tchr1\t500\t0\tACGT\tIIII",
        "frag1\t73\tchr1\t500\t60\t4M\tchr1\t500\t0\tACGT\tIIII",
        PROPER_PAIR
    );
    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn test_assign_unmapped_pos_one_way() {
    let output = run_tool(ASSIGN_UNMAPPED_POS_ONE_WAY, &[], &input());
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let expected = format!(
        "{}{}\n{}\n{}\n",
        HEADER, "frag1\t133\tchr1\t500\t0\t*\tchr1\t500\t0\tACGT\tIIII", MAPPED_MATE, PROPER_PAIR
    );
    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn test_untouched_lines_keep_their_spacing() {
    let line = "frag3 99 chr1 10 60 4M = 90 84 ACGT IIII";
    let output = run_tool(ASSIGN_UNMAPPED_POS, &[], &format!("{}\n", line));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format!("{}\n", line));
}

#[test]
fn test_both_unmapped_passes_through() {
    let line = "frag4\t77\t*\t0\t0\t*\t*\t0\t0\tACGT\tIIII";
    let output = run_tool(ASSIGN_UNMAPPED_POS, &[], &format!("{}\n", line));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format!("{}\n", line));
}

#[test]
fn test_empty_input() {
    let output = run_tool(ASSIGN_UNMAPPED_POS, &[], "");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_input_and_output_files() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("in.sam");
    let output_path = dir.path().join("out.sam");
    fs::write(&input_path, input()).unwrap();

    let output = run_tool(
        ASSIGN_UNMAPPED_POS,
        &["-i", input_path.to_str().unwrap(), "-o", output_path.to_str().unwrap(), "-q"],
        "",
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let written = fs::read_to_string(&output_path).unwrap();
    assert_eq!(written.lines().count(), 6);
    assert!(written.contains("frag1\t133\tchr1\t500\t"));
}

#[test]
fn test_summary_is_logged_to_stderr() {
    let output = run_tool(ASSIGN_UNMAPPED_POS, &[], &input());
    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("3 records and 3 header lines read, 2 modified, 0 dropped"));
    assert!(!stdout_of(&output).contains("records"));
}
