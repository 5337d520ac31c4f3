//! Malformed input must stop the run with a non-zero status, keeping
//! everything written before the bad line intact.

use rstest::rstest;

use crate::helpers::{
    run_tool, stderr_of, stdout_of, ASSIGN_UNMAPPED_POS, ASSIGN_UNMAPPED_POS_ONE_WAY,
    FILTER_INTRON_ADJACENT_INDELS,
};

const GOOD: &str = "r1\t99\tchr1\t100\t60\t4M\t=\t300\t204\tACGT\tIIII\n";

#[rstest]
#[case(ASSIGN_UNMAPPED_POS, "r2\t99\tchr1\t100\t60\t4M\t=\n", "record has 7 fields, at least 8 are required")]
#[case(ASSIGN_UNMAPPED_POS_ONE_WAY, "r2\tninety\tchr1\t100\t60\t4M\t=\t300\n", "invalid flag 'ninety'")]
#[case(FILTER_INTRON_ADJACENT_INDELS, "r2\t99\tchr1\t100\t60\n", "record has 5 fields, at least 6 are required")]
#[case(FILTER_INTRON_ADJACENT_INDELS, "\n", "record has 0 fields, at least 6 are required")]
fn test_malformed_record_is_fatal(#[case] bin: &str, #[case] bad: &str, #[case] reason: &str) {
    let input = format!("@HD\tVN:1.6\n{}{}{}", GOOD, bad, GOOD);
    let output = run_tool(bin, &[], &input);

    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), format!("@HD\tVN:1.6\n{}", GOOD));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("malformed record at line 3"), "stderr: {}", stderr);
    assert!(stderr.contains(reason), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_file() {
    let output = run_tool(FILTER_INTRON_ADJACENT_INDELS, &["-i", "/nonexistent/in.sam"], "");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("failed to open input /nonexistent/in.sam"));
}

#[test]
fn test_unknown_argument() {
    let output = run_tool(ASSIGN_UNMAPPED_POS, &["--bogus"], "");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
