#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::process::Command;

use assert_cmd::{assert::OutputAssertExt, cargo::CommandCargoExt};

#[allow(deprecated)]
fn run(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("zcell").expect("binary exists");
    cmd.args(args);
    let assert = cmd.assert().success();
    String::from_utf8_lossy(&assert.get_output().stdout).to_string()
}

#[allow(deprecated)]
fn run_failing(args: &[&str]) {
    let mut cmd = Command::cargo_bin("zcell").expect("binary exists");
    cmd.args(args);
    cmd.assert().failure();
}

#[test]
fn info_decodes_a_bit_string() {
    let out = run(&["info", "0110"]);
    assert!(out.contains("position 6"));
    assert!(out.contains("depth 2"));
    assert!(out.contains("half-split false"));
    assert!(out.contains("x 2"));
    assert!(out.contains("y 1"));
}

#[test]
fn info_flags_half_split_cells() {
    let out = run(&["info", "010"]);
    assert!(out.contains("position 4"));
    assert!(out.contains("depth 2"));
    assert!(out.contains("half-split true"));
}

#[test]
fn encode_then_info_round_trips() {
    let bits = run(&["encode", "--depth", "4", "--", "48.137", "11.575"]);
    let bits = bits.trim().to_string();
    assert_eq!(bits.len(), 8);

    let out = run(&["info", &bits]);
    assert!(out.contains("depth 4"));
}

#[test]
fn encode_accepts_negative_coordinates() {
    let bits = run(&["encode", "-d", "1", "--", "-45.0", "-90.0"]);
    assert_eq!(bits.trim(), "00");
}

#[test]
fn neighbours_of_the_first_cell() {
    let out = run(&["neighbours", "00"]);
    assert!(out.contains("east 01"));
    assert!(out.contains("south 10"));
}

#[test]
fn children_enumerate_the_subdivision() {
    let out = run(&["children", "11"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, ["1100", "1101", "1110", "1111"]);
}

#[test]
fn parent_strips_two_bits() {
    let out = run(&["parent", "0101"]);
    assert_eq!(out.trim(), "01");
}

#[test]
fn region_defaults_to_the_geographic_domain() {
    let out = run(&["region", "00"]);
    assert!(out.contains("min -180, -90"));
    assert!(out.contains("max 0, 0"));
}

#[test]
fn region_scales_to_custom_bounds() {
    let out = run(&["region", "--bounds", "0,0:16,16", "11"]);
    assert!(out.contains("min 8, 8"));
    assert!(out.contains("max 16, 16"));
}

#[test]
fn add_combines_componentwise() {
    let out = run(&["add", "01", "10"]);
    assert_eq!(out.trim(), "11");
}

#[test]
fn rejects_a_malformed_cell() {
    run_failing(&["info", "01a"]);
}

#[test]
fn encode_rejects_points_outside_the_domain() {
    run_failing(&["encode", "--depth", "4", "--", "95.0", "0.0"]);
}
