//! Integration tests for the graphalgo CLI
//!
//! These tests run the graphalgo binary and check its output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for graphalgo that ignores any user configuration
fn graphalgo() -> Command {
    let mut cmd = cargo_bin_cmd!("graphalgo");
    cmd.env("GRAPHALGO_CONFIG_DIR", "/nonexistent/graphalgo-tests")
        .env_remove("GRAPHALGO_CONFIG")
        .env_remove("GRAPHALGO_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// `--edge` flags for a weighted undirected graph on vertices 0..=7
const WEIGHTED: [&str; 10] = [
    "0:1:1", "1:2:2", "1:3:6", "2:3:2", "1:4:3", "3:5:1", "5:4:5", "3:6:1", "6:7:1", "0:7:8",
];

/// Unweighted undirected graph with a self-loop on 6
const UNWEIGHTED: [&str; 10] = [
    "0:1", "1:2", "1:3", "2:3", "1:4", "3:5", "5:4", "3:6", "6:6", "0:7",
];

/// Directed acyclic graph on 9 vertices
const DAG: [&str; 10] = [
    "0:1", "1:2", "2:7", "2:4", "2:3", "1:5", "5:6", "3:6", "3:4", "6:8",
];

/// Undirected graph on 9 vertices used for traversals
const TRAVERSAL: [&str; 10] = [
    "0:1", "1:2", "2:7", "2:4", "2:3", "1:5", "5:6", "6:3", "3:4", "6:8",
];

fn with_graph(cmd: &mut Command, vertices: usize, edges: &[&str]) {
    cmd.arg("--vertices").arg(vertices.to_string());
    for edge in edges {
        cmd.arg("--edge").arg(edge);
    }
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    graphalgo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphalgo"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("kruskal"))
        .stdout(predicate::str::contains("topo"));
}

#[test]
fn test_version_flag() {
    graphalgo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_prints_banner() {
    graphalgo()
        .assert()
        .success()
        .stdout(predicate::str::contains("graphalgo"))
        .stdout(predicate::str::contains("--help"));
}

// ============================================================================
// Shortest paths
// ============================================================================

#[test]
fn test_path_weighted() {
    let mut cmd = graphalgo();
    cmd.args(["path", "0", "6"]);
    with_graph(&mut cmd, 9, &WEIGHTED);
    cmd.assert()
        .success()
        .stdout("Shortest Path is: 0 -> 1 -> 2 -> 3 -> 6\nTotal weight: 6\n");
}

#[test]
fn test_path_graph_flags_before_subcommand() {
    let mut cmd = graphalgo();
    with_graph(&mut cmd, 9, &WEIGHTED);
    cmd.args(["path", "7", "0"]);
    cmd.assert().success().stdout(predicate::str::contains(
        "Shortest Path is: 7 -> 6 -> 3 -> 2 -> 1 -> 0",
    ));
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    let mut cmd = graphalgo();
    cmd.args(["path", "0", "8"]);
    with_graph(&mut cmd, 9, &WEIGHTED);
    cmd.assert()
        .success()
        .stdout("There is no path from 0 to 8\n");
}

#[test]
fn test_path_json() {
    let mut cmd = graphalgo();
    cmd.args(["--format", "json", "path", "4", "7"]);
    with_graph(&mut cmd, 9, &WEIGHTED);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["distance"], 8);
    assert_eq!(json["path"], serde_json::json!([4, 5, 3, 6, 7]));
}

#[test]
fn test_hops() {
    let mut cmd = graphalgo();
    cmd.args(["hops", "0", "6"]);
    with_graph(&mut cmd, 9, &UNWEIGHTED);
    cmd.assert()
        .success()
        .stdout("Shortest Path is: 0 -> 1 -> 3 -> 6\nHops: 3\n");
}

#[test]
fn test_hops_quiet() {
    let mut cmd = graphalgo();
    cmd.args(["--quiet", "hops", "7", "0"]);
    with_graph(&mut cmd, 9, &UNWEIGHTED);
    cmd.assert().success().stdout("Shortest Path is: 7 -> 0\n");
}

// ============================================================================
// Spanning trees
// ============================================================================

#[test]
fn test_kruskal() {
    let mut cmd = graphalgo();
    cmd.arg("kruskal");
    with_graph(&mut cmd, 8, &WEIGHTED);
    cmd.assert().success().stdout(
        "0 -- 1 (1)\n3 -- 5 (1)\n3 -- 6 (1)\n6 -- 7 (1)\n1 -- 2 (2)\n2 -- 3 (2)\n1 -- 4 (3)\nTotal weight: 11\n",
    );
}

#[test]
fn test_kruskal_forest_scan_matches_union_find() {
    let mut cmd = graphalgo();
    cmd.args(["kruskal", "--cycle-check", "forest-scan"]);
    with_graph(&mut cmd, 8, &WEIGHTED);
    cmd.assert()
        .success()
        .stdout(predicate::str::ends_with("Total weight: 11\n"));
}

#[test]
fn test_prim_total_matches_kruskal() {
    let mut cmd = graphalgo();
    cmd.args(["--format", "json", "prim", "0"]);
    with_graph(&mut cmd, 8, &WEIGHTED);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["connected"], true);
    assert_eq!(json["total_weight"], 11);
    assert_eq!(json["edges"].as_array().unwrap().len(), 7);
}

#[test]
fn test_prim_disconnected() {
    let mut cmd = graphalgo();
    cmd.args(["prim", "0"]);
    with_graph(&mut cmd, 9, &WEIGHTED);
    cmd.assert()
        .success()
        .stdout("Minimum Spanning Tree not found\n");
}

// ============================================================================
// Orders
// ============================================================================

#[test]
fn test_topo() {
    let mut cmd = graphalgo();
    cmd.args(["topo", "--directed"]);
    with_graph(&mut cmd, 9, &DAG);
    cmd.assert().success().stdout("0 1 2 5 3 7 4 6 8\n");
}

#[test]
fn test_topo_cycle_exit_code() {
    let mut cmd = graphalgo();
    cmd.args(["topo", "--directed"]);
    with_graph(&mut cmd, 3, &["0:1", "1:2", "2:0"]);
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("cycle"));
}

#[test]
fn test_topo_cycle_json_error() {
    let mut cmd = graphalgo();
    cmd.args(["--format", "json", "topo", "--directed"]);
    with_graph(&mut cmd, 3, &["0:1", "1:2", "2:0"]);
    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "cycle_detected");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_bfs_and_dfs() {
    let mut bfs = graphalgo();
    bfs.args(["bfs", "2", "--repr", "set"]);
    with_graph(&mut bfs, 9, &TRAVERSAL);
    bfs.assert().success().stdout("2 1 3 4 7 0 5 6 8\n");

    let mut dfs = graphalgo();
    dfs.args(["dfs", "2"]);
    with_graph(&mut dfs, 9, &TRAVERSAL);
    dfs.assert().success().stdout("2 1 0 5 6 3 4 8 7\n");
}

#[test]
fn test_show() {
    let mut cmd = graphalgo();
    cmd.args(["show", "--directed"]);
    with_graph(&mut cmd, 3, &["0:1", "2:1"]);
    cmd.assert()
        .success()
        .stdout("0 --> 1\n2 --> 1\nin-degree 0: 0\nin-degree 1: 2\nin-degree 2: 0\n");
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_out_of_range_vertex_exit_code() {
    let mut cmd = graphalgo();
    cmd.args(["path", "0", "9"]);
    with_graph(&mut cmd, 9, &WEIGHTED);
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn test_out_of_range_edge_exit_code() {
    let mut cmd = graphalgo();
    cmd.arg("show");
    with_graph(&mut cmd, 3, &["0:3"]);
    cmd.assert().code(3);
}

#[test]
fn test_zero_weight_exit_code() {
    let mut cmd = graphalgo();
    cmd.arg("show");
    with_graph(&mut cmd, 3, &["0:1:0"]);
    cmd.assert().code(3);
}

#[test]
fn test_set_rejects_weighted_edge() {
    let mut cmd = graphalgo();
    cmd.args(["show", "--repr", "set"]);
    with_graph(&mut cmd, 3, &["0:1:2"]);
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("weight 2"));
}

#[test]
fn test_kruskal_total_overflow_exit_code() {
    let heavy = format!("0:1:{}", u64::MAX);
    let heavier = format!("1:2:{}", u64::MAX);
    let mut cmd = graphalgo();
    cmd.arg("kruskal");
    with_graph(&mut cmd, 3, &[heavy.as_str(), heavier.as_str()]);
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("exceeds the maximum weight"));
}

#[test]
fn test_path_distance_overflow_json_error() {
    let heavy = format!("0:1:{}", u64::MAX);
    let mut cmd = graphalgo();
    cmd.args(["--format", "json", "path", "0", "2"]);
    with_graph(&mut cmd, 3, &[heavy.as_str(), "1:2"]);
    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "weight_overflow");
}

#[test]
fn test_matrix_too_large_is_usage_error() {
    graphalgo()
        .args(["show", "--repr", "matrix", "--vertices"])
        .arg(usize::MAX.to_string())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("too many for an adjacency matrix"));
}

#[test]
fn test_edge_vertex_beyond_usize_is_usage_error() {
    graphalgo()
        .args(["show", "--vertices", "3", "--edge"])
        .arg(format!("{}0:1", usize::MAX))
        .assert()
        .code(2);
}

#[test]
fn test_bad_edge_literal_is_usage_error() {
    graphalgo()
        .args(["show", "--vertices", "3", "--edge", "0-1"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_vertices_is_usage_error() {
    graphalgo().args(["topo"]).assert().code(2);
}

#[test]
fn test_unknown_format_is_usage_error() {
    graphalgo()
        .args(["--format", "xml", "show", "--vertices", "1"])
        .assert()
        .code(2);
}

#[test]
fn test_parse_error_with_json_format() {
    let output = graphalgo()
        .args(["--format", "json", "path", "zero", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_defaults() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("graphalgo.toml");
    std::fs::write(
        &config_path,
        "[graph]\ndirected = true\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let mut cmd = graphalgo();
    cmd.arg("--config").arg(&config_path).arg("topo");
    with_graph(&mut cmd, 9, &DAG);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["order"], serde_json::json!([0, 1, 2, 5, 3, 7, 4, 6, 8]));
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("graphalgo.toml");
    std::fs::write(&config_path, "[graph]\ndirected = true\n").unwrap();

    let mut cmd = graphalgo();
    cmd.arg("--config")
        .arg(&config_path)
        .args(["--undirected", "topo"]);
    with_graph(&mut cmd, 2, &["0:1"]);
    cmd.assert().code(3);
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[graph]\nrepresentation = \"set\"\n",
    )
    .unwrap();

    let mut cmd = graphalgo();
    cmd.env("GRAPHALGO_CONFIG_DIR", dir.path()).arg("show");
    with_graph(&mut cmd, 2, &["0:1:5"]);
    cmd.assert().code(3);
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("graphalgo.toml");
    std::fs::write(&config_path, "[mst]\ncycle_check = \"dfs\"\n").unwrap();

    graphalgo()
        .arg("--config")
        .arg(&config_path)
        .args(["show", "--vertices", "1"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_config_file_fails() {
    graphalgo()
        .args(["--config", "/nonexistent/graphalgo.toml", "show", "--vertices", "1"])
        .assert()
        .code(1);
}
