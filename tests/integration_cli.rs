use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    // Try to find the built binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("ion-beam-cli");

    if !path.exists() {
        // Try release build
        path.pop();
        path.pop();
        path.push("release");
        path.push("ion-beam-cli");
    }

    path
}

#[test]
fn test_cli_accelerate_basic() {
    let output = Command::new(get_cli_binary())
        .args([
            "accelerate",
            "--ratio", "1.0",
            "--ey", "2.0",
            "--t-max", "4.0",
            "--points", "5",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("ACCELERATION") || stdout.contains("Time"),
        "Should contain acceleration output"
    );
}

#[test]
fn test_cli_deflect_basic() {
    let output = Command::new(get_cli_binary())
        .args([
            "deflect",
            "--ratio", "1.0",
            "--velocity", "1.0",
            "--bz", "1.0",
            "--x-max", "1.0",
            "--points", "11",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("DEFLECTION") || stdout.contains("Max reach"),
        "Should contain deflection output"
    );
}

#[test]
fn test_cli_solve_field_round_trip() {
    let output = Command::new(get_cli_binary())
        .args([
            "solve-field",
            "--ratio", "1.0",
            "--velocity", "1.0",
            "--x-target", "0.5",
            "--y-target", "0.5",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("FIELD") || stdout.contains("Bz"),
        "Should contain solver output: {}",
        stdout
    );
}

#[test]
fn test_cli_solve_field_unreachable_target_fails() {
    // x-target is past the reachable arc at the default seed
    let output = Command::new(get_cli_binary())
        .args([
            "solve-field",
            "--ratio", "1.0",
            "--velocity", "1.0",
            "--x-target", "3.0",
            "--y-target", "0.5",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Unreachable target should fail");
}

#[test]
fn test_cli_beam_renders_png() {
    let out = std::env::temp_dir().join("ion_beam_cli_test.png");
    let output = Command::new(get_cli_binary())
        .args([
            "beam",
            "--ratios", "1.0,2.0,3.0",
            "--velocity", "1.0",
            "--bz", "1.0",
            "--x-max", "1.0",
            "--points", "100",
            "--out", out.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 trajectories"), "Should report 3 trajectories");
    assert!(out.exists(), "Should write the PNG");
    std::fs::remove_file(&out).expect("Failed to remove test output");
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_cli_binary())
        .args(["--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("accelerate"), "Should list accelerate command");
    assert!(stdout.contains("deflect"), "Should list deflect command");
    assert!(stdout.contains("solve-field"), "Should list solve-field command");
    assert!(stdout.contains("beam"), "Should list beam command");
    assert!(stdout.contains("info"), "Should list info command");
}

#[test]
fn test_cli_invalid_command() {
    let output = Command::new(get_cli_binary())
        .args(["invalid-command"])
        .output()
        .expect("Failed to execute command");

    // Command should fail for invalid subcommand
    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_cli_missing_required_args() {
    let output = Command::new(get_cli_binary())
        .args(["deflect"])
        .output()
        .expect("Failed to execute command");

    // Should fail due to missing required arguments
    assert!(!output.status.success(), "Should fail with missing args");
}

#[test]
fn test_cli_output_format_json() {
    let output = Command::new(get_cli_binary())
        .args([
            "velocity",
            "--ratio", "1.0",
            "--ey", "2.0",
            "--y-max", "4.0",
            "--points", "5",
            "--output", "json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    // JSON output should contain brackets
    assert!(stdout.contains("[") || stdout.contains("{"), "Should be JSON format");
}

#[test]
fn test_cli_output_format_csv() {
    let output = Command::new(get_cli_binary())
        .args([
            "deflect",
            "--ratio", "1.0",
            "--velocity", "1.0",
            "--bz", "1.0",
            "--x-max", "1.0",
            "--points", "5",
            "--output", "csv",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    // CSV output should contain commas
    assert!(stdout.contains(","), "Should be CSV format");
}
