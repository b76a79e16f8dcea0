use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "5"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["size"], 5);
    assert_eq!(v["fleet"].as_array().map(Vec::len), Some(3));
    assert_eq!(v["correct"], 7);
    let guesses = v["guesses"].as_u64().unwrap();
    let incorrect = v["incorrect"].as_u64().unwrap();
    assert_eq!(guesses, 7 + incorrect);
}

#[test]
fn sim_binary_rejects_bad_size() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "2"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
