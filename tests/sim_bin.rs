use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("7")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 7);
    assert!(v["outcome"].is_string());
    assert_ne!(v["outcome"], "continue");
    assert!(v["moves"].as_array().unwrap().len() >= 5);
    assert_eq!(v["board"].as_array().unwrap().len(), 3);
}
