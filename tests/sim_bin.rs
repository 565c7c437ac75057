use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "2"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");

    assert!(v["moves"].as_u64().unwrap() > 0);
    let one = v["player1"]["discs"].as_u64().unwrap();
    let two = v["player2"]["discs"].as_u64().unwrap();
    assert!(one + two <= 64);
    assert_eq!(v["player1"]["strategy"], "greedy");
    match v["winner"].as_str() {
        Some("player1") => assert!(one > two),
        Some("player2") => assert!(two > one),
        Some(other) => panic!("unexpected winner {}", other),
        None => assert_eq!(one, two),
    }
}

#[test]
fn sim_binary_rejects_missing_seeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
