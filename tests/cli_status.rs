use std::process::Command;

fn run(moves: &[&str]) -> (bool, String, String) {
    let exe = env!("CARGO_BIN_EXE_check_mate_status");
    let output = Command::new(exe)
        .args(moves)
        .output()
        .expect("failed to run check_mate_status");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn reports_fools_mate() {
    let (ok, stdout, _) = run(&["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(ok);
    assert!(stdout.contains("side_to_move: white"), "{stdout}");
    assert!(stdout.contains("status: checkmate"), "{stdout}");
    assert!(stdout.contains("checker: h4"), "{stdout}");
    assert!(stdout.contains("legal_moves: 0"), "{stdout}");
}

#[test]
fn lists_replies_after_opening_move() {
    let (ok, stdout, _) = run(&["e2e4"]);
    assert!(ok);
    assert!(stdout.contains("side_to_move: black"));
    assert!(stdout.contains("status: active"));
    assert!(stdout.contains("legal_moves: 20"));
    assert!(stdout.lines().any(|line| line == "e7e5"));
    assert!(!stdout.contains("checker:"));
}

#[test]
fn rejects_illegal_move() {
    let (ok, _, stderr) = run(&["e2e5"]);
    assert!(!ok);
    assert!(stderr.contains("Illegal move e2e5"), "{stderr}");
}

#[test]
fn rejects_bad_notation() {
    let (ok, _, stderr) = run(&["e2"]);
    assert!(!ok);
    assert!(stderr.contains("invalid move notation"), "{stderr}");
}
