use coinbank::console::StreamConsole;
use coinbank::menu::{run, Session};
use coinbank::BankError;

/// Runs the menu feeding it ```lines```, one per prompt
#[allow(dead_code)]
pub fn run_lines(lines: &[&str]) -> (Result<(), BankError>, Session, String) {
    let mut script = lines.join("\n");
    script.push('\n');
    let mut console = StreamConsole::new(script.as_bytes(), Vec::new());
    let mut session = Session::new();
    let res = run(&mut console, &mut session);
    let output = String::from_utf8(console.into_output()).unwrap();
    (res, session, output)
}

/// Runs the menu and checks that it ended through the exit option
#[allow(dead_code)]
pub fn test_lines(lines: &[&str]) -> (Session, String) {
    let (res, session, output) = run_lines(lines);
    assert!(res.is_ok(), "{:?}", res);
    (session, output)
}
