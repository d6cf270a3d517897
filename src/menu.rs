//! The interactive menu
//!
//! Each round prints the options, reads one and runs it against the session until the user picks
//! the exit option. Mistyped currency codes and coins that are not in the bank are reported and the
//! menu goes on; input that is not a number ends the run with an error.
use colored::Colorize;
use log::debug;

use crate::console::Console;
use crate::error::BankError;
use crate::models::{two_decimals, Currency, Holdings, Money};
use crate::parser::{parse_amount, parse_code};

const MENU: [&str; 6] = [
    "--- Coin Bank Menu ---",
    "1. Add a coin",
    "2. Remove a coin",
    "3. List coins",
    "4. Calculate total in Reais",
    "0. Exit",
];

/// The options of the menu, by the code the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add,
    Remove,
    List,
    Total,
    Exit,
    Invalid(i64),
}

impl From<i64> for MenuOption {
    fn from(code: i64) -> Self {
        match code {
            1 => MenuOption::Add,
            2 => MenuOption::Remove,
            3 => MenuOption::List,
            4 => MenuOption::Total,
            0 => MenuOption::Exit,
            x => MenuOption::Invalid(x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exited,
}

/// Everything that lives as long as one run of the menu
#[derive(Debug, Default)]
pub struct Session {
    pub holdings: Holdings,
}

impl Session {
    pub fn new() -> Self {
        Session {
            holdings: Holdings::new(),
        }
    }
}

/// Runs the menu until the user exits or the input breaks
pub fn run<C: Console>(console: &mut C, session: &mut Session) -> Result<(), BankError> {
    let mut state = MenuState::Running;
    while state == MenuState::Running {
        state = step(console, session)?;
    }
    Ok(())
}

/// One round of the menu: show it, read an option and execute it
pub fn step<C: Console>(console: &mut C, session: &mut Session) -> Result<MenuState, BankError> {
    console.print_line("")?;
    for line in MENU.iter() {
        console.print_line(line)?;
    }
    let option = MenuOption::from(parse_code(&console.read_word("Choose an option: ")?)?);
    debug!("menu option {:?}", option);
    match option {
        MenuOption::Add => add_coin(console, session)?,
        MenuOption::Remove => remove_coin(console, session)?,
        MenuOption::List => list_coins(console, session)?,
        MenuOption::Total => show_total(console, session)?,
        MenuOption::Exit => {
            console.print_line("Exiting the system...")?;
            return Ok(MenuState::Exited);
        }
        MenuOption::Invalid(_) => console.print_line(&"Invalid option!".red().to_string())?,
    }
    Ok(MenuState::Running)
}

fn add_coin<C: Console>(console: &mut C, session: &mut Session) -> Result<(), BankError> {
    let code = parse_code(&console.read_word("Choose the coin (1-Real, 2-Dollar, 3-Euro): ")?)?;
    let amount = parse_amount(&console.read_word("Enter the coin value: ")?)?;
    match Currency::from_code(code) {
        Ok(currency) => {
            let coin = Money::new(currency, amount);
            debug!("adding {}", coin);
            session.holdings.add(coin);
            console.print_line(&"Coin added!".green().to_string())
        }
        Err(e) => {
            debug!("{}", e);
            console.print_line(&"Invalid coin type!".red().to_string())
        }
    }
}

// The amount is asked before the currency here, the other way round from adding
fn remove_coin<C: Console>(console: &mut C, session: &mut Session) -> Result<(), BankError> {
    let amount = parse_amount(&console.read_word("Enter the coin value to remove: ")?)?;
    let code = parse_code(&console.read_word("Enter the coin type (1-Real, 2-Dollar, 3-Euro): ")?)?;
    let removed = match Currency::from_code(code) {
        Ok(currency) => session.holdings.remove(&Money::new(currency, amount)),
        Err(e) => {
            debug!("{}", e);
            false
        }
    };
    if removed {
        debug!("removed one coin, {} left", session.holdings.len());
        console.print_line(&"Coin removed!".green().to_string())
    } else {
        console.print_line(&"Coin not found!".yellow().to_string())
    }
}

fn list_coins<C: Console>(console: &mut C, session: &Session) -> Result<(), BankError> {
    if session.holdings.is_empty() {
        return console.print_line("The bank is empty!");
    }
    for coin in session.holdings.iter() {
        console.print_line(&coin.to_string())?;
    }
    Ok(())
}

fn show_total<C: Console>(console: &mut C, session: &Session) -> Result<(), BankError> {
    console.print_line(&format!(
        "Total in Reais: {} {}",
        Currency::Local.symbol(),
        two_decimals(&session.holdings.total()).bold()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::StreamConsole;
    use crate::error::InputError;

    fn run_script(script: &str) -> (Result<(), BankError>, Session, String) {
        let mut console = StreamConsole::new(script.as_bytes(), Vec::new());
        let mut session = Session::new();
        let res = run(&mut console, &mut session);
        let output = String::from_utf8(console.into_output()).unwrap();
        (res, session, output)
    }

    #[test]
    fn options() {
        assert_eq!(MenuOption::from(1), MenuOption::Add);
        assert_eq!(MenuOption::from(4), MenuOption::Total);
        assert_eq!(MenuOption::from(0), MenuOption::Exit);
        assert_eq!(MenuOption::from(9), MenuOption::Invalid(9));
    }

    #[test]
    fn exit_right_away() {
        let (res, session, output) = run_script("0\n");
        assert!(res.is_ok());
        assert!(session.holdings.is_empty());
        assert!(output.contains("--- Coin Bank Menu ---"));
        assert!(output.ends_with("Exiting the system...\n"));
    }

    #[test]
    fn step_keeps_running() {
        let mut console = StreamConsole::new("3\n0\n".as_bytes(), Vec::new());
        let mut session = Session::new();
        assert_eq!(
            step(&mut console, &mut session).unwrap(),
            MenuState::Running
        );
        assert_eq!(step(&mut console, &mut session).unwrap(), MenuState::Exited);
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("The bank is empty!"));
    }

    #[test]
    fn add_then_total() {
        let (res, session, output) = run_script("1\n1\n100\n1\n2\n10\n1\n3\n5.00\n4\n0\n");
        assert!(res.is_ok());
        assert_eq!(session.holdings.len(), 3);
        assert!(output.contains("Total in Reais: R$ "));
        assert!(output.contains("193.10"));
    }

    #[test]
    fn unknown_currency_is_not_added() {
        let (res, session, output) = run_script("1\n7\n10\n0\n");
        assert!(res.is_ok());
        assert!(session.holdings.is_empty());
        assert!(output.contains("Invalid coin type!"));
    }

    #[test]
    fn several_answers_on_one_line() {
        let (res, session, output) = run_script("\n1 3\n\n  7.5 3\n0\n");
        assert!(res.is_ok());
        assert_eq!(session.holdings.len(), 1);
        assert!(output.contains("Euro: € 7.50"));
    }

    #[test]
    fn malformed_amount_ends_the_run() {
        let (res, session, _) = run_script("1\n2\nten\n0\n");
        match res {
            Err(BankError::Input(InputError::NotAnAmount(x))) => assert_eq!(x, "ten"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(session.holdings.is_empty());
    }

    #[test]
    fn end_of_input_is_an_error() {
        let (res, _, _) = run_script("3\n");
        assert!(matches!(
            res,
            Err(BankError::Input(InputError::EndOfInput))
        ));
    }
}
