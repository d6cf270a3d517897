//! Document the command line interface
use std::env;
use std::io::{self, IsTerminal};

use log::info;
use structopt::StructOpt;

use crate::console::{StreamConsole, TerminalConsole};
use crate::error::BankError;
use crate::menu::{self, Session};

/// Command line options
#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Keep coins in reais, dollars and euros and add them up in reais",
version = env ! ("CARGO_PKG_VERSION"),
author = env ! ("CARGO_PKG_AUTHORS"),
name = "coinbank"
)]
pub struct CommonOpts {
    /// Use colors even if the output is not a terminal
    #[structopt(long = "--force-color")]
    pub force_color: bool,
}

/// Entry point for the command line app
///
/// Reads the options and runs the menu on standard input, with line editing when it is a terminal.
pub fn run_app(args: Vec<String>) -> Result<(), BankError> {
    let options = CommonOpts::from_iter(args.iter());
    if options.force_color {
        env::set_var("CLICOLOR_FORCE", "1");
    }

    let mut session = Session::new();
    let res = if io::stdin().is_terminal() {
        info!("interactive session");
        menu::run(&mut TerminalConsole::new(), &mut session)
    } else {
        info!("reading from a pipe");
        let stdin = io::stdin();
        let stdout = io::stdout();
        menu::run(
            &mut StreamConsole::new(stdin.lock(), stdout.lock()),
            &mut session,
        )
    };
    info!("session ended with {} coins", session.holdings.len());
    res
}
