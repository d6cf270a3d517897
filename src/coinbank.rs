use coinbank::BankError;
use env_logger::Env;
use log::error;
use std::{env, process};

fn exit_code(res: Result<(), BankError>) -> i32 {
    match res {
        Ok(()) => 0,
        Err(BankError::Input(e)) => {
            eprintln!("{}", e);
            1
        }
        Err(e) => {
            error!("session aborted: {:?}", e);
            eprintln!("{}", e);
            1
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    process::exit(exit_code(coinbank::run_app(env::args().collect())))
}
