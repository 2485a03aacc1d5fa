use std::env;

use env_logger::Env;

use passgen::{cli, exits, tui};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 => match tui::run() {
            Ok(()) => exits::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                exits::FAILURE
            }
        },
        _ => cli::run(args),
    };

    std::process::exit(code);
}
