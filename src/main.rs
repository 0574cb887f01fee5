use std::io;
use std::process;

use clap::Parser;
use log::error;
use simple_logger::SimpleLogger;

use bst_menu::config::Config;
use bst_menu::session::Session;

fn main() {
    let config = Config::parse();

    if let Err(err) = SimpleLogger::new().with_level(config.log_level).init() {
        eprintln!("failed to initialise logging: {}", err);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config.render_options());

    if let Err(err) = session.run() {
        error!("{}", err);
        process::exit(1);
    }
}
