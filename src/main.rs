use contact_book::prelude::run_app;
use env_logger::Env;
use log::error;
use std::process::exit;

fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run_app() {
        error!("{e:?}");
        eprintln!("Error: {e}");
        exit(1);
    }
}
