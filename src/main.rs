use clap::Parser;
use log::{debug, LevelFilter};

mod args;
mod quiz;

fn main() {
    let args = args::Args::parse();

    if args.verbose {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }
    debug!("args: {:?}", args);

    if let Err(e) = quiz::run_quiz(&args) {
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }
}
