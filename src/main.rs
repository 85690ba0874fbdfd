use clap::Parser;
use duke::cli::{Cli, Commands};
use duke::duke::Duke;
use duke::storage::paths::data_dir;
use log::info;
use std::error::Error;
use std::io;
use std::process::ExitCode;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("DUKE_LOG", "warn")).init();
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Load .env file from current directory
    dotenv::dotenv().ok();
    setup_logging();

    let cli = Cli::parse();
    let dir = data_dir(cli.data_dir.as_deref())?;
    info!("Using data directory {}", dir.display());
    let mut session = Duke::open(&dir)?;

    match cli.command {
        Some(Commands::Exec { args }) => {
            let reply = session.respond(&args.join(" "));
            if reply.is_error {
                eprintln!("{}", reply.message);
                return Ok(ExitCode::FAILURE);
            }
            println!("{}", reply.message);
        }
        Some(Commands::Tui) => {
            duke::tui::app::run(&mut session)?;
        }
        Some(Commands::Repl) | None => {
            let stdin = io::stdin();
            duke::console::run(&mut session, stdin.lock(), &mut io::stdout())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
