use clap::Parser;
use pass2csv::decrypt::GpgDecryptor;
use pass2csv::error::Result;
use pass2csv::export;
use pass2csv::store::PasswordStore;
use std::io;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = PasswordStore::from_env()?;

    let stdout = io::stdout();
    export::run(
        &store,
        &GpgDecryptor,
        cli.subfolder.as_deref(),
        stdout.lock(),
    )?;

    Ok(())
}
