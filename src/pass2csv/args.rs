use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pass2csv")]
#[command(about = "Dump your password-store database into a CSV for importing into KeePassXC")]
#[command(
    after_help = "Unknown `key: value` lines and freeform lines end up in the `Notes` column."
)]
pub struct Cli {
    /// Subfolder of the password store to export. This is relative to the
    /// store root: use `Work`, not `~/.password-store/Work`
    #[arg(short, long)]
    pub subfolder: Option<PathBuf>,
}
