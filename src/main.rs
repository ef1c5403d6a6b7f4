use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use sfscan::areas::inventory::{Inventory, ScanOptions, UnknownFilePolicy};

#[derive(Parser)]
#[command(
    name = "sfscan",
    version = "0.1.0",
    about = "Scan a Salesforce source directory and report its components as a Markdown table",
    long_about = "This tool recursively scans a Salesforce source directory, classifies every \
    file by its metadata suffix, determines its working-tree state with git when available, \
    and prints a Markdown table with columns State, Name, Type, and Path.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The root directory to scan")]
    directory: String,

    #[arg(
        long,
        help = "Leave files that match no known metadata suffix out of the report"
    )]
    skip_unknown: bool,

    #[arg(
        long,
        help = "Skip the git working-tree state lookup; states are reported as Unknown"
    )]
    no_git: bool,
}

fn main() -> Result<()> {
    // Usage problems are reported on stdout with exit code 1, keeping the
    // table as the only output of successful runs.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", err);
            std::process::exit(0);
        }
        Err(err) => {
            println!("{}", err);
            std::process::exit(1);
        }
    };

    let unknown_files = if cli.skip_unknown {
        UnknownFilePolicy::Exclude
    } else {
        UnknownFilePolicy::Include
    };
    let options = ScanOptions::new(unknown_files, !cli.no_git);

    let inventory = Inventory::new(&cli.directory, options, Box::new(std::io::stdout()))?;

    inventory.scan()?;

    Ok(())
}
