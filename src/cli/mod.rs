//! Command-line interface: argument parsing and subcommand dispatch.

pub mod render;

use clap::{ArgAction, Parser, Subcommand};

use crate::collector::traits::CommandRunner;
use crate::collector::{Collector, RealFs, RealRunner};

/// Linux system information fetcher.
#[derive(Parser)]
#[command(name = "sysfetch", version, about = "Linux system information fetcher")]
pub struct Args {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base path to the proc filesystem.
    #[arg(long, default_value = "/proc", global = true)]
    pub proc_path: String,

    /// Base path for distribution release files.
    #[arg(long, default_value = "/etc", global = true)]
    pub etc_path: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Display a colored system information summary.
    Fetch {
        /// Print the snapshot as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show disk usage for mounted filesystems.
    Disk,
    /// Show network interfaces.
    Net,
}

/// Dispatches the parsed arguments to the matching subcommand.
///
/// Any core acquisition failure surfaces here as a single error; the caller
/// prints it and exits non-zero, so no partial output is ever produced.
pub fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Fetch { json } => {
            let collector = Collector::new(
                RealFs::new(),
                RealRunner::new(),
                &args.proc_path,
                &args.etc_path,
            );
            let snapshot = collector.collect_snapshot()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print!("{}", render::format_snapshot(&snapshot));
            }
        }
        Command::Disk => {
            let output = RealRunner::new().run("df", &["-h"])?;
            print!("{}", render::format_disk_table(&output));
        }
        Command::Net => {
            let output = RealRunner::new().run("ip", &["addr"])?;
            print!("{}", output);
        }
    }

    Ok(())
}
