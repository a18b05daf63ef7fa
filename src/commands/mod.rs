pub mod edit;
pub mod export;
pub mod init;
pub mod missing;
pub mod punch;
pub mod show;

use crate::libs::punch::PunchKind;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Clock in for today")]
    In,
    #[command(about = "Clock out for today")]
    Out,
    #[command(about = "Display the attendance sheet")]
    Show(show::ShowArgs),
    #[command(about = "Write or apply an attendance edit form")]
    Edit(edit::EditArgs),
    #[command(about = "Count days still missing a clock-in")]
    Missing,
    #[command(about = "Export the attendance sheet")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::In => punch::cmd(PunchKind::In),
            Commands::Out => punch::cmd(PunchKind::Out),
            Commands::Show(args) => show::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Missing => missing::cmd(),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
