use std::path::PathBuf;

use structopt::clap::AppSettings::*;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lnk",
    about = "Inspect Windows shell link (.lnk) files.",
    settings = &[SubcommandRequiredElseHelp, DisableHelpSubcommand, VersionlessSubcommands]
)]
pub struct Cli {
    #[structopt(short, long, help = "Show debug output from the decoder", global = true)]
    pub verbose: bool,

    #[structopt(subcommand)]
    pub command: Commands,
}

#[derive(Debug, StructOpt)]
pub enum Commands {
    #[structopt(name = "info", visible_alias = "i", about = "Show everything stored in a shortcut")]
    Info(InfoArgs),

    #[structopt(name = "target", visible_alias = "t", about = "Print the absolute target path of a shortcut")]
    Target(TargetArgs),
}

#[derive(Debug, StructOpt)]
pub struct InfoArgs {
    #[structopt(long, help = "Print JSON instead of text")]
    pub json: bool,

    #[structopt(
        name = "lnkfile",
        parse(from_os_str),
        required = true,
        help = "Paths to .lnk files"
    )]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct TargetArgs {
    #[structopt(short, long, help = "Fail if a target does not exist")]
    pub check: bool,

    #[structopt(
        name = "lnkfile",
        parse(from_os_str),
        required = true,
        help = "Paths to .lnk files"
    )]
    pub files: Vec<PathBuf>,
}
