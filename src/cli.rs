use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "tadpole-lastvisit",
    version,
    about = "Last-visit carry-forward forecast benchmark CLI"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(
        long,
        default_value = "..",
        help = "Directory holding TADPOLE_D1_D2.csv and TADPOLE_D3.csv"
    )]
    pub data_dir: PathBuf,

    #[arg(long, default_value = ".", help = "Output directory")]
    pub out: PathBuf,

    #[arg(
        long,
        default_value_t = false,
        help = "Log substituted and unrecognised data values"
    )]
    pub verbose: bool,

    #[arg(long, default_value_t = false, help = "Also write a JSON run report")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(
        long,
        default_value = "..",
        help = "Directory holding TADPOLE_D1_D2.csv and TADPOLE_D3.csv"
    )]
    pub data_dir: PathBuf,
}
