use clap::Parser;
use std::path::PathBuf;

use crate::constant;

#[derive(Parser, Debug)]
pub struct Args {
    #[clap(long)]
    pub config_file : PathBuf,
    #[clap(long, conflicts_with_all = ["section", "schema"], required_unless_present = "section")]
    pub secret_file : Option<PathBuf>,
    #[clap(long)]
    pub section : Option<String>,
    #[clap(long, requires = "section")]
    pub schema : Option<String>,
    #[clap(long)]
    pub statement_file : Option<PathBuf>,
    #[clap(long, default_value = constant::DEFAULT_LOG_LEVEL)]
    pub log_level : String,
    #[clap(long)]
    pub log_file : Option<String>,
}

pub fn parsing() -> Args {
    Args::parse()
}
