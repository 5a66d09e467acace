use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
pub struct Cli {
    /// Overrides GEMINI_API_KEY and the config file
    #[arg(short, long)]
    pub api_key: Option<String>,

    /// Where images and metadata are written
    #[arg(short, long, default_value = "generated")]
    pub output_dir: PathBuf,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    /// What the posts should advertise
    #[arg(default_value = "a small business")]
    pub topic: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Store defaults in the config file
    Configure(Configure),
}

#[derive(Debug, clap::Args)]
pub struct Configure {
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub model: Option<String>,
}
