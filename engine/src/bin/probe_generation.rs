//! Sends one real generation request and dumps the raw JSON response, for
//! adapting the response parser to a new provider.

use clap::Parser;
use color_eyre::Result;
use engine::{DEFAULT_ENDPOINT, DEFAULT_MODEL, generation::GenerationClient, prompt::build_prompt};

#[derive(clap::Parser)]
struct Arg {
    key: String,
    #[arg(default_value = "a small business")]
    topic: String,
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();
    let Arg {
        key,
        topic,
        endpoint,
        model,
    } = Arg::parse();

    let client = GenerationClient::new(key, endpoint, model);
    let resp = client.generate(&build_prompt(&topic)).await?;
    println!("{}", serde_json::to_string_pretty(&resp)?);

    Ok(())
}
