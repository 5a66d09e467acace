use clap::Parser;
use color_eyre::Result;
use engine::{
    DEFAULT_ENDPOINT, DEFAULT_MODEL,
    generation::GenerationClient,
    output::{metadata_path, save_posts, write_raw_response},
    post::extract_posts,
    prompt::build_prompt,
};
use log::debug;
use post_forge::{
    API_KEY_ENV_VAR, Config,
    cli::{Cli, Command, Configure},
    config_path, load_config, resolve_api_key, save_config,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = load_config()?.unwrap_or_default();

    if let Some(Command::Configure(args)) = cli.command {
        return configure(config, args);
    }

    let api_key = resolve_api_key(cli.api_key, std::env::var(API_KEY_ENV_VAR).ok(), &config)?;
    let endpoint = cli
        .endpoint
        .or(config.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.into());
    let model = cli
        .model
        .or(config.model)
        .unwrap_or_else(|| DEFAULT_MODEL.into());

    let prompt = build_prompt(&cli.topic);
    debug!("Prompt:\n{prompt}");

    let generation = GenerationClient::new(api_key, endpoint, model);
    let raw = generation.generate(&prompt).await?;
    write_raw_response(&cli.output_dir, &raw)?;

    let posts = extract_posts(&raw)?;
    let client = reqwest::Client::new();
    let saved = save_posts(&client, &cli.output_dir, posts).await?;

    println!(
        "Saved {} posts to {}",
        saved.len(),
        metadata_path(&cli.output_dir).display()
    );

    Ok(())
}

fn configure(mut config: Config, args: Configure) -> Result<()> {
    if let Some(key) = args.api_key {
        config.api_key = Some(key);
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = Some(endpoint);
    }
    if let Some(model) = args.model {
        config.model = Some(model);
    }

    save_config(&config)?;
    println!("Wrote {}", config_path()?.display());
    Ok(())
}
