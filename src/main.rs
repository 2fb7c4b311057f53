use clap::Parser;
use nichescout::cli::commands::{Cli, Commands};
use nichescout::config::AppConfig;
use nichescout::domain::values::sort_key::SortKey;
use nichescout::NicheScout;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nichescout=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(config, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(mut config: AppConfig, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Analyze {
            niche,
            markup,
            sort,
            strict,
            min_margin,
            limit,
        } => {
            if let Some(m) = markup {
                config.engine.markup_factor = m;
            }
            if let Some(s) = sort {
                let key: SortKey = s.parse()?;
                config.engine.sort_key = Some(key);
            }
            config.engine.strict |= strict;
            if min_margin.is_some() {
                config.engine.min_margin_percent = min_margin;
            }
            if limit.is_some() {
                config.engine.limit = limit;
            }

            let scout = NicheScout::new(&config)?;
            let analysis = scout.analyze(&niche).await?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Commands::Profit {
            price,
            shipping,
            markup,
        } => {
            if let Some(m) = markup {
                config.engine.markup_factor = m;
            }
            let scout = NicheScout::new(&config)?;
            let metrics = scout.profitability(price, shipping)?;
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        Commands::Fallback { niche } => {
            let scout = NicheScout::new(&config)?;
            let catalog = scout.fallback_catalog(&niche);
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }
    Ok(())
}
