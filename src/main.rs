// PromptForge Main Entry Point
// Copyright (c) 2026 Xing_The_Creator | PromptForge

use promptforge::agent::provider;
use promptforge::config::{AppConfig, ProviderChoice};
use promptforge::engine::media::{DetailLevel, MediaPromptRequest, PromptKind};
use promptforge::engine::quality::TextMetrics;
use promptforge::engine::{classify, Category, EnhancementRequest, TargetLength};
use promptforge::server;
use promptforge::state::AppState;
use promptforge::studio::project::RenderSpec;
use promptforge::studio::render::{build_ffmpeg_command, render_project};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "promptforge")]
#[command(about = "PromptForge prompt enhancement service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// auto | gemini | openai | none (overrides PROMPTFORGE_PROVIDER)
        #[arg(long)]
        provider: Option<String>,
    },

    /// Enhance a single prompt
    Enhance {
        #[arg(short, long)]
        prompt: String,

        /// Category tag, e.g. code_generation. Classified when omitted.
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long, default_value = "professional")]
        tone: String,

        /// Do not ask for examples in the enhanced prompt
        #[arg(long)]
        no_examples: bool,

        /// brief | detailed | comprehensive
        #[arg(short, long, default_value = "detailed")]
        length: TargetLength,

        /// Extra instructions appended to the guidelines
        #[arg(short, long)]
        instructions: Option<String>,
    },

    /// Print the category a prompt falls into
    Classify {
        #[arg(short, long)]
        text: String,
    },

    /// Score a piece of text (0-100)
    Score {
        #[arg(short, long)]
        text: String,
    },

    /// Generate an image / video / text prompt with the configured model
    Generate {
        #[arg(short, long)]
        prompt: String,

        /// image | video | text
        #[arg(short, long, default_value = "image")]
        kind: String,

        /// short | medium | ultra
        #[arg(short, long, default_value = "medium")]
        quality: String,
    },

    /// List the available categories
    Categories,

    /// Render a project JSON file with ffmpeg
    Render {
        /// Project (or {settings, layers}) JSON file
        #[arg(short, long)]
        project: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Print the ffmpeg command instead of running it
        #[arg(long)]
        dry_run: bool,
    },
}

fn parse_lowercase<T: serde::de::DeserializeOwned>(field: &str, value: &str) -> anyhow::Result<T> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_lowercase()))
        .map_err(|_| anyhow!("invalid {} '{}'", field, value))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Cli::parse();
    let mut config = AppConfig::from_env()?;

    match args.command {
        Commands::Serve { port, provider } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(choice) = provider {
                config.provider = choice
                    .parse::<ProviderChoice>()
                    .map_err(|v| anyhow!("unknown provider '{}'", v))?;
            }

            info!("--- PROMPTFORGE v{} ---", env!("CARGO_PKG_VERSION"));
            let port = config.port;
            let state = AppState::from_config(config)?.shared();

            if !state.health.ffmpeg_available().await {
                warn!(
                    "⚠️ '{}' not found. /api/render will fail until ffmpeg is installed.",
                    state.config.ffmpeg_bin
                );
            }

            server::start_server(port, state.clone()).await?;
            info!("[SERVER] Stopped after {}s", state.health.uptime_secs());
        }

        Commands::Enhance {
            prompt,
            category,
            tone,
            no_examples,
            length,
            instructions,
        } => {
            let category = category
                .map(|tag| Category::from_tag(&tag).ok_or_else(|| anyhow!("unknown category '{}'", tag)))
                .transpose()?;

            let state = AppState::from_config(config)?;
            let request = EnhancementRequest {
                category,
                tone,
                include_examples: !no_examples,
                target_length: length,
                custom_instructions: instructions,
                ..EnhancementRequest::new(prompt)
            };

            let result = state.enhancer.enhance(request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Classify { text } => {
            println!("{}", classify(&text));
        }

        Commands::Score { text } => {
            let metrics = TextMetrics::measure(&text);
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }

        Commands::Generate {
            prompt,
            kind,
            quality,
        } => {
            let prompt_type: PromptKind = parse_lowercase("kind", &kind)?;
            let quality: DetailLevel = parse_lowercase("quality", &quality)?;

            let generator = provider::from_config(&config)?;
            let enhancer = promptforge::agent::PromptEnhancer::new(generator, config.fallback);
            let response = enhancer
                .generate_media_prompt(MediaPromptRequest {
                    user_prompt: prompt,
                    prompt_type,
                    quality,
                })
                .await?;
            println!("{}", response.professional_prompt);
        }

        Commands::Categories => {
            for c in Category::ALL {
                println!("{:<24} {:<24} {}", c.as_str(), c.label(), c.description());
            }
        }

        Commands::Render {
            project,
            output,
            dry_run,
        } => {
            let data = std::fs::read_to_string(&project)
                .with_context(|| format!("reading {:?}", project))?;
            let spec: RenderSpec = serde_json::from_str(&data)
                .with_context(|| format!("parsing {:?}", project))?;

            if dry_run {
                let argv = build_ffmpeg_command(&config.ffmpeg_bin, &spec, &output)?;
                println!("{}", argv.join(" "));
            } else {
                let out = render_project(&config.ffmpeg_bin, &spec, &output).await?;
                println!("{} ({:.2} MB)", out.output_path.display(), out.size_mb);
            }
        }
    }

    Ok(())
}
