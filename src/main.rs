use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use yt_transcript::{
    fetch_transcript, resolve_video_id, AppState, Config, TranscriptServer, YouTubeCaptions,
};

#[derive(Parser)]
#[command(name = "yt-transcript")]
#[command(about = "Serve video caption tracks as plain text")]
struct Args {
    /// Config file (extension optional)
    #[arg(short, long, default_value = "config/yt-transcript")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Address to bind, overrides config
        #[arg(short, long)]
        bind: Option<String>,

        /// Port to listen on, overrides config
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the transcript for a video URL or bare video id
    Fetch {
        /// Watch-page URL, short link, or video id
        video: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    match args.command.unwrap_or(Command::Serve {
        bind: None,
        port: None,
    }) {
        Command::Serve { bind, port } => serve(cfg, bind, port).await,
        Command::Fetch { video } => fetch(cfg, &video).await,
    }
}

async fn serve(cfg: Config, bind: Option<String>, port: Option<u16>) -> Result<()> {
    let mut server_config = cfg.server_config();
    if let Some(bind) = bind {
        server_config.host = bind;
    }
    if let Some(port) = port {
        server_config.port = port;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let provider = YouTubeCaptions::new(cfg.youtube.clone())?;
    let state = AppState::new(Arc::new(provider));

    let server = TranscriptServer::bind(&server_config, state).await?;
    server
        .run_until(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl-C, shutting down"),
                Err(e) => {
                    // Without a handler, keep serving until the process is killed
                    warn!("Failed to install Ctrl-C handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await
}

async fn fetch(cfg: Config, video: &str) -> Result<()> {
    let Some(video_id) = resolve_video_id(video) else {
        bail!("No video id found in {:?}", video);
    };

    info!("Fetching transcript for video: {}", video_id);

    let provider = YouTubeCaptions::new(cfg.youtube)?;
    let transcript = fetch_transcript(&provider, &video_id)
        .await
        .with_context(|| format!("Transcript retrieval failed for {}", video_id))?;

    println!("{}", transcript);
    Ok(())
}
