use std::{path::PathBuf, sync::Arc, time::Instant};

use clap::Parser;
use speech_clarity::{
    openai::OpenAIClient,
    tracing::init_tracing_subscriber,
    web::{router, AppState},
    yt::fetcher::YtDlpFetcher,
    VideoAnalyzerBuilder,
};

#[derive(Parser)]
#[command(
    name = "speech-clarity-web",
    about = "Web UI for the video communication clarity analyzer"
)]
struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, env = "PORT", default_value = "8080")]
    port: u16,

    /// API key for the transcription service
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// Override the OpenAI-compatible API base URL
    #[arg(long, env = "OPENAI_BASE_URL")]
    openai_base_url: Option<String>,

    /// Working directory for per-run audio files
    #[arg(long, default_value = "/var/tmp/speech-clarity")]
    workdir: PathBuf,

    /// Number of sentences in the extractive summary
    #[arg(long, default_value = "3")]
    max_summary_sentences: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let mut transcriber = OpenAIClient::new(&cli.openai_key);
    if let Some(base_url) = &cli.openai_base_url {
        transcriber = transcriber.with_base_url(base_url);
    }

    let analyzer = VideoAnalyzerBuilder::new(&cli.workdir)
        .fetcher(YtDlpFetcher::new())
        .transcriber(transcriber)
        .max_summary_sentences(cli.max_summary_sentences)
        .build();

    let app = router(AppState {
        analyzer: Arc::new(analyzer),
        start_time: Instant::now(),
    });

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
