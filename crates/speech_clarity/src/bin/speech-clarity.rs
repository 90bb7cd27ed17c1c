use std::path::PathBuf;

use clap::Parser;
use speech_clarity::{
    openai::OpenAIClient, tracing::init_tracing_subscriber, yt::fetcher::YtDlpFetcher,
    VideoAnalyzerBuilder,
};

#[derive(Parser)]
#[command(name = "speech-clarity", about = "Video communication clarity analyzer")]
struct Cli {
    /// Video URL to analyze
    video_url: String,

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

#[tokio::main(flavor = "current_thread")]
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

    let report = analyzer.analyze(&cli.video_url).await?;

    println!("Transcript:\n{}\n", report.transcript);
    println!("Clarity score: {:.2}%\n", report.clarity_score);
    println!("Summary:\n{}", report.summary);

    Ok(())
}
