use std::env;
use std::io;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use chat_ai::{
    cli::{Args, ProviderKind, DEFAULT_LOG_PATH},
    conversation::Conversation,
    errors::ChatError,
    gemini::GeminiClient,
    openai::OpenAiClient,
    provider::ChatProvider,
    repl::run_repl,
    transcript::TranscriptSink,
};

fn require_env(name: &'static str) -> Result<String, ChatError> {
    env::var(name).map_err(|_| ChatError::MissingEnv { name })
}

fn run(args: Args) -> Result<(), ChatError> {
    let api_key = require_env("API_KEY")?;

    let provider: Box<dyn ChatProvider> = match args.provider {
        ProviderKind::ChatGpt => Box::new(OpenAiClient::new(api_key)),
        ProviderKind::Gemini => {
            let project_id = require_env("VAI_PROJECT_ID")?;
            let region = require_env("VAI_REGION")?;
            Box::new(GeminiClient::new(api_key, &project_id, &region))
        }
    };

    let log_path = env::var("CHAT_AI_LOG").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let mut transcript = match TranscriptSink::open(&log_path) {
        Ok(sink) => Some(sink),
        Err(e) => {
            warn!(path = %log_path, error = %e, "transcript log unavailable, continuing without it");
            None
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut conversation = Conversation::new();
    run_repl(
        provider.as_ref(),
        args.provider,
        &mut input,
        &mut output,
        &mut conversation,
        transcript.as_mut(),
    )
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let res = run(args);
    res.unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
}
