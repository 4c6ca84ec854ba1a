//! `engage` command-line front end.
//!
//! Reads settings from a JSON file, runs one pipeline flow and prints its JSON
//! result. Post text is truncated here, before it reaches the pipeline. With
//! `--verbose` the request log of the run is written to stderr as JSON lines.

use clap::{Args, Parser, Subcommand};
use engage_assist_lib::pipeline::{
    ErrorResponse, ImproveResponse, PostResponse, SuggestionsResponse,
};
use engage_assist_lib::request_log::RequestLogStore;
use engage_assist_lib::settings::{JsonFileStore, SettingsError, SettingsStore};
use engage_assist_lib::tones::{available_tones, post::POST_TONES, ToneOverrides, ToneSummary};
use engage_assist_lib::{EngagementPipeline, PipelineError, Platform, SuggestionRequest};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "engage",
    version,
    about = "Draft comments, DMs and posts for LinkedIn, X and Farcaster"
)]
struct Cli {
    /// JSON settings file (api_key, model, tone overrides)
    #[arg(long, global = true, default_value = "settings.json")]
    settings: PathBuf,

    /// Log debug output and the request log to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct PlatformArg {
    /// linkedin, x or farcaster
    #[arg(short, long, default_value = "linkedin")]
    platform: Platform,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest two comments and a DM for a post
    Suggest {
        #[command(flatten)]
        platform: PlatformArg,
        #[arg(short, long, default_value = "Friendly")]
        tone: String,
        /// Post author's display name
        #[arg(short, long, default_value = "")]
        author: String,
        /// Your display name, used to sign the DM
        #[arg(long, default_value = "")]
        viewer: String,
        /// Post text; read from stdin when omitted
        #[arg(long)]
        post: Option<String>,
    },
    /// Rewrite a comment you wrote
    Improve {
        #[command(flatten)]
        platform: PlatformArg,
        #[arg(short, long, default_value = "Professional")]
        tone: String,
        /// Comment text; read from stdin when omitted
        #[arg(long)]
        text: Option<String>,
    },
    /// Write a new post about a topic
    Post {
        #[command(flatten)]
        platform: PlatformArg,
        #[arg(short, long, default_value = "Informative")]
        tone: String,
        #[arg(long)]
        topic: String,
    },
    /// List the tones available for comments, or for posts with --post
    Tones {
        #[arg(long)]
        post: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

fn text_or_stdin(text: Option<String>) -> Result<String, CliError> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.trim().chars().take(max).collect()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn build_pipeline(
    settings: Arc<dyn SettingsStore>,
    request_log: &RequestLogStore,
) -> Result<EngagementPipeline, CliError> {
    Ok(EngagementPipeline::from_settings(settings)?.with_request_log(request_log.clone()))
}

/// One compact JSON object per recorded request, oldest first
fn request_log_lines(request_log: &RequestLogStore) -> Result<Vec<String>, serde_json::Error> {
    request_log
        .get_logs(None)
        .iter()
        .rev()
        .map(serde_json::to_string)
        .collect()
}

fn dump_request_log(request_log: &RequestLogStore) {
    if request_log.is_empty() {
        return;
    }
    match request_log_lines(request_log) {
        Ok(lines) => {
            for line in lines {
                eprintln!("{}", line);
            }
        }
        Err(e) => log::warn!("engage: failed to encode request log: {}", e),
    }
}

async fn run(cli: Cli, request_log: &RequestLogStore) -> Result<String, CliError> {
    let settings: Arc<dyn SettingsStore> = Arc::new(JsonFileStore::load(&cli.settings)?);

    match cli.command {
        Command::Tones { post } => {
            let tones: Vec<ToneSummary> = if post {
                POST_TONES
                    .iter()
                    .map(|t| ToneSummary {
                        id: t.id.to_string(),
                        emoji: t.emoji.to_string(),
                        label: t.label.to_string(),
                        custom: false,
                    })
                    .collect()
            } else {
                available_tones(&ToneOverrides::from_store(settings.as_ref()))
            };
            to_json(&tones)
        }
        Command::Suggest {
            platform: PlatformArg { platform },
            tone,
            author,
            viewer,
            post,
        } => {
            let post_text = truncate_chars(&text_or_stdin(post)?, platform.max_post_chars());
            let pipeline = build_pipeline(settings, request_log)?;
            let request = SuggestionRequest {
                post_text,
                tone_id: tone,
                platform,
                author_name: author,
                viewer_name: viewer,
            };
            let suggestions = pipeline.generate_suggestions(&request).await?;
            to_json(&SuggestionsResponse::from(suggestions))
        }
        Command::Improve {
            platform: PlatformArg { platform },
            tone,
            text,
        } => {
            let comment = text_or_stdin(text)?;
            let pipeline = build_pipeline(settings, request_log)?;
            let improved_text = pipeline.improve_comment(&comment, &tone, platform).await?;
            to_json(&ImproveResponse {
                success: true,
                improved_text,
            })
        }
        Command::Post {
            platform: PlatformArg { platform },
            tone,
            topic,
        } => {
            let pipeline = build_pipeline(settings, request_log)?;
            let post_text = pipeline.create_post(&topic, &tone, platform).await?;
            to_json(&PostResponse {
                success: true,
                post_text,
            })
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);

    let request_log = RequestLogStore::new();
    let result = run(cli, &request_log).await;
    if verbose {
        dump_request_log(&request_log);
    }

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("engage: {:?}", e);
            let response = match &e {
                CliError::Pipeline(pipeline_error) => ErrorResponse::from(pipeline_error),
                other => ErrorResponse {
                    success: false,
                    error: other.to_string(),
                },
            };
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{}", json),
                Err(_) => eprintln!("{}", response.error),
            }
            ExitCode::FAILURE
        }
    }
}
