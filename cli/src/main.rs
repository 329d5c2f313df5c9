//! CLI entrypoint for neuroform
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod batch;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use neuroform_application::{
    AnswerEngine, BatchOutcome, DecisionLogger, NoDecisionLogger, NoProgress, QuestionItem,
    RankAnswersInput, RankAnswersUseCase, RankBatchUseCase, RankingParams,
    RankingProgressNotifier, SentimentModel,
};
use neuroform_domain::OutputFormat;
use neuroform_infrastructure::{
    ConfigLoader, FileConfig, FileSentimentConfig, JsonlDecisionLogger, LexiconTextAnalyzer,
    SentimentBackendKind,
};
use neuroform_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    let warnings = config.check()?;

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    info!("Starting neuroform");

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.parse_format().0)
        .unwrap_or_default();

    let mut params = config.ranking.to_ranking_params().0;
    if let Some(threshold) = cli.threshold {
        params = params.with_confidence_threshold(threshold);
    }

    // === Dependency Injection ===
    let engine = Arc::new(build_engine(&config, cli.lexical_only)?);
    info!("Sentiment backend: {}", engine.sentiment_backend());

    let rank = RankAnswersUseCase::new(Arc::clone(&engine), &params)
        .with_decision_logger(decision_logger(&config));

    let code = match &cli.batch {
        Some(path) => run_batch(rank, path, &params, format, cli.quiet)?,
        None => {
            let Some(question) = cli.question else {
                bail!("A question is required (or use --batch FILE). See --help.");
            };
            let decision = rank.execute(&RankAnswersInput::new(question, cli.options))?;
            print_output(&ConsoleFormatter::format_decision(&decision, format));
            drop(rank);
            ExitCode::SUCCESS
        }
    };

    release_engine(engine);
    Ok(code)
}

/// Shut the engine down once no worker holds it anymore. Returns whether
/// the shutdown ran.
fn release_engine(engine: Arc<AnswerEngine>) -> bool {
    match Arc::try_unwrap(engine) {
        Ok(engine) => {
            engine.shutdown();
            true
        }
        Err(engine) => {
            debug!(
                "Skipping engine shutdown: {} references still held by abandoned workers",
                Arc::strong_count(&engine) - 1
            );
            false
        }
    }
}

/// Initialize logging from the verbosity level; `RUST_LOG` takes precedence.
///
/// Logs go to stderr, and additionally to `log_file` when configured. The
/// returned guard must be held until exit so the file writer is flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?
        .to_string_lossy()
        .into_owned();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

fn build_engine(config: &FileConfig, lexical_only: bool) -> Result<AnswerEngine> {
    let analyzer =
        LexiconTextAnalyzer::new().with_extra_stop_words(&config.analyzer.extra_stop_words);

    let mut builder = AnswerEngine::builder().text_analyzer(Arc::new(analyzer));
    if !lexical_only {
        if let Some(model) = sentiment_model(&config.sentiment) {
            builder = builder.sentiment_model(model);
        }
    }

    Ok(builder.build()?)
}

fn sentiment_model(config: &FileSentimentConfig) -> Option<Arc<dyn SentimentModel>> {
    match config.parse_backend().0 {
        SentimentBackendKind::Lexical => None,
        SentimentBackendKind::Http => http_sentiment_model(config),
    }
}

#[cfg(feature = "http-sentiment")]
fn http_sentiment_model(config: &FileSentimentConfig) -> Option<Arc<dyn SentimentModel>> {
    use neuroform_infrastructure::HttpSentimentModel;

    let endpoint = config.endpoint.as_deref()?;
    match HttpSentimentModel::new(endpoint, Duration::from_secs(config.timeout_seconds)) {
        Ok(model) => {
            let model = match config.api_key() {
                Some(key) => model.with_api_key(key),
                None => model,
            };
            Some(Arc::new(model))
        }
        Err(e) => {
            warn!("Sentiment model unavailable, using lexical sentiment: {}", e);
            None
        }
    }
}

#[cfg(not(feature = "http-sentiment"))]
fn http_sentiment_model(_config: &FileSentimentConfig) -> Option<Arc<dyn SentimentModel>> {
    warn!("Built without the http-sentiment feature, using lexical sentiment");
    None
}

fn decision_logger(config: &FileConfig) -> Arc<dyn DecisionLogger> {
    match config
        .logging
        .decision_log
        .as_deref()
        .and_then(JsonlDecisionLogger::new)
    {
        Some(logger) => {
            info!("Recording decisions to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoDecisionLogger),
    }
}

fn run_batch(
    rank: RankAnswersUseCase,
    path: &Path,
    params: &RankingParams,
    format: OutputFormat,
    quiet: bool,
) -> Result<ExitCode> {
    let items = read_batch(path)?;
    let progress: Arc<dyn RankingProgressNotifier> = if quiet {
        Arc::new(NoProgress)
    } else {
        Arc::new(ProgressReporter::new())
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;
    let outcomes = runtime.block_on(batch::rank_concurrently(
        RankBatchUseCase::new(rank),
        items,
        params,
        progress,
    ));
    // Workers still running past their timeout are abandoned.
    runtime.shutdown_timeout(Duration::from_secs(1));

    print_output(&ConsoleFormatter::format_batch(&outcomes, format));

    if outcomes.iter().all(BatchOutcome::is_success) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Read a JSON array of questions; items without an id get their position.
fn read_batch(path: &Path) -> Result<Vec<QuestionItem>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;
    let mut items: Vec<QuestionItem> = serde_json::from_str(&text)
        .with_context(|| format!("Invalid batch file {}", path.display()))?;

    for (i, item) in items.iter_mut().enumerate() {
        if item.id.is_empty() {
            item.id = format!("#{}", i + 1);
        }
    }
    Ok(items)
}

fn print_output(output: &str) {
    println!("{}", output.trim_end());
}
