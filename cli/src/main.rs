//! CLI entrypoint for aer-lab
//!
//! Wires the layers together and drives the batch loop. The driver owns
//! the evaluator and the collection of per-question voting records; the
//! solving pipeline only returns one record per question.

mod cli;
mod progress;
mod summary;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use cli::{Approach, Cli};
use progress::{ConsoleProgress, batch_bar};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aer_application::{
    DocumentRetriever, Evaluator, NoProgress, ProgressNotifier, SelfConsistencyUseCase,
    SingleShotUseCase,
};
use aer_domain::QuestionVotingRecord;
use aer_infrastructure::{
    ChatCompletionsGateway, ChatGatewaySettings, ConfigLoader, DatasetLoader, HeadRetriever,
    ResultsWriter, RunReport,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting aer-lab");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!("config error: {}", e))?
    };

    // === Dependency Injection ===
    let api_key = std::env::var(&config.model.api_key_env).ok();
    if api_key.is_none() {
        warn!(
            "No API key in ${}; requests may be rejected",
            config.model.api_key_env
        );
    }
    let settings = ChatGatewaySettings::new(&config.model.name, &config.model.base_url)
        .with_api_key(api_key)
        .with_timeout(Duration::from_secs(config.model.timeout_secs));
    let gateway = Arc::new(ChatCompletionsGateway::new(settings)?);
    let retriever = HeadRetriever::new(config.run.top_k);

    let mut items = DatasetLoader::new(&cli.docs_path, &cli.questions_path)
        .load()
        .context("failed to load dataset")?;
    if let Some(limit) = cli.limit.or(config.run.limit) {
        items.truncate(limit);
    }
    info!("Loaded {} questions", items.len());

    if !cli.quiet {
        println!(
            "Running {} on {} questions with model {}",
            cli.approach.as_str(),
            items.len(),
            config.model.name
        );
    }

    let bar = batch_bar(items.len(), cli.quiet);
    let console_progress = ConsoleProgress::new(bar.clone());
    let question_progress: &dyn ProgressNotifier = if cli.quiet || cli.verbose == 0 {
        &NoProgress
    } else {
        &console_progress
    };

    // The driver owns both the evaluator and the record collection
    let mut evaluator = Evaluator::new();
    let mut voting_records: Vec<QuestionVotingRecord> = Vec::new();

    match cli.approach {
        Approach::Consistency => {
            let use_case = SelfConsistencyUseCase::new(Arc::clone(&gateway), config.voting.clone())
                .with_max_concurrency(cli.concurrency.or(config.run.max_concurrency))
                .with_response_char_cap(config.run.response_char_cap);

            for item in &items {
                let documents = retriever.select(&item.event, &item.documents);
                let solved = use_case
                    .execute_with_progress(item, &documents, question_progress)
                    .await;
                evaluator.update(
                    &item.event_uuid,
                    &item.event,
                    &solved.final_answers,
                    &item.golden_answer(),
                );
                voting_records.push(solved.record);
                bar.inc(1);
            }
        }
        Approach::Single => {
            let use_case = SingleShotUseCase::new(Arc::clone(&gateway));

            for item in &items {
                let documents = retriever.select(&item.event, &item.documents);
                let outcome = use_case.execute(item, &documents).await;
                evaluator.update(
                    &item.event_uuid,
                    &item.event,
                    &outcome.answers,
                    &item.golden_answer(),
                );
                bar.inc(1);
            }
        }
    }
    bar.finish_and_clear();

    let run_summary = evaluator.summary();
    if !cli.quiet {
        summary::print_summary(&run_summary, cli.approach.as_str());
    }

    let results_path = cli
        .results
        .unwrap_or_else(|| config.run.results_path.clone().into());
    let report = RunReport::new(cli.approach.as_str(), run_summary)
        .with_voting_records(voting_records)
        .with_cases(
            evaluator.error_cases().to_vec(),
            evaluator.partial_cases().to_vec(),
        );
    ResultsWriter::write(&results_path, &report)?;

    if !cli.quiet {
        println!("Results saved to {}", results_path.display());
    }

    Ok(())
}
