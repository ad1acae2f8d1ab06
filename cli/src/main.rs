//! CLI entrypoint for afdstats
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use afdstats_application::{
    CompileStatsError, CompileStatsInput, CompileStatsUseCase, StartDate,
};
use afdstats_domain::Participant;
use afdstats_infrastructure::{
    ConfigLoader, FileConfig, MediaWikiClient, MediaWikiDiscussionIndex, MediaWikiPageContent,
};
use afdstats_presentation::{Cli, ProgressReporter, SimpleProgress, formatter_for};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level (--dev implies debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_level()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // Validate input
    let participant = match cli.name.as_deref().map(Participant::new) {
        Some(Ok(participant)) => participant,
        _ => bail!("No username entered."),
    };
    let participant = match cli.altname.as_deref() {
        Some(alternate) => participant.with_alternate(alternate),
        None => participant,
    };

    let start_date = match cli.startdate.as_deref() {
        Some(raw) => {
            let parsed = StartDate::parse(raw);
            if parsed.is_none() {
                warn!("Ignoring start date {:?}; expected YYYYMMDD", raw);
            }
            parsed
        }
        None => None,
    };

    let mut params = config.run_params();
    if let Some(max) = cli.max {
        params = params.with_max_results(max);
    }

    let input = CompileStatsInput::new(participant)
        .with_start_date(start_date)
        .with_nominations_only(cli.nomsonly)
        .with_undetermined(cli.undetermined || config.analysis.include_undetermined);

    info!("Starting afdstats for {}", input.participant.name());

    // === Dependency Injection ===
    let client = Arc::new(
        MediaWikiClient::new(&config.wiki.client_settings())
            .context("Failed to create HTTP client")?,
    );
    let index = Arc::new(
        MediaWikiDiscussionIndex::new(Arc::clone(&client))
            .with_concurrency(config.wiki.concurrency)
            .with_max_contributions(config.wiki.max_contributions),
    );
    let content = Arc::new(MediaWikiPageContent::new(client));
    let use_case = CompileStatsUseCase::new(index, content).with_params(params);

    // Execute with or without progress reporting
    let show_progress = !cli.quiet && config.output.show_progress;
    let result = if !show_progress {
        use_case.execute(input).await
    } else if std::io::stderr().is_terminal() {
        use_case
            .execute_with_progress(input, &ProgressReporter::new())
            .await
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await
    };

    let report = match result {
        Ok(report) => report,
        Err(CompileStatsError::NoDiscussions) => bail!(
            "No AfDs found. This user may not exist. Note that if the user's username \
             does not appear in the wikitext of their signature, you may need to specify \
             an alternate name."
        ),
        Err(e) => return Err(e.into()),
    };

    // Output results
    let format = cli
        .output
        .map(afdstats_domain::OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    println!("{}", formatter_for(format).format(&report));

    Ok(())
}

/// Load and validate configuration according to CLI flags
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config
        .validate()
        .context("Invalid configuration")?;
    Ok(config)
}
