//! Compile Stats use case
//!
//! Orchestrates a full statistics run: list discussions, resolve their
//! first revisions, fetch text in batches, then analyze.

use crate::config::RunParams;
use crate::ports::discussion_index::{DiscussionIndexPort, IndexError, IndexQuery, StartDate};
use crate::ports::page_content::{ContentError, PageContentPort};
use crate::ports::progress::{NoProgress, Phase, ProgressNotifier};
use crate::use_cases::analyze_discussions::{AnalyzeDiscussionsUseCase, SkippedDiscussion};
use afdstats_domain::wikitext::compact_date;
use afdstats_domain::{
    DiscussionAnalyzer, MatchStats, NoVoteEntry, Participant, StatsAggregate, VoteRecord,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while compiling statistics
#[derive(Error, Debug)]
pub enum CompileStatsError {
    #[error("No AfDs found")]
    NoDiscussions,

    #[error("Unable to list discussions: {0}")]
    Index(#[from] IndexError),

    #[error("Unable to fetch page data: {0}")]
    Content(#[from] ContentError),
}

/// Input for the CompileStats use case
#[derive(Debug, Clone)]
pub struct CompileStatsInput {
    pub participant: Participant,
    pub start_date: Option<StartDate>,
    /// Only discussions the participant nominated
    pub nominations_only: bool,
    /// Count votes whose stance couldn't be classified
    pub include_undetermined: bool,
}

impl CompileStatsInput {
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            start_date: None,
            nominations_only: false,
            include_undetermined: false,
        }
    }

    pub fn with_start_date(mut self, start_date: Option<StartDate>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn with_nominations_only(mut self, nominations_only: bool) -> Self {
        self.nominations_only = nominations_only;
        self
    }

    pub fn with_undetermined(mut self, include: bool) -> Self {
        self.include_undetermined = include;
        self
    }
}

/// Everything a statistics run produced
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub participant: Participant,
    pub start_date: Option<StartDate>,
    pub nominations_only: bool,
    pub include_undetermined: bool,
    pub max_results: usize,
    /// Distinct discussions the participant edited
    pub total_candidates: usize,
    /// Discussions considered after the result cap
    pub analyzed: usize,
    /// One record per discussion with an effective vote, newest first
    pub records: Vec<VoteRecord>,
    pub no_votes: Vec<NoVoteEntry>,
    pub skipped: Vec<SkippedDiscussion>,
    pub stats: StatsAggregate,
    pub matches: MatchStats,
    /// `YYYYMMDD` to continue from with the next page of results
    pub next_start_date: Option<String>,
}

impl StatsReport {
    /// Whether the result cap cut off older discussions
    pub fn truncated(&self) -> bool {
        self.total_candidates > self.analyzed
    }
}

/// Use case for compiling a participant's statistics
pub struct CompileStatsUseCase<I, C>
where
    I: DiscussionIndexPort + 'static,
    C: PageContentPort + 'static,
{
    index: Arc<I>,
    content: Arc<C>,
    params: RunParams,
}

impl<I, C> CompileStatsUseCase<I, C>
where
    I: DiscussionIndexPort + 'static,
    C: PageContentPort + 'static,
{
    pub fn new(index: Arc<I>, content: Arc<C>) -> Self {
        Self {
            index,
            content,
            params: RunParams::default(),
        }
    }

    pub fn with_params(mut self, params: RunParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: CompileStatsInput) -> Result<StatsReport, CompileStatsError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: CompileStatsInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<StatsReport, CompileStatsError> {
        info!(
            "Compiling AfD stats for {}{}",
            input.participant.name(),
            input
                .start_date
                .map(|d| format!(" from {} and earlier", d.display()))
                .unwrap_or_default()
        );

        // Phase 1: Listing
        progress.on_phase_start(&Phase::Listing, 1);
        let query = IndexQuery {
            participant: input.participant.clone(),
            nominations_only: input.nominations_only,
            start_date: input.start_date,
        };
        let mut pages = self.index.list_pages(&query).await?;
        if pages.is_empty() {
            progress.on_phase_complete(&Phase::Listing);
            return Err(CompileStatsError::NoDiscussions);
        }

        let total_candidates = pages.len();
        pages.truncate(self.params.max_results);
        info!(
            "{} discussions found, analyzing {}",
            total_candidates,
            pages.len()
        );

        let candidates = self.index.first_revisions(&pages).await?;
        progress.on_task_complete(&Phase::Listing, "first revisions", true);
        progress.on_phase_complete(&Phase::Listing);

        let resolved: HashSet<&str> = candidates.iter().map(|c| c.page.as_str()).collect();
        let unresolved: Vec<SkippedDiscussion> = pages
            .iter()
            .filter(|page| !resolved.contains(page.as_str()))
            .map(|page| {
                warn!("Skipping {}: first revision unavailable", page);
                SkippedDiscussion {
                    page: page.clone(),
                    reason: "first revision unavailable".to_string(),
                }
            })
            .collect();

        // Phase 2: Fetching
        let resolved_pages: Vec<String> = candidates.iter().map(|c| c.page.clone()).collect();
        let texts = self.fetch_texts(&resolved_pages, progress).await?;

        // Phase 3: Analyzing
        let analyzer = DiscussionAnalyzer::new(input.participant.clone())
            .with_undetermined(input.include_undetermined);
        let mut output =
            AnalyzeDiscussionsUseCase::new(analyzer).execute_with_progress(&candidates, &texts, progress);

        let mut skipped = unresolved;
        skipped.append(&mut output.skipped);

        let next_start_date = output
            .records
            .last()
            .and_then(|record| compact_date(&record.vote_date));

        info!(
            "{} votes, {} without a vote, {} skipped",
            output.records.len(),
            output.no_votes.len(),
            skipped.len()
        );

        Ok(StatsReport {
            participant: input.participant,
            start_date: input.start_date,
            nominations_only: input.nominations_only,
            include_undetermined: input.include_undetermined,
            max_results: self.params.max_results,
            total_candidates,
            analyzed: pages.len(),
            records: output.records,
            no_votes: output.no_votes,
            skipped,
            stats: output.aggregator.stats,
            matches: output.aggregator.matches,
            next_start_date,
        })
    }

    /// Fetch page text in batches; a failed batch aborts the run
    async fn fetch_texts(
        &self,
        pages: &[String],
        progress: &dyn ProgressNotifier,
    ) -> Result<HashMap<String, String>, CompileStatsError> {
        let batches: Vec<&[String]> = pages.chunks(self.params.batch_size).collect();
        progress.on_phase_start(&Phase::Fetching, batches.len());

        let mut texts = HashMap::with_capacity(pages.len());
        for (i, batch) in batches.iter().enumerate() {
            let label = format!("batch {}/{}", i + 1, batches.len());
            match self.content.fetch(batch).await {
                Ok(fetched) => {
                    debug!("{}: {} of {} pages", label, fetched.len(), batch.len());
                    texts.extend(fetched);
                    progress.on_task_complete(&Phase::Fetching, &label, true);
                }
                Err(e) => {
                    warn!("Fetching {} failed: {}", label, e);
                    progress.on_task_complete(&Phase::Fetching, &label, false);
                    progress.on_phase_complete(&Phase::Fetching);
                    return Err(e.into());
                }
            }
        }

        progress.on_phase_complete(&Phase::Fetching);
        Ok(texts)
    }
}
