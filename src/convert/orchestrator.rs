use std::{fmt, path::PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    config::conversion::ConversionConfig,
    convert::{
        freshness::{self, Freshness},
        job::{ConversionJob, SourceItem},
        output::write_atomic,
    },
    foundation::{
        core::TargetSize,
        error::{DmdError, DmdResult},
    },
};

/// Scheduling controls for a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Run jobs on a rayon pool instead of one after another.
    pub parallel: bool,
    /// Worker count for the pool; rayon's default when `None`.
    pub threads: Option<usize>,
}

/// A job that was attempted and did not produce output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobFailure {
    /// Source file of the failed job.
    pub source: PathBuf,
    /// Requested size of the failed job.
    pub size: TargetSize,
    /// Rendered error chain.
    pub error: String,
}

/// Batch-level result: how many jobs were skipped, converted or failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Jobs enumerated (items × sizes).
    pub total: u64,
    /// Jobs whose output was already fresh.
    pub skipped: u64,
    /// Jobs that wrote output.
    pub succeeded: u64,
    /// Jobs that failed.
    pub failed: u64,
    /// One entry per failed job, in enumeration order.
    pub failures: Vec<JobFailure>,
}

impl ConversionSummary {
    /// Jobs that actually ran a conversion.
    pub fn attempted(&self) -> u64 {
        self.succeeded + self.failed
    }

    fn record(&mut self, outcome: JobOutcome) {
        self.total += 1;
        match outcome {
            JobOutcome::Skipped => self.skipped += 1,
            JobOutcome::Converted => self.succeeded += 1,
            JobOutcome::Failed(failure) => {
                self.failed += 1;
                self.failures.push(failure);
            }
        }
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} jobs: {} attempted, {} skipped, {} succeeded, {} failed",
            self.total,
            self.attempted(),
            self.skipped,
            self.succeeded,
            self.failed
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum JobOutcome {
    Skipped,
    Converted,
    Failed(JobFailure),
}

/// Drives every `(item, size)` job through the freshness gate and the matching transform.
///
/// Holds nothing but a borrowed config and scheduling options; jobs share no mutable state.
#[derive(Clone, Debug)]
pub struct ConversionOrchestrator<'a> {
    config: &'a ConversionConfig,
    options: RunOptions,
}

impl<'a> ConversionOrchestrator<'a> {
    /// Sequential orchestrator over `config`.
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            options: RunOptions::default(),
        }
    }

    /// Replace the scheduling options.
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Convert every item at every configured size.
    ///
    /// Job failures are logged and counted, never returned. The only error is an invalid
    /// worker configuration.
    pub fn run(&self, items: &[SourceItem]) -> DmdResult<ConversionSummary> {
        let jobs: Vec<(&SourceItem, TargetSize)> = items
            .iter()
            .flat_map(|item| self.config.target_sizes.iter().map(move |s| (item, *s)))
            .collect();
        tracing::info!(
            items = items.len(),
            sizes = self.config.target_sizes.len(),
            jobs = jobs.len(),
            parallel = self.options.parallel,
            "starting conversion"
        );

        let outcomes: Vec<JobOutcome> = if self.options.parallel {
            let pool = build_thread_pool(self.options.threads)?;
            pool.install(|| {
                jobs.par_iter()
                    .map(|(item, size)| self.run_job(item, *size))
                    .collect()
            })
        } else {
            jobs.iter()
                .map(|(item, size)| self.run_job(item, *size))
                .collect()
        };

        let mut summary = ConversionSummary::default();
        for outcome in outcomes {
            summary.record(outcome);
        }
        tracing::info!(
            total = summary.total,
            skipped = summary.skipped,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "conversion finished"
        );
        Ok(summary)
    }

    #[tracing::instrument(skip_all, fields(source = %item.path.display(), size = %size))]
    fn run_job(&self, item: &SourceItem, size: TargetSize) -> JobOutcome {
        match self.try_job(item, size) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(%err, "conversion failed");
                JobOutcome::Failed(JobFailure {
                    source: item.path.clone(),
                    size,
                    error: err.to_string(),
                })
            }
        }
    }

    fn try_job(&self, item: &SourceItem, size: TargetSize) -> DmdResult<JobOutcome> {
        let job = ConversionJob::new(item, size, self.config)?;

        let freshness = freshness::check(&item.path, &job.output_path);
        if freshness == Freshness::Fresh {
            tracing::debug!(output = %job.output_path.display(), "output up to date; skipping");
            return Ok(JobOutcome::Skipped);
        }

        let transformer = job.kind.transformer();
        tracing::info!(
            output = %job.output_path.display(),
            pipeline = transformer.name(),
            ?freshness,
            "converting"
        );

        let bytes = std::fs::read(&item.path)
            .map_err(|e| DmdError::io(format!("read source '{}'", item.path.display()), e))?;
        let encoded = transformer.transform(&bytes, size, self.config)?;
        write_atomic(&job.output_path, &encoded)?;
        Ok(JobOutcome::Converted)
    }
}

fn build_thread_pool(threads: Option<usize>) -> DmdResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(DmdError::validation("'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    Ok(builder.build().context("build rayon thread pool")?)
}

#[cfg(test)]
#[path = "../../tests/unit/convert/orchestrator.rs"]
mod tests;
