use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::batch::scanner;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::conversions::StackToJxlPipeline;
use crate::image_pipeline::jxl::{EncodeConfig, StackWriter};

/// Batch-wide settings, fixed for the duration of one run.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// JPEG XL quality, 0-100
    pub quality: u8,
    /// Delete originals after successful conversion
    pub remove: bool,
    /// Worker count; 0 uses the host's available parallelism
    pub jobs: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            quality: 98,
            remove: false,
            jobs: 0,
        }
    }
}

/// One unit of work: a single source file plus the context its completion
/// log line carries.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub id: usize,
    pub source: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
}

pub struct BatchDriver {
    options: BatchOptions,
}

impl BatchDriver {
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Converts every recognized file under `root`.
    ///
    /// Each file runs as an independent job on the pool; a job failure is
    /// logged, counted, and advances the progress bar without touching other
    /// in-flight jobs. The pool is joined before returning, so every
    /// submitted job has completed by the time the summary comes back.
    pub fn run(&self, root: &Path) -> anyhow::Result<BatchSummary> {
        let files = scanner::discover_files(root)
            .with_context(|| format!("scanning {}", root.display()))?;
        info!("Found {} files", files.len());

        let jobs: Vec<ConversionJob> = files
            .into_iter()
            .enumerate()
            .map(|(id, source)| ConversionJob { id, source })
            .collect();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.jobs)
            .build()
            .context("building worker pool")?;

        let config = EncodeConfig::builder().quality(self.options.quality).build();
        let pipeline = StackToJxlPipeline::new(config);
        let progress = ProgressBar::new(jobs.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files ({eta})")
                .expect("static progress template")
                .progress_chars("#>-"),
        );
        let failed = AtomicUsize::new(0);

        info!("Starting");
        pool.install(|| {
            jobs.par_iter().for_each(|job| {
                progress.suspend(|| info!(job = job.id, "Converting {}", job.source.display()));
                let result = run_job(&pipeline, job, self.options.remove);
                if complete_job(&progress, job, &result) {
                    failed.fetch_add(1, Ordering::Relaxed);
                }
            });
        });
        progress.finish();

        let failed = failed.into_inner();
        let summary = BatchSummary {
            total: jobs.len(),
            converted: jobs.len() - failed,
            failed,
        };
        if summary.failed > 0 {
            warn!(
                "{} of {} conversions failed; failed originals were kept",
                summary.failed, summary.total
            );
        } else {
            info!("Converted {} files", summary.converted);
        }
        Ok(summary)
    }
}

/// Logs one job's outcome and advances the bar. The log line is emitted
/// inside [`ProgressBar::suspend`] so it never lands mid-redraw on the same
/// stream the bar is drawing to. Returns `true` when the job failed.
fn complete_job(progress: &ProgressBar, job: &ConversionJob, result: &Result<PathBuf>) -> bool {
    let failed = match result {
        Ok(output) => {
            progress.suspend(|| {
                info!(
                    job = job.id,
                    output = %output.display(),
                    "Finished {}",
                    job.source.display()
                );
            });
            false
        }
        Err(e) => {
            progress.suspend(|| {
                error!(job = job.id, "Failed {}: {}", job.source.display(), e);
            });
            true
        }
    };
    progress.inc(1);
    failed
}

/// Runs one job to completion: decode, encode, then optionally delete the
/// source. The delete only ever happens after a fully successful write, and
/// never touches a `.dax` sidecar.
fn run_job<W: StackWriter>(
    pipeline: &StackToJxlPipeline<W>,
    job: &ConversionJob,
    remove: bool,
) -> Result<PathBuf> {
    let output = pipeline.convert_file(&job.source)?;
    if remove {
        fs::remove_file(&job.source)?;
    }
    Ok(output)
}
