use crate::config::pool_file::{parse_dual_pool, parse_single_pool};
use crate::core::assigner::ReviewAssigner;
use crate::core::{ConfigProvider, PathKind, Storage};
use crate::domain::model::{Assignment, AssignmentMode, OutputFormat};
use crate::report::console::print_assignments;
use crate::report::exporter_for;
use crate::report::naming::{timestamped_path, FILENAME_TIMESTAMP_FORMAT};
use crate::utils::error::Result;
use chrono::{Local, NaiveDateTime};

#[derive(Debug, Clone)]
pub struct RosterOutcome {
    pub assignment: Assignment,
    /// Report files written, in format order.
    pub written: Vec<String>,
}

/// Load pools → assign → render, driven by a `ConfigProvider`.
pub struct RosterEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RosterEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub async fn run(&self) -> Result<RosterOutcome> {
        self.run_at(Local::now().naive_local()).await
    }

    /// Same as [`run`](Self::run) with an explicit report timestamp.
    pub async fn run_at(&self, generated_at: NaiveDateTime) -> Result<RosterOutcome> {
        let assignment = self.assign().await?;

        let (min_load, max_load) = assignment.load_range().unwrap_or((0, 0));
        tracing::info!(
            "Assigned {} reviewers to {} reviewees ({} tasks, load {}..={})",
            assignment.len(),
            assignment.covered_reviewee_ids().len(),
            assignment.total_tasks(),
            min_load,
            max_load
        );

        if self.config.dry_run() {
            tracing::info!("Dry run: skipping {} output format(s)", self.config.formats().len());
            return Ok(RosterOutcome {
                assignment,
                written: Vec::new(),
            });
        }

        let written = self.render(&assignment, generated_at).await?;
        Ok(RosterOutcome {
            assignment,
            written,
        })
    }

    async fn assign(&self) -> Result<Assignment> {
        let mode = self.config.mode();
        let pools_path = self.config.pools_path();
        tracing::info!("Loading {:?} pool file: {}", mode, pools_path);
        let bytes = self.storage.read_file(pools_path).await?;

        let mut assigner = match self.config.seed() {
            Some(seed) => {
                tracing::debug!("Using seeded shuffle ({})", seed);
                ReviewAssigner::seeded(seed)
            }
            None => ReviewAssigner::from_os_rng(),
        };

        match mode {
            AssignmentMode::Single => {
                let people = parse_single_pool(&bytes)?;
                tracing::debug!("Single pool has {} people", people.len());
                assigner.assign_single_pool(&people)
            }
            AssignmentMode::Dual => {
                let pools = parse_dual_pool(&bytes)?;
                tracing::debug!(
                    "poolA has {} people, poolB has {} people",
                    pools.pool_a.len(),
                    pools.pool_b.len()
                );
                assigner.assign_dual_pool(&pools.pool_a, &pools.pool_b)
            }
        }
    }

    async fn render(
        &self,
        assignment: &Assignment,
        generated_at: NaiveDateTime,
    ) -> Result<Vec<String>> {
        let timestamp = generated_at.format(FILENAME_TIMESTAMP_FORMAT).to_string();
        let mut formats: Vec<OutputFormat> = Vec::new();
        for format in self.config.formats() {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }

        let output_path = self.config.output_path();
        let output_kind = self.storage.path_kind(output_path).await;
        tracing::debug!("Output path {} is {:?}", output_path, output_kind);

        let mut written = Vec::new();
        for format in formats {
            let Some(exporter) = exporter_for(format) else {
                print_assignments(assignment);
                continue;
            };

            let path = timestamped_path(
                output_path,
                output_kind,
                &timestamp,
                exporter.extension(),
                exporter.default_prefix(),
            );
            let path = path.to_string_lossy().into_owned();
            let data = exporter.render(assignment, generated_at)?;

            tracing::debug!("Writing {} report ({} bytes) to {}", format, data.len(), path);
            self.storage.write_file(&path, &data).await?;
            tracing::info!("{} report saved to {}", format, path);
            written.push(path);
        }

        Ok(written)
    }
}
