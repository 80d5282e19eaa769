use super::RunContext;
use crate::config::SpliceJob;
use crate::io;
use crate::rewrite::{FileOutcome, RunSummary};
use crate::splice::{splice, Anchor};
use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

/// Jobs grouped by target file, in the order targets first appear.
fn group_by_target(jobs: &[SpliceJob]) -> Vec<(PathBuf, Vec<&SpliceJob>)> {
    let mut groups: Vec<(PathBuf, Vec<&SpliceJob>)> = Vec::new();
    for job in jobs {
        match groups.iter_mut().find(|(target, _)| *target == job.target) {
            Some((_, group)) => group.push(job),
            None => groups.push((job.target.clone(), vec![job])),
        }
    }
    groups
}

/// Splice generated fragments into their target files.
///
/// All jobs for one target are applied in memory before it is written, so an
/// anchor miss leaves that target and every later one untouched. Targets
/// written before the miss stay written.
pub fn splice_components(ctx: &RunContext, jobs: &[SpliceJob]) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (target, group) in group_by_target(jobs) {
        let target = ctx.resolve(&target);
        let original = io::read_file(&target)
            .with_context(|| format!("Failed to read splice target {}", target.display()))?;

        let mut text = original.clone();
        for job in group {
            let fragment_path = ctx.resolve(&job.fragment);
            let fragment = io::read_file(&fragment_path)
                .with_context(|| format!("Failed to read fragment {}", fragment_path.display()))?;

            let anchor = Anchor::new(job.comment.clone(), job.function.clone());
            text = match splice(&text, &anchor, &fragment, job.mode) {
                Ok(spliced) => spliced,
                Err(e) => {
                    if e.is_anchor_miss() {
                        eprintln!(
                            "{} {} in {}",
                            "Could not find".red().bold(),
                            job.function,
                            ctx.display_path(&target)
                        );
                    }
                    return Err(e).with_context(|| {
                        format!("Failed to splice {} into {}", job.function, target.display())
                    });
                }
            };
            log::debug!("spliced {} ({:?})", job.function, job.mode);
        }

        let outcome = if text == original {
            FileOutcome::Unchanged
        } else {
            if !ctx.dry_run {
                io::write_file(&target, &text)?;
            }
            ctx.report_modified(&target);
            FileOutcome::Modified
        };
        summary.record(outcome);
    }

    Ok(summary)
}
