//! Normalize the `category:` field of scene catalog entries.
//!
//! Scene files were written by hand and by generators, so the same category
//! shows up as `SceneCategory.HUMOR`, `'HUMOR' as SceneCategory`,
//! `"HUMOR" as const` or `'HUMOR'`. The director only reads plain strings.

use super::RunContext;
use crate::config::ScenesConfig;
use crate::errors::Result as CrateResult;
use crate::io::FileWalker;
use crate::rewrite::{self, FileOutcome, RunSummary, Substitution};
use anyhow::{Context, Result};
use colored::*;

pub const SCENE_CATEGORIES: [&str; 10] = [
    "COTIDIANO",
    "HUMOR",
    "DEBATE",
    "TENSION",
    "ROMANCE",
    "VULNERABILIDAD",
    "DESCUBRIMIENTO",
    "RECONCILIACION",
    "PROACTIVIDAD",
    "META",
];

pub fn scene_passes(categories: &[String]) -> CrateResult<Vec<Substitution>> {
    let alternation = categories
        .iter()
        .map(|c| regex::escape(c))
        .collect::<Vec<_>>()
        .join("|");

    Ok(vec![
        Substitution::new(
            "enum-member",
            &format!(r"category\s*:\s*SceneCategory\.(?P<cat>{alternation})\b"),
            r#"category: "${cat}""#,
        )?,
        Substitution::new(
            "cast",
            &format!(
                r#"category\s*:\s*['"](?P<cat>{alternation})['"]\s+as\s+[A-Za-z_$][\w$.]*"#
            ),
            r#"category: "${cat}""#,
        )?,
        Substitution::new(
            "single-quoted",
            &format!(r"category\s*:\s*'(?P<cat>{alternation})'"),
            r#"category: "${cat}""#,
        )?,
    ])
}

pub fn clean_scenes(ctx: &RunContext, config: &ScenesConfig) -> Result<RunSummary> {
    let passes = scene_passes(&config.categories).context("Failed to build category patterns")?;
    let root = ctx.resolve(&config.root);
    let files = FileWalker::new(root.clone())
        .with_extensions(vec!["ts".to_string()])
        .walk()
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    let mut summary = RunSummary::default();
    for path in &files {
        let result = rewrite::rewrite_file(path, ctx.dry_run, |text| {
            Ok(rewrite::apply_all(text, &passes).into_owned())
        });
        match result {
            Ok(outcome) => {
                if outcome == FileOutcome::Modified {
                    ctx.report_modified(path);
                }
                summary.record(outcome);
            }
            Err(e) => {
                eprintln!("{} {}: {}", "Skipping".yellow(), ctx.display_path(path), e);
                summary.record_failure();
            }
        }
    }

    Ok(summary)
}
