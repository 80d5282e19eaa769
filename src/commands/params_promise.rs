//! Await `params` in route handlers and server pages.
//!
//! Newer Next.js hands dynamic route segments to handlers as a promise, so
//!
//! ```text
//! export async function GET(req: NextRequest, { params }: { params: { id: string } }) {
//!   const groupId = params.id;
//! ```
//!
//! becomes
//!
//! ```text
//! export async function GET(req: NextRequest, { params }: { params: Promise<{ id: string }> }) {
//!   const { id: groupId } = await params;
//! ```

use super::RunContext;
use crate::config::ParamsPromiseConfig;
use crate::io::FileWalker;
use crate::rewrite::{self, RunSummary};
use anyhow::{Context, Result};
use colored::*;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static PARAMS_SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\s*params\s*\}\s*:\s*\{\s*params\s*:\s*\{(?P<fields>[^{}]*)\}\s*\}").unwrap()
});

static PARAM_ACCESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"const\s+(?P<var>\w+)\s*=\s*\bparams\.(?P<key>\w+)\s*;").unwrap()
});

static PARAMS_DESTRUCTURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"const\s*\{(?P<names>[^{}]*)\}\s*=\s*\bparams\s*;").unwrap());

static PARAM_READ: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bparams\.(?P<key>\w+)").unwrap());

const AWAITED_MARKER: &str = "params: Promise<";
const CLIENT_HOOK: &str = "useParams(";

/// Apply the migration to one file's text.
///
/// Property reads are only rewritten in files whose handler signature takes a
/// promised `params`; client components reading `useParams()` are left alone.
pub fn rewrite_handler(text: &str) -> Cow<'_, str> {
    let signed = PARAMS_SIGNATURE.replace_all(text, "{ params }: { params: Promise<{${fields}}> }");

    if !signed.contains(AWAITED_MARKER) || signed.contains(CLIENT_HOOK) {
        return signed;
    }

    let accessed = match PARAM_ACCESS.replace_all(&signed, "const { ${key}: ${var} } = await params;") {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    };
    let current = accessed.map(Cow::Owned).unwrap_or(signed);

    let destructured = match PARAMS_DESTRUCTURE.replace_all(&current, "const {${names}} = await params;") {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    };
    destructured.map(Cow::Owned).unwrap_or(current)
}

/// Lines (1-based) of a migrated handler that still read `params.<key>`
/// directly. Those reads now hit the promise and need a manual `await`.
pub fn unawaited_reads(text: &str) -> Vec<(usize, String)> {
    if !text.contains(AWAITED_MARKER) || text.contains(CLIENT_HOOK) {
        return Vec::new();
    }
    text.lines()
        .enumerate()
        .flat_map(|(i, line)| {
            PARAM_READ
                .captures_iter(line)
                .map(move |c| (i + 1, c["key"].to_string()))
        })
        .collect()
}

/// Walk the app directory and migrate every handler file.
///
/// A file that cannot be read or written is reported and skipped; the walk
/// goes on.
pub fn migrate_params(ctx: &RunContext, config: &ParamsPromiseConfig) -> Result<RunSummary> {
    let root = ctx.resolve(&config.root);
    let files = FileWalker::new(root.clone())
        .with_file_names(config.file_names.clone())
        .with_excluded_dirs(config.excluded_dirs.clone())
        .walk()
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    log::info!("checking {} handler files under {}", files.len(), root.display());

    let mut summary = RunSummary::default();
    for path in &files {
        let migrate = |text: &str| {
            let migrated = rewrite_handler(text).into_owned();
            for (line, key) in unawaited_reads(&migrated) {
                log::warn!(
                    "{}:{}: `params.{}` is not awaited; fix by hand",
                    ctx.display_path(path),
                    line,
                    key
                );
            }
            Ok(migrated)
        };
        match rewrite::rewrite_file(path, ctx.dry_run, migrate) {
            Ok(outcome) => {
                if outcome == rewrite::FileOutcome::Modified {
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
