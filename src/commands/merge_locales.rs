//! Fold translation additions into the `next-intl` message catalogs.

use super::RunContext;
use crate::config::LocaleMerge;
use crate::errors::{Error, Result as CrateResult};
use crate::io;
use crate::rewrite::{self, FileOutcome, RunSummary};
use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Merge `source` into `target`. Objects merge key by key; anything else from
/// the source replaces what the target had.
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}

fn namespace_slot<'a>(root: &'a mut Value, namespace: &str) -> CrateResult<&'a mut Value> {
    let mut slot = root;
    for segment in namespace.split('.').filter(|s| !s.is_empty()) {
        let map = match slot {
            Value::Object(map) => map,
            _ => {
                return Err(Error::Validation(format!(
                    "namespace `{}` passes through a non-object at `{}`",
                    namespace, segment
                )))
            }
        };
        slot = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    Ok(slot)
}

/// Merge one catalog text into another and render the result the way the
/// catalogs are stored: two-space indent, trailing newline.
pub fn merge_documents(
    target_text: &str,
    source_text: &str,
    namespace: Option<&str>,
) -> CrateResult<String> {
    let mut target: Value = serde_json::from_str(target_text)?;
    let source: Value = serde_json::from_str(source_text)?;

    match namespace {
        Some(ns) => deep_merge(namespace_slot(&mut target, ns)?, source),
        None => deep_merge(&mut target, source),
    }

    let mut rendered = serde_json::to_string_pretty(&target)?;
    rendered.push('\n');
    Ok(rendered)
}

pub fn merge_locales(ctx: &RunContext, merges: &[LocaleMerge]) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for merge in merges {
        let target = ctx.resolve(&merge.target);
        let source = ctx.resolve(&merge.source);

        let source_text = io::read_file(&source)
            .with_context(|| format!("Failed to read additions {}", source.display()))?;

        let outcome = rewrite::rewrite_file(&target, ctx.dry_run, |text| {
            merge_documents(text, &source_text, merge.namespace.as_deref())
        })
        .with_context(|| {
            format!(
                "Failed to merge {} into {}",
                source.display(),
                target.display()
            )
        })?;

        if outcome == FileOutcome::Modified {
            ctx.report_modified(&target);
        }
        summary.record(outcome);
    }

    Ok(summary)
}
