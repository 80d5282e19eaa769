//! Backfill `getUserStats` mocks after the stats shape grew.
//!
//! The reputation tests stub the stats call with an object literal. Every
//! literal must carry the full field list or the badge checks read `undefined`.

use super::RunContext;
use crate::config::StatsMockConfig;
use crate::errors::Result as CrateResult;
use crate::rewrite::{self, FileOutcome, RunSummary};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// The stats object in declared order, with the value a missing field gets.
pub const STAT_FIELDS: [(&str, &str); 25] = [
    ("aisCreated", "0"),
    ("messagesSent", "0"),
    ("voiceChats", "0"),
    ("multimodalChats", "0"),
    ("worldsCreated", "0"),
    ("behaviorsConfigured", "0"),
    ("importantEvents", "0"),
    ("sharedAIs", "0"),
    ("totalImports", "0"),
    ("totalLikes", "0"),
    ("currentStreak", "0"),
    ("isEarlyAdopter", "false"),
    ("postCount", "0"),
    ("commentCount", "0"),
    ("receivedUpvotes", "0"),
    ("acceptedAnswers", "0"),
    ("createdCommunities", "0"),
    ("researchProjects", "0"),
    ("researchContributions", "0"),
    ("publishedThemes", "0"),
    ("maxPostUpvotes", "0"),
    ("maxThemeDownloads", "0"),
    ("isModerator", "false"),
    ("awardsGiven", "0"),
    ("eventsWon", "0"),
];

const DEFAULT_ENTRY_INDENT: &str = "      ";
const DEFAULT_CLOSING_INDENT: &str = "    ";

static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(?P<key>[A-Za-z_$][\w$]*)\s*:\s*(?P<value>[^,\n]+?)\s*(?:,|$)").unwrap()
});

fn mock_literal(method: &str) -> CrateResult<Regex> {
    let pattern = format!(
        r#"(?P<head>{}['"]\)\s*\.mockResolvedValue(?:Once)?\(\{{)(?P<body>[^{{}}]*)\}}"#,
        regex::escape(method)
    );
    Ok(Regex::new(&pattern)?)
}

/// Rebuild every `<method>` mock literal in `text` with the full field list.
pub fn backfill(text: &str, method: &str) -> CrateResult<String> {
    let re = mock_literal(method)?;
    let out = re.replace_all(text, |caps: &Captures| {
        format!("{}{}}}", &caps["head"], rebuild_body(&caps["body"]))
    });
    Ok(out.into_owned())
}

/// One `key: value` pair of a mock literal and the comments that travel with it.
struct Entry {
    key: String,
    value: String,
    leading: Vec<String>,
    trailing: Option<String>,
}

/// Split a line into its code and the comment that ends it, ignoring
/// comment markers inside string literals.
fn split_comment(line: &str) -> (&str, Option<&str>) {
    let mut quote: Option<char> = None;
    let mut prev = '\0';
    for (i, ch) in line.char_indices() {
        match quote {
            Some(q) => {
                if ch == q && prev != '\\' {
                    quote = None;
                }
            }
            None => match ch {
                '\'' | '"' | '`' => quote = Some(ch),
                '/' if line[i + 1..].starts_with('/') || line[i + 1..].starts_with('*') => {
                    return (&line[..i], Some(line[i..].trim_end()));
                }
                _ => {}
            },
        }
        prev = ch;
    }
    (line, None)
}

/// Parse the entries of a literal body. Comments are never read as entries:
/// a trailing comment stays on its entry, a comment on its own line moves
/// with the entry below it. Comments with no entry below are returned last.
fn parse_entries(body: &str) -> (Vec<Entry>, Vec<String>) {
    let mut entries = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut in_block = false;

    for line in body.lines() {
        if in_block {
            pending.push(line.trim().to_string());
            in_block = !line.contains("*/");
            continue;
        }

        let (code, comment) = split_comment(line);
        if let Some(c) = comment {
            in_block = c.starts_with("/*") && !c.contains("*/");
        }

        let mut found: Vec<Entry> = ENTRY
            .captures_iter(code)
            .map(|c| Entry {
                key: c["key"].to_string(),
                value: c["value"].trim().to_string(),
                leading: Vec::new(),
                trailing: None,
            })
            .collect();

        if found.is_empty() {
            if let Some(c) = comment {
                pending.push(c.to_string());
            }
            continue;
        }
        found[0].leading = std::mem::take(&mut pending);
        if let Some(last) = found.last_mut() {
            last.trailing = comment.map(str::to_string);
        }
        entries.append(&mut found);
    }

    (entries, pending)
}

fn push_entry(out: &mut String, indent: &str, key: &str, value: &str, entry: Option<&Entry>) {
    if let Some(entry) = entry {
        for comment in &entry.leading {
            out.push_str(&format!("{indent}{comment}\n"));
        }
    }
    out.push_str(&format!("{indent}{key}: {value},"));
    if let Some(comment) = entry.and_then(|e| e.trailing.as_deref()) {
        out.push(' ');
        out.push_str(comment);
    }
    out.push('\n');
}

fn rebuild_body(body: &str) -> String {
    let (entries, dangling) = parse_entries(body);
    let entry_for = |key: &str| entries.iter().find(|e| e.key == key);

    let indent = entry_indent(body);
    let mut rebuilt = String::from("\n");
    for (field, default) in STAT_FIELDS.iter() {
        let entry = entry_for(field);
        let value = entry.map(|e| e.value.as_str()).unwrap_or(default);
        push_entry(&mut rebuilt, indent, field, value, entry);
    }
    for entry in &entries {
        if !STAT_FIELDS.iter().any(|(field, _)| *field == entry.key) {
            push_entry(&mut rebuilt, indent, &entry.key, &entry.value, Some(entry));
        }
    }
    for comment in &dangling {
        rebuilt.push_str(&format!("{indent}{comment}\n"));
    }
    rebuilt.push_str(closing_indent(body));
    rebuilt
}

// Indentation of the first entry written on its own line.
fn entry_indent(body: &str) -> &str {
    body.split('\n')
        .skip(1)
        .find(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .unwrap_or(DEFAULT_ENTRY_INDENT)
}

fn closing_indent(body: &str) -> &str {
    match body.rsplit_once('\n') {
        Some((_, tail)) if tail.trim().is_empty() => tail,
        _ => DEFAULT_CLOSING_INDENT,
    }
}

pub fn fix_stats_mocks(ctx: &RunContext, config: &StatsMockConfig) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for file in &config.files {
        let path = ctx.resolve(file);
        let outcome = rewrite::rewrite_file(&path, ctx.dry_run, |text| backfill(text, &config.method))
            .with_context(|| format!("Failed to fix mocks in {}", path.display()))?;

        if outcome == FileOutcome::Modified {
            ctx.report_modified(&path);
        } else {
            log::info!("{} already complete", ctx.display_path(&path));
        }
        summary.record(outcome);
    }

    Ok(summary)
}
