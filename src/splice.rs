//! Locate a function by its doc comment and replace it wholesale.
//!
//! The generator files this targets are long lists of
//!
//! ```text
//! /**
//!  * Genera sprite de ojos - Tipo 1: Ojos grandes redondos
//!  */
//! export function generateEyes_01(): string {
//!   return `
//!     <svg ...>
//!   `;
//! }
//! ```
//!
//! so the anchor is a doc comment containing a known phrase, immediately followed
//! by the named function, which runs until the first `}` at column zero.

use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

static TEMPLATE_RETURN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"return\s*`(?P<body>(?:[^`\\]|\\.)*)`").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub comment: String,
    pub function: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpliceMode {
    /// Replace the whole function; the doc comment too when the fragment brings its own.
    #[default]
    Function,
    /// Replace only the contents of the function's returned template literal.
    Template,
}

struct AnchorMatch {
    doc: Range<usize>,
    func: Range<usize>,
}

impl Anchor {
    pub fn new(comment: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            function: function.into(),
        }
    }

    pub fn regex(&self) -> Result<Regex> {
        let pattern = format!(
            r"(?mR)(?P<doc>^/\*\*(?:[^*]|\*[^/])*?{comment}(?:[^*]|\*[^/])*?\*/[ \t]*\r?\n)(?P<func>^(?:export )?(?:async )?function {function}\b(?s:.*?)\r?\n\}}[ \t]*$)",
            comment = regex::escape(&self.comment),
            function = regex::escape(&self.function),
        );
        Ok(Regex::new(&pattern)?)
    }

    fn locate(&self, text: &str) -> Result<AnchorMatch> {
        let re = self.regex()?;
        let count = re.find_iter(text).count();
        match count {
            0 => Err(Error::AnchorNotFound {
                function: self.function.clone(),
                comment: self.comment.clone(),
            }),
            1 => {
                let caps = re.captures(text).ok_or_else(|| Error::AnchorNotFound {
                    function: self.function.clone(),
                    comment: self.comment.clone(),
                })?;
                let doc = caps.name("doc").map(|m| m.range()).unwrap_or(0..0);
                let func = caps.name("func").map(|m| m.range()).unwrap_or(0..0);
                Ok(AnchorMatch { doc, func })
            }
            n => Err(Error::AmbiguousAnchor {
                function: self.function.clone(),
                count: n,
            }),
        }
    }
}

/// Replace the anchored span of `text` with `fragment`.
///
/// The fragment is inserted literally, so `${...}` inside generated templates
/// survives untouched.
pub fn splice(text: &str, anchor: &Anchor, fragment: &str, mode: SpliceMode) -> Result<String> {
    let found = anchor.locate(text)?;

    let (range, replacement) = match mode {
        SpliceMode::Function => {
            let fragment = normalize_fragment(fragment);
            if fragment.starts_with("/**") {
                (found.doc.start..found.func.end, fragment.to_string())
            } else {
                (found.func.clone(), fragment.to_string())
            }
        }
        SpliceMode::Template => {
            let func_text = &text[found.func.clone()];
            let caps = TEMPLATE_RETURN
                .captures(func_text)
                .ok_or_else(|| Error::TemplateNotFound {
                    function: anchor.function.clone(),
                })?;
            let body = caps.name("body").map(|m| m.range()).unwrap_or(0..0);
            let start = found.func.start + body.start;
            let end = found.func.start + body.end;
            (start..end, template_body(fragment))
        }
    };

    // Inserted text follows the target's line endings.
    let replacement = if text[found.doc.clone()].ends_with("\r\n") {
        replacement.replace("\r\n", "\n").replace('\n', "\r\n")
    } else {
        replacement
    };

    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..range.start]);
    out.push_str(&replacement);
    out.push_str(&text[range.end..]);
    Ok(out)
}

fn normalize_fragment(fragment: &str) -> &str {
    fragment.trim_start_matches(['\n', '\r']).trim_end()
}

// Template bodies keep the generator's layout: markup on its own lines,
// closing backtick indented under `return`.
fn template_body(fragment: &str) -> String {
    let inner = fragment.trim_matches(['\n', '\r']).trim_end();
    format!("\n{}\n  ", inner)
}
