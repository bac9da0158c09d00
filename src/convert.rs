//! Scoped key-code substitution for ZMK keymap files.
//!
//! A conversion touches exactly one region of the document: the `bindings = < ... >;`
//! list of the first layer node named after the target layer (`BASE` by default).
//! Inside that list every key-code token (`Q`, `SEMICOLON`, `N1`, ...) is looked up
//! in a [`LayoutMap`] and replaced; everything else is copied through verbatim.
//!
//! The block is found with a pattern, not a parser: the body ends at the first
//! line shaped like `>;` after the header, and only the first matching block is
//! rewritten.

use keymap_layouts::LayoutMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::ops::Range;

/// Layer node converted when none is given
pub const DEFAULT_LAYER: &str = "BASE";

/// Key-code token: uppercase letter, then uppercase letters, digits or '_'.
static KEY_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][A-Z0-9_]*\b").unwrap());

static DEFAULT_BLOCK: Lazy<BlockPattern> =
    Lazy::new(|| BlockPattern::new(DEFAULT_LAYER).unwrap());

// ---------------------------------------------------------------------------
// Block locator
// ---------------------------------------------------------------------------

/// Byte ranges of a located bindings block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpan {
    /// `LAYER { ... bindings = <` up to and including the line break
    pub header: Range<usize>,
    /// The bindings list between header and footer
    pub body: Range<usize>,
    /// The `>;` line (with any leading whitespace)
    pub footer: Range<usize>,
}

/// Compiled pattern for one layer's bindings block
#[derive(Debug, Clone)]
pub struct BlockPattern {
    layer: String,
    regex: Regex,
}

impl BlockPattern {
    /// Build the pattern for the layer node named `layer` (matched literally).
    pub fn new(layer: &str) -> Result<Self, regex::Error> {
        // header: `LAYER {`, anything, `bindings = <`, line break
        // body:   anything, shortest match
        // footer: a line holding `>;`
        let pattern = format!(
            r"(?ms)(^\s*{}\s*\{{.*?bindings\s*=\s*<\s*\r?\n)(.*?)(^\s*>\s*;)",
            regex::escape(layer)
        );
        Ok(Self {
            layer: layer.to_string(),
            regex: Regex::new(&pattern)?,
        })
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    /// Find the first bindings block in `document`
    pub fn locate(&self, document: &str) -> Option<BlockSpan> {
        let caps = self.regex.captures(document)?;
        let (header, body, footer) = (caps.get(1)?, caps.get(2)?, caps.get(3)?);
        Some(BlockSpan {
            header: header.range(),
            body: body.range(),
            footer: footer.range(),
        })
    }

    /// Rewrite the first bindings block of `document` through `map`.
    pub fn convert(&self, document: &str, map: &LayoutMap) -> Conversion {
        let Some(span) = self.locate(document) else {
            return Conversion {
                output: document.to_string(),
                block_found: false,
                replaced: 0,
            };
        };

        let (body, replaced) = rewrite_tokens(&document[span.body.clone()], map);

        let mut output = String::with_capacity(document.len() + body.len() - span.body.len());
        output.push_str(&document[..span.body.start]);
        output.push_str(&body);
        output.push_str(&document[span.body.end..]);

        Conversion {
            output,
            block_found: true,
            replaced,
        }
    }
}

impl Default for BlockPattern {
    fn default() -> Self {
        DEFAULT_BLOCK.clone()
    }
}

// ---------------------------------------------------------------------------
// Token rewriter
// ---------------------------------------------------------------------------

/// Replace every key-code token in `body` that is a source key of `map`.
///
/// Tokens are taken from the original text in one left-to-right pass, so a
/// replacement is never looked up again (`A->B, B->C` turns `A B` into `B C`).
/// Returns the new text and the number of tokens that actually changed.
pub fn rewrite_tokens<'a>(body: &'a str, map: &LayoutMap) -> (Cow<'a, str>, usize) {
    if map.is_empty() {
        return (Cow::Borrowed(body), 0);
    }

    let mut replaced = 0;
    let rewritten = KEY_CODE_PATTERN.replace_all(body, |caps: &Captures<'_>| {
        let token = &caps[0];
        match map.get(token) {
            Some(mapped) => {
                if mapped != token {
                    replaced += 1;
                }
                mapped.to_string()
            }
            None => token.to_string(),
        }
    });
    (rewritten, replaced)
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Result of converting one document with one map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Converted document (the input, unchanged, when no block was found)
    pub output: String,
    pub block_found: bool,
    /// Tokens whose text changed
    pub replaced: usize,
}

/// Convert the `BASE` layer bindings of `document` through `map`.
pub fn convert_keymap(document: &str, map: &LayoutMap) -> String {
    DEFAULT_BLOCK.convert(document, map).output
}
