//! Vendor-variant tag canonicalization.
//!
//! Expectation lines carry a bracketed tag list, e.g.
//! `[ webgpu-adapter-default intel-0x9bc5 ] webgpu:* [ Failure ]`. Tags such
//! as `intel-0x9bc5` or `intel-gen-9` are device-specific spellings of the
//! same vendor; collapsing them to the bare `intel` tag lets expectations
//! recorded on different devices fold into one line.

use std::sync::OnceLock;

use regex::Regex;

/// First bracketed tag group in a line, non-greedy. May match a result group
/// like `[ Failure ]` on lines without tags; those contain no intel token and
/// pass through.
const TAG_GROUP_PATTERN: &str = r"\[.*?\]";

/// An intel tag with an optional variant suffix (`intel`, `intel-0x9bc5`,
/// `intel-gen-9`, ...).
const INTEL_VARIANT_PATTERN: &str = r"intel\S*";

static TAG_GROUP_REGEX: OnceLock<Regex> = OnceLock::new();
static INTEL_VARIANT_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_group_regex() -> &'static Regex {
    TAG_GROUP_REGEX.get_or_init(|| Regex::new(TAG_GROUP_PATTERN).expect("invalid regex pattern"))
}

fn intel_variant_regex() -> &'static Regex {
    INTEL_VARIANT_REGEX
        .get_or_init(|| Regex::new(INTEL_VARIANT_PATTERN).expect("invalid regex pattern"))
}

/// Outcome of canonicalizing one expectation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRewrite {
    /// The line passes through untouched.
    Unchanged,
    /// The line canonicalizes to an already-seen line; comment it out and
    /// emit nothing new.
    Duplicate,
    /// Variant tags were collapsed; comment out the original and emit the
    /// contained canonical line after it.
    Canonicalized(String),
}

/// Collapses `intel<suffix>` tags in the first bracket group of `line`.
///
/// `seen` accumulates the canonical lines encountered so far in one file so
/// that duplicates introduced by the collapse (same case, different device
/// ids) can be detected. Lines with an intel tag are recorded in `seen`
/// whether or not the collapse changed them; comment lines and lines without
/// an intel tag are not.
pub fn canonicalize_line(line: &str, seen: &mut Vec<String>) -> LineRewrite {
    if line.starts_with('#') {
        return LineRewrite::Unchanged;
    }

    let Some(group_match) = tag_group_regex().find(line) else {
        return LineRewrite::Unchanged;
    };
    let group = group_match.as_str();
    if !intel_variant_regex().is_match(group) {
        return LineRewrite::Unchanged;
    }

    let canonical_group = intel_variant_regex().replace_all(group, "intel");
    let changed = canonical_group != group;
    let canonical_line = if changed {
        line.replacen(group, &canonical_group, 1)
    } else {
        line.to_string()
    };

    if seen.contains(&canonical_line) {
        return LineRewrite::Duplicate;
    }
    seen.push(canonical_line.clone());

    if changed {
        LineRewrite::Canonicalized(canonical_line)
    } else {
        LineRewrite::Unchanged
    }
}
