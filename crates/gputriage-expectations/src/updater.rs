//! The in-place expectation-file rewrite.
//!
//! Files are rewritten through a temp file in the same directory which then
//! replaces the original, so a failure mid-rewrite never leaves a partially
//! written expectation file behind.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ExpectationError;
use crate::host::Host;
use crate::local::local_expectations;
use crate::tags::{canonicalize_line, LineRewrite};
use crate::target::Target;

/// Literal marker line ending the tag header region.
const END_TAG_HEADER: &str = "END TAG HEADER";

/// What one file's rewrite pass observed.
struct RewriteOutcome {
    /// The marker comment was already present; the file was copied through
    /// verbatim and the append step must be skipped.
    already_updated: bool,
    /// Canonical lines seen during this pass, used to dedupe the append step.
    seen: Vec<String>,
}

/// Applies the local Intel GPU update to every expectation file of
/// `target_name` under `root_dir`.
///
/// A missing root directory or expectation file is reported through
/// `host.warn` and aborts without error; an unknown target name is a silent
/// no-op. The update is idempotent: a file whose first line carries the
/// marker comment is left byte-identical.
///
/// # Errors
///
/// Only genuine I/O failures (read, write, or replacing the original file)
/// surface as an error.
pub fn update(target_name: &str, root_dir: &Path, host: &dyn Host) -> Result<(), ExpectationError> {
    if !host.path_exists(root_dir) {
        host.warn(&format!("{} does not exist", root_dir.display()));
        return Ok(());
    }
    let Some(target) = Target::from_name(target_name) else {
        return Ok(());
    };

    for &file in target.expectation_files() {
        let path = root_dir.join(file);
        if !host.path_exists(&path) {
            host.warn(&format!("{} does not exist", path.display()));
            return Ok(());
        }

        let outcome = rewrite_file(target, &path)?;
        if outcome.already_updated {
            return Ok(());
        }
        append_local_entries(target, file, &path, &outcome.seen)?;
    }
    Ok(())
}

/// Rewrites one file: marker insertion, tag-header tracking, and (for
/// tag-header targets) vendor-tag canonicalization of body lines.
fn rewrite_file(target: Target, path: &Path) -> Result<RewriteOutcome, ExpectationError> {
    let reader = BufReader::new(std::fs::File::open(path)?);
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;

    let marker = target.update_marker();
    let prefix = target.comment_prefix();
    let mut seen = Vec::new();
    let mut already_updated = false;
    let mut in_tag_header = true;
    let mut first_line = true;

    for line in reader.lines() {
        let line = line?;
        if first_line {
            first_line = false;
            if line.contains(&marker) {
                already_updated = true;
            } else {
                writeln!(tmp, "{marker}")?;
            }
        }
        if already_updated {
            writeln!(tmp, "{line}")?;
            continue;
        }

        if !target.has_tag_header() {
            writeln!(tmp, "{line}")?;
        } else if in_tag_header {
            if line.contains(END_TAG_HEADER) {
                in_tag_header = false;
            }
            writeln!(tmp, "{line}")?;
        } else {
            match canonicalize_line(&line, &mut seen) {
                LineRewrite::Unchanged => writeln!(tmp, "{line}")?,
                LineRewrite::Duplicate => writeln!(tmp, "{prefix} {line}")?,
                LineRewrite::Canonicalized(canonical) => {
                    writeln!(tmp, "{prefix} {line}")?;
                    writeln!(tmp, "{canonical}")?;
                }
            }
        }
    }

    // A zero-line file still gets the marker so the next run short-circuits.
    if first_line {
        writeln!(tmp, "{marker}")?;
    }

    tmp.persist(path).map_err(|e| ExpectationError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(RewriteOutcome {
        already_updated,
        seen,
    })
}

/// Appends the curated local entries not already present in the file,
/// preceded once by a section comment. Appends nothing when every entry was
/// already seen during the rewrite pass.
fn append_local_entries(
    target: Target,
    file: &str,
    path: &Path,
    seen: &[String],
) -> Result<(), ExpectationError> {
    let missing: Vec<&str> = local_expectations(file)
        .iter()
        .copied()
        .filter(|entry| !seen.iter().any(|s| s == entry))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }

    let mut out = OpenOptions::new().append(true).open(path)?;
    writeln!(out)?;
    writeln!(
        out,
        "{} Locally maintained expectation items",
        target.comment_prefix()
    )?;
    for entry in missing {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}
