// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config documents: reading, `extends` inheritance, and merging.
//!
//! A config document is an opaque JSON object owned by the lint engine. The
//! only key interpreted here is `extends`, a path (relative to the file that
//! names it) to a parent document.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::comments::strip_comments;
use crate::discovery::canonical;
use crate::error::{Error, Result};
use crate::reporter::Reporter;

/// One parsed config file, or a fully resolved configuration.
pub type ConfigDocument = Map<String, Value>;

/// Reserved key naming a parent document.
pub const EXTENDS_KEY: &str = "extends";

/// Parse JSON-with-comments text into a document.
///
/// `extended_by` names the child whose `extends` pulled this file in, so the
/// error can say so.
pub fn parse_document(
    text: &str,
    path: &Path,
    extended_by: Option<&Path>,
) -> Result<ConfigDocument> {
    let stripped = strip_comments(text);
    let value: Value = serde_json::from_str(&stripped).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        extended_by: extended_by.map(Path::to_path_buf),
        source,
    })?;
    into_document(value, path, extended_by)
}

/// Require a top-level JSON object.
pub fn into_document(
    value: Value,
    path: &Path,
    extended_by: Option<&Path>,
) -> Result<ConfigDocument> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject {
            path: path.to_path_buf(),
            extended_by: extended_by.map(Path::to_path_buf),
        }),
    }
}

/// Read and parse a single file without following `extends`.
pub fn read_document(path: &Path, extended_by: Option<&Path>) -> Result<ConfigDocument> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text, path, extended_by)
}

/// Flat read for pinned config files.
///
/// `extends` is dropped without being followed.
pub fn read_flat(path: &Path) -> Result<ConfigDocument> {
    let mut doc = read_document(path, None)?;
    doc.remove(EXTENDS_KEY);
    Ok(doc)
}

/// Merge `child` over `parent`.
///
/// When both sides hold an array the result is the parent's items followed
/// by the child's. Any other child value replaces the parent's.
pub fn merge(mut parent: ConfigDocument, child: ConfigDocument) -> ConfigDocument {
    for (key, value) in child {
        match (parent.get_mut(&key), value) {
            (Some(Value::Array(base)), Value::Array(items)) => base.extend(items),
            (Some(slot), value) => *slot = value,
            (None, value) => {
                parent.insert(key, value);
            }
        }
    }
    parent
}

/// Load `path` and its whole `extends` chain, root ancestor first.
///
/// Never fails. Unreadable or malformed files, dangling or circular
/// `extends`, and non-string `extends` values are reported and contribute
/// nothing. The result has no `extends` key.
pub fn load_with_extends(path: &Path, reporter: &dyn Reporter) -> ConfigDocument {
    load_tracked(path, reporter, &mut HashSet::new())
}

/// Like [`load_with_extends`], also collecting every file the chain
/// depends on into `sources`, including a named parent that is missing.
pub fn load_tracked(
    path: &Path,
    reporter: &dyn Reporter,
    sources: &mut HashSet<PathBuf>,
) -> ConfigDocument {
    let mut chain = Vec::new();
    let doc = load_chain(path, None, &mut chain, reporter);
    sources.extend(chain);
    doc
}

fn load_chain(
    path: &Path,
    extended_by: Option<&Path>,
    chain: &mut Vec<PathBuf>,
    reporter: &dyn Reporter,
) -> ConfigDocument {
    chain.push(canonical(path));

    let mut doc = match read_document(path, extended_by) {
        Ok(doc) => doc,
        Err(err) => {
            reporter.report_error(&err);
            return ConfigDocument::new();
        }
    };

    let parent = match doc.remove(EXTENDS_KEY) {
        None => return doc,
        Some(Value::String(relative)) => base_dir(path).join(relative),
        Some(_) => {
            reporter.report_error(&Error::InvalidExtends {
                path: path.to_path_buf(),
            });
            return doc;
        }
    };

    if chain.contains(&canonical(&parent)) {
        reporter.report_error(&Error::ExtendsCycle {
            path: parent,
            child: path.to_path_buf(),
        });
        return doc;
    }

    if !parent.is_file() {
        chain.push(canonical(&parent));
        reporter.report_error(&Error::MissingExtends {
            path: parent,
            child: path.to_path_buf(),
        });
        return doc;
    }

    tracing::debug!("{} extends {}", path.display(), parent.display());
    let base = load_chain(&parent, Some(path), chain, reporter);
    merge(base, doc)
}

fn base_dir(path: &Path) -> &Path {
    path.parent().unwrap_or(Path::new(""))
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
