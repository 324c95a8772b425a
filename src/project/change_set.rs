//! Change-set documents produced by an upstream sync step.
//!
//! A change set lists the files of a codebase with what happened to each
//! since the last sync. The engine itself never reads one; callers use it
//! to decide which files to hand to the analyzer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::base::constants::is_supported_path;

/// What happened to a file since the previous sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Add,
    Modify,
    Delete,
}

impl ChangeKind {
    /// Added and modified files need a fresh parse
    pub fn needs_parse(&self) -> bool {
        matches!(self, Self::Add | Self::Modify)
    }
}

/// One sync document: relative path to change kind, plus codebase identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSet {
    pub client_id: String,
    pub codebase_name: String,
    pub codebase_path: String,
    /// Relative `/`-separated paths in document order
    pub file_list: IndexMap<String, ChangeKind>,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
}

impl ChangeSet {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Added or modified source files, in document order
    pub fn files_to_parse(&self) -> impl Iterator<Item = &str> + '_ {
        self.file_list
            .iter()
            .filter(|(path, kind)| kind.needs_parse() && is_supported_path(path))
            .map(|(path, _)| path.as_str())
    }

    /// Deleted source files, whose graphs should be dropped downstream
    pub fn deleted_files(&self) -> impl Iterator<Item = &str> + '_ {
        self.file_list
            .iter()
            .filter(|(path, kind)| **kind == ChangeKind::Delete && is_supported_path(path))
            .map(|(path, _)| path.as_str())
    }
}
