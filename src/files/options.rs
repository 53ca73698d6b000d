//! Picker configuration passed through to the platform dialog.
//!
//! The layout matches the browser file-picker options object (camelCase keys),
//! so a host can forward the serialized value unchanged.

use crate::constants::{DEFAULT_FILTER_DESCRIPTION, DEFAULT_FILTER_EXTENSIONS, DEFAULT_FILTER_MIME};
use crate::files::error::FileResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One or more accepted extensions for a MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Accept {
    One(String),
    Many(Vec<String>),
}

/// A file type filter shown in the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeFilter {
    pub description: String,
    pub accept: BTreeMap<String, Accept>,
}

impl FileTypeFilter {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            accept: BTreeMap::new(),
        }
    }

    pub fn with_accept(mut self, mime: impl Into<String>, extensions: &[&str]) -> Self {
        let accept = match extensions {
            [single] => Accept::One((*single).to_string()),
            many => Accept::Many(many.iter().map(|e| (*e).to_string()).collect()),
        };
        self.accept.insert(mime.into(), accept);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerOptions {
    pub types: Vec<FileTypeFilter>,
    /// Hide the generic "All files" choice
    pub exclude_accept_all_option: bool,
    pub multiple: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_name: Option<String>,
}

impl PickerOptions {
    /// Parse options supplied as a JSON string by the caller.
    pub fn from_json(json: &str) -> FileResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> FileResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Open-dialog defaults: workflow files only, single selection.
    pub fn default_open() -> Self {
        Self {
            types: vec![default_filter()],
            exclude_accept_all_option: true,
            multiple: false,
            suggested_name: None,
        }
    }

    /// Save-dialog defaults: workflow files, generic filter kept.
    pub fn default_save() -> Self {
        Self {
            types: vec![default_filter()],
            ..Self::default()
        }
    }

    pub fn with_suggested_name(mut self, name: impl Into<String>) -> Self {
        self.suggested_name = Some(name.into());
        self
    }
}

fn default_filter() -> FileTypeFilter {
    FileTypeFilter::new(DEFAULT_FILTER_DESCRIPTION)
        .with_accept(DEFAULT_FILTER_MIME, DEFAULT_FILTER_EXTENSIONS)
}
