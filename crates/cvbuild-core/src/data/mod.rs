//! Resume data loading
//!
//! A data file is a YAML mapping of template variables. The language tag the
//! build runs for is added under `lang`, replacing any value already there.

use crate::config::consts::LANG_KEY;
use crate::error::{CvbuildError, Result};
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Template variables for one build
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResumeData {
    values: Mapping,
}

impl ResumeData {
    /// Parse YAML text, then set `lang`
    ///
    /// An empty document is an empty mapping; any other non-mapping top level
    /// is rejected.
    pub fn from_yaml_str(content: &str, lang: &str, origin: &Path) -> Result<Self> {
        let parsed: Value =
            serde_yaml::from_str(content).map_err(|e| CvbuildError::DataInvalid {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut values = match parsed {
            Value::Mapping(map) => map,
            Value::Null => Mapping::new(),
            other => {
                return Err(CvbuildError::DataInvalid {
                    path: origin.to_path_buf(),
                    reason: format!("top level must be a mapping, found {}", kind_of(&other)),
                });
            }
        };

        values.insert(
            Value::String(LANG_KEY.to_string()),
            Value::String(lang.to_string()),
        );

        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn lang(&self) -> Option<&str> {
        self.get(LANG_KEY).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Load `data/<lang>.yaml` and add the `lang` key
pub fn load_resume_data(path: &Path, lang: &str) -> Result<ResumeData> {
    if !path.is_file() {
        return Err(CvbuildError::DataNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let data = ResumeData::from_yaml_str(&content, lang, path)?;
    log::debug!(
        "Loaded {} top-level keys from {}",
        data.len(),
        path.display()
    );
    Ok(data)
}
