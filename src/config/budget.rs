//! Budget configuration loader
//!
//! Reads the budget configuration file, checks it against the required
//! schema and produces the list of budget classes it declares:
//!
//! ```json
//! {
//!     "name": "Household",
//!     "save_location": "/var/lib/sbudget/classes",
//!     "classes": [
//!         {
//!             "name": "Groceries",
//!             "type": "expense",
//!             "description": "Food and household supplies",
//!             "keywords": ["market", "grocer"]
//!         }
//!     ]
//! }
//! ```
//!
//! Parsing is all-or-nothing: classes are collected into a local list and
//! the `Config` is only built once every entry has validated.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use super::schema::Fields;
use crate::error::{SbError, SbResult};
use crate::models::{BudgetClass, BudgetClassType};

/// A parsed and validated budget configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    name: String,
    classes: Vec<BudgetClass>,
    save_location: PathBuf,
}

impl Config {
    /// Read and validate the configuration file at `path`
    pub fn parse<P: AsRef<Path>>(path: P) -> SbResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SbError::Io(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config = Self::parse_str(&content).map_err(|e| match e {
            SbError::Parse(msg) => {
                SbError::Parse(format!("Failed to parse {}: {}", path.display(), msg))
            }
            other => other,
        })?;

        info!(
            path = %path.display(),
            name = %config.name,
            classes = config.classes.len(),
            "loaded budget configuration"
        );
        Ok(config)
    }

    /// Validate configuration from an in-memory JSON document
    pub fn parse_str(content: &str) -> SbResult<Self> {
        let document: Value = serde_json::from_str(content)?;
        Self::from_value(&document)
    }

    /// Validate an already-parsed JSON document
    pub fn from_value(document: &Value) -> SbResult<Self> {
        let fields = Fields::root(document)?;
        let name = fields.require_str("name")?;
        let entries = fields.require_array("classes")?;
        let save_location = fields.require_str("save_location")?;

        let mut classes = Vec::with_capacity(entries.len());
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            let class = parse_class(entry, index)?;

            let file_name = class.file_name();
            if let Some(first) = seen.insert(file_name.clone(), index) {
                return Err(SbError::Duplicate {
                    entity_type: "Budget class",
                    identifier: format!(
                        "classes[{}] '{}' maps to {} already used by classes[{}]",
                        index,
                        class.name(),
                        file_name,
                        first
                    ),
                });
            }

            debug!(index, class = %class, "parsed budget class");
            classes.push(class);
        }

        if classes.is_empty() {
            warn!(config = name, "budget configuration declares no classes");
        }

        Ok(Self {
            name: name.to_string(),
            classes,
            save_location: PathBuf::from(save_location),
        })
    }

    /// Configuration name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Budget classes in file order
    pub fn classes(&self) -> &[BudgetClass] {
        &self.classes
    }

    /// Directory the classes are persisted to
    pub fn save_location(&self) -> &Path {
        &self.save_location
    }

    /// Look up a class by name, ignoring case
    pub fn find_class(&self, name: &str) -> Option<&BudgetClass> {
        let name_lower = name.to_lowercase();
        self.classes
            .iter()
            .find(|c| c.name().to_lowercase() == name_lower)
    }

    /// Classes of the given type, in file order
    pub fn classes_of_type(&self, class_type: BudgetClassType) -> impl Iterator<Item = &BudgetClass> {
        self.classes
            .iter()
            .filter(move |c| c.class_type() == class_type)
    }

    /// Take ownership of the parsed classes
    pub fn into_classes(self) -> Vec<BudgetClass> {
        self.classes
    }
}

/// Validate one entry of the `classes` array
fn parse_class(entry: &Value, index: usize) -> SbResult<BudgetClass> {
    let fields = Fields::scoped(entry, format!("classes[{}]", index))?;

    let name = fields.require_str("name")?;
    let type_str = fields.require_str("type")?;
    let description = fields.require_str("description")?;
    let raw_keywords = fields.require_array("keywords")?;

    let class_type =
        BudgetClassType::parse(type_str).ok_or_else(|| SbError::InvalidClassType {
            location: fields.location("type"),
            value: type_str.to_string(),
        })?;

    let keywords = raw_keywords.iter().map(keyword_text);

    let class = BudgetClass::new(name, class_type, description, keywords);
    class.validate().map_err(|e| SbError::Schema {
        location: fields.location("name"),
        reason: e.to_string(),
    })?;

    Ok(class)
}

/// Keywords are matched as text; non-string entries are rendered the way
/// the budget tooling has always printed them (`None`, `[1, 2]`,
/// `{'a': 1}`) before being lower-cased
fn keyword_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => literal_text(other),
    }
}

/// Single-quoted unless the text holds a `'` and no `"`
fn quoted(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\");
    if s.contains('\'') && !s.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}

/// Literal rendering of a JSON value; nested strings are quoted
fn literal_text(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quoted(s),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(literal_text).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quoted(k), literal_text(v)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}
