//! The draft manifest (`draft.yaml`).
//!
//! A manifest is held as a generic nested value so that dotted lookups work
//! over whatever shape a template ships. Typed accessors exist for the keys
//! the pipeline actually reads.
//!
//! ```text
//! kickstart-template: blog
//! models:
//!   Post:
//!     title: string:400
//! controllers:
//!   Post:
//!     index: ...
//! seeders: Post, Comment
//! ```

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// Top-level manifest keys.
pub mod keys {
    pub const TEMPLATE: &str = "kickstart-template";
    pub const MODELS: &str = "models";
    pub const CONTROLLERS: &str = "controllers";
    pub const SEEDERS: &str = "seeders";
}

/// A parsed draft manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    root: Value,
}

impl Manifest {
    /// Wrap a parsed document. The root must be a mapping.
    pub fn new(root: Value) -> Result<Self, DomainError> {
        match root {
            Value::Object(_) => Ok(Self { root }),
            // An empty YAML document parses to null.
            Value::Null => Ok(Self {
                root: Value::Object(Map::new()),
            }),
            other => Err(DomainError::InvalidManifest {
                reason: format!("expected a mapping at the top level, found {}", kind(&other)),
            }),
        }
    }

    /// The whole document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Dotted lookup: `None` returns the whole document, `"a.b"` walks
    /// mappings by key and sequences by numeric index.
    pub fn get(&self, path: Option<&str>) -> Option<&Value> {
        let Some(path) = path else {
            return Some(&self.root);
        };

        path.split('.').try_fold(&self.root, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Dotted lookup falling back to `default` when the path does not resolve.
    pub fn get_or(&self, path: Option<&str>, default: Value) -> Value {
        self.get(path).cloned().unwrap_or(default)
    }

    /// Value of `kickstart-template`, if present.
    pub fn template_name(&self) -> Option<&str> {
        self.get(Some(keys::TEMPLATE)).and_then(Value::as_str)
    }

    /// Model names, in document order.
    pub fn models(&self) -> Vec<&str> {
        self.section_names(keys::MODELS)
    }

    /// Controller names, in document order.
    pub fn controllers(&self) -> Vec<&str> {
        self.section_names(keys::CONTROLLERS)
    }

    /// Resources listed under `seeders`.
    ///
    /// The canonical form is one comma-separated string; a sequence of
    /// strings is accepted as well. Entries are trimmed of whitespace and
    /// single quotes, empty entries are dropped, order is preserved.
    pub fn seeders(&self) -> Result<Vec<String>, DomainError> {
        let value = self
            .get(Some(keys::SEEDERS))
            .ok_or_else(|| DomainError::SeederListUnreadable {
                reason: "no 'seeders' key".into(),
            })?;

        let raw: Vec<&str> = match value {
            Value::String(list) => list.split(',').collect(),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().ok_or_else(|| DomainError::SeederListUnreadable {
                        reason: format!("expected a resource name, found {}", kind(item)),
                    })
                })
                .collect::<Result<_, _>>()?,
            other => {
                return Err(DomainError::SeederListUnreadable {
                    reason: format!("expected a comma-separated string, found {}", kind(other)),
                });
            }
        };

        Ok(raw
            .into_iter()
            .map(normalize_resource)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// File names of the generic seeders this manifest replaces:
    /// `"{Resource}Seeder.php"` per resource.
    pub fn generic_seeder_files(&self) -> Result<Vec<String>, DomainError> {
        Ok(self
            .seeders()?
            .iter()
            .map(|resource| seeder_file_for(resource))
            .collect())
    }

    fn section_names(&self, key: &str) -> Vec<&str> {
        match self.get(Some(key)) {
            Some(Value::Object(map)) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

/// Conventional generated seeder file for a resource.
pub fn seeder_file_for(resource: &str) -> String {
    format!("{resource}Seeder.php")
}

fn normalize_resource(entry: &str) -> &str {
    entry.trim().trim_matches('\'').trim()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
