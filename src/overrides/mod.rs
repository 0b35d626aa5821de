//! Curated override table.
//!
//! Three read-only tables consulted by the title engine:
//! - removals: domains excluded from ranked output entirely
//! - duplicates: alias groups whose alternates collapse onto a main domain
//! - titles: literal titles that take priority over every other source
//!
//! A default table is compiled into the binary; `load` replaces it with a file.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error_handling::OverrideError;

const EMBEDDED_TABLE: &str = include_str!("../../data/overrides.json");

#[derive(Debug, Deserialize)]
struct Removal {
    main: String,
}

#[derive(Debug, Deserialize)]
struct AliasGroup {
    main: String,
    #[serde(default)]
    alt: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTable {
    #[serde(default)]
    removals: Vec<Removal>,
    #[serde(default)]
    duplicates: Vec<AliasGroup>,
    #[serde(default)]
    titles: HashMap<String, String>,
}

/// Indexed form of the curated tables.
#[derive(Debug, Default, Clone)]
pub struct OverrideTable {
    removals: HashSet<String>,
    /// alternate -> main
    aliases: HashMap<String, String>,
    titles: HashMap<String, String>,
}

impl OverrideTable {
    /// Parses and indexes a table from its JSON text.
    ///
    /// # Errors
    ///
    /// - `OverrideError::Parse` if the text is not a valid table
    /// - `OverrideError::DuplicateAlias` if a domain is an alternate of two mains
    /// - `OverrideError::SelfAlias` if a main lists itself as an alternate
    pub fn from_json(json: &str) -> Result<Self, OverrideError> {
        let raw: RawTable = serde_json::from_str(json)?;

        let removals = raw
            .removals
            .into_iter()
            .map(|r| r.main.to_lowercase())
            .collect();

        let mut aliases: HashMap<String, String> = HashMap::new();
        for group in raw.duplicates {
            let main = group.main.to_lowercase();
            for alt in group.alt {
                let alt = alt.to_lowercase();
                if alt == main {
                    return Err(OverrideError::SelfAlias(alt));
                }
                if let Some(first) = aliases.get(&alt) {
                    if *first != main {
                        return Err(OverrideError::DuplicateAlias {
                            alt,
                            first: first.clone(),
                            second: main,
                        });
                    }
                    continue;
                }
                aliases.insert(alt, main.clone());
            }
        }

        let titles = raw
            .titles
            .into_iter()
            .map(|(domain, title)| (domain.to_lowercase(), title))
            .collect();

        Ok(Self {
            removals,
            aliases,
            titles,
        })
    }

    /// The table compiled into the binary.
    pub fn embedded() -> Result<Self, OverrideError> {
        Self::from_json(EMBEDDED_TABLE)
    }

    /// Reads a table from `path`.
    pub async fn load(path: &Path) -> Result<Self, OverrideError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| OverrideError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
        let table = Self::from_json(&content)?;
        log::info!(
            "Loaded override table from {:?} ({} removals, {} aliases, {} titles)",
            path,
            table.removals.len(),
            table.aliases.len(),
            table.titles.len()
        );
        Ok(table)
    }

    /// Loads `path` when given, otherwise the embedded table.
    pub async fn load_or_embedded(path: Option<&Path>) -> Result<Self, OverrideError> {
        match path {
            Some(path) => Self::load(path).await,
            None => Self::embedded(),
        }
    }

    pub fn is_removed(&self, domain: &str) -> bool {
        self.removals.contains(domain)
    }

    /// The main domain `domain` is an alternate of, if any.
    pub fn main_for(&self, domain: &str) -> Option<&str> {
        self.aliases.get(domain).map(String::as_str)
    }

    pub fn title_for(&self, domain: &str) -> Option<&str> {
        self.titles.get(domain).map(String::as_str)
    }
}
