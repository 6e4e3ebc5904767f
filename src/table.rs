use crate::transform::{is_valid_identifier, module_identifier, route_key};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single handler file together with the route and module name derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Path of the handler file, starting with the routes root
    pub file: String,
    /// URL path the handler is registered under
    pub route: String,
    /// Identifier the handler module is imported as
    pub module: String,
}

impl RouteEntry {
    /// Derives the route and module name of `file` below `routes_root`.
    pub fn from_file(file: &str, routes_root: &str) -> Self {
        Self {
            file: file.to_string(),
            route: route_key(file, routes_root),
            module: module_identifier(file, routes_root),
        }
    }
}

/// The ordered dispatch table built from one scan of the routes root.
///
/// Entries keep the order of the files they were built from. Nothing is
/// deduplicated: two files mapping to the same route or module name both stay in
/// the table and are only reported by [`RouteTable::duplicate_routes`] and
/// [`RouteTable::duplicate_modules`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    pub routes_root: String,
    pub entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn build(routes_root: &str, files: &[String]) -> Self {
        let entries = files
            .iter()
            .map(|file| RouteEntry::from_file(file, routes_root))
            .collect();

        Self {
            routes_root: routes_root.to_string(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Route keys claimed by more than one file, in order of first appearance.
    pub fn duplicate_routes(&self) -> Vec<&str> {
        duplicates(self.entries.iter().map(|e| e.route.as_str()))
    }

    /// Module identifiers claimed by more than one file, in order of first appearance.
    pub fn duplicate_modules(&self) -> Vec<&str> {
        duplicates(self.entries.iter().map(|e| e.module.as_str()))
    }

    /// Entries whose module identifier is empty or starts with a digit.
    pub fn invalid_modules(&self) -> Vec<&RouteEntry> {
        self.entries
            .iter()
            .filter(|e| !is_valid_identifier(&e.module))
            .collect()
    }
}

fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();

    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    order.into_iter().filter(|v| counts[v] > 1).collect()
}
