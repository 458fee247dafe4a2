//! Simple TOML-subset config loader for raceway-calc.
//! Supports [sections] with key = value pairs (strings, floats, ints).
//!
//! ```toml
//! [raceway]
//! type = "tray"        # tray | conduit
//! reserve = 20         # percent, 0-50
//! ticks = 300
//!
//! [cables]
//! feeder = "cabo_uni_1kv:10:3"        # category:section:quantity
//! lighting = "cabo_uni_750v:2.5:6:4"  # optional trailing diameter override
//! ```

use std::collections::HashMap;
use std::path::Path;

/// Parsed configuration values, keyed by "section.key". Key order as
/// written in the file is kept: the [cables] section is a bill of
/// materials, and its declaration order drives node creation order (and so
/// the layout for a given seed).
pub struct Config {
    values: HashMap<String, String>,
    order: Vec<String>,
}

impl Config {
    /// Load config from a TOML file. Returns empty config if file doesn't exist.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(_) => {
                return Self { values: HashMap::new(), order: Vec::new() };
            }
        };
        eprintln!("Loaded config from {:?}", path);
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Self {
        let mut values = HashMap::new();
        let mut order = Vec::new();
        let mut section = String::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                section = line[1..line.len() - 1].trim().to_string();
                continue;
            }
            if let Some(eq_pos) = line.find('=') {
                let key = line[..eq_pos].trim();
                let val = line[eq_pos + 1..].trim();
                // Strip inline comments
                let val = if let Some(hash) = val.find('#') {
                    val[..hash].trim()
                } else {
                    val
                };
                // Strip quotes from string values
                let val = val.trim_matches('"');
                let full_key = if section.is_empty() {
                    key.to_string()
                } else {
                    format!("{}.{}", section, key)
                };
                if values.insert(full_key.clone(), val.to_string()).is_none() {
                    order.push(full_key);
                }
            }
        }

        Self { values, order }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    /// All values under a section, in the order they appear in the file.
    pub fn section_values(&self, section: &str) -> Vec<(String, String)> {
        let prefix = format!("{}.", section);
        self.order
            .iter()
            .filter(|k| k.starts_with(&prefix))
            .map(|k| (k[prefix.len()..].to_string(), self.values[k.as_str()].clone()))
            .collect()
    }
}
