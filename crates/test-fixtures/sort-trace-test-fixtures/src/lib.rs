use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    sequences: HashMap<String, String>,
}

/// One named input sequence on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceFixture {
    #[serde(default)]
    pub description: String,
    pub values: Vec<f64>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod sequences {
    use super::*;

    /// Fixture names in a stable (sorted) order.
    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.sequences.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.sequences, "sequence", name)?;
        read_to_string(rel)
    }

    pub fn load(name: &str) -> Result<SequenceFixture> {
        let text = json(name)?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse sequence fixture {name}"))
    }

    pub fn values(name: &str) -> Result<Vec<f64>> {
        load(name).map(|f| f.values)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.sequences, "sequence", name)?;
        Ok(resolve_path(rel))
    }

    /// Every fixture as `(name, values)`.
    pub fn all() -> Result<Vec<(String, Vec<f64>)>> {
        keys()
            .into_iter()
            .map(|name| values(&name).map(|v| (name, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_manifest_entry_loads() {
        for name in sequences::keys() {
            assert!(sequences::path(&name).unwrap().exists(), "{name}");
            sequences::load(&name).unwrap();
        }
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        let err = sequences::load("missing").unwrap_err();
        assert!(err.to_string().contains("unknown sequence fixture"));
    }
}
