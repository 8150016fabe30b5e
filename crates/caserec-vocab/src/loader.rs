//! JSON loaders for caller-supplied vocabularies.

use std::path::Path;

use anyhow::{Context, Result};

use caserec_model::{Vocabulary, VocabularyRegistry};

/// Load a single vocabulary from a JSON file.
pub fn load_vocabulary_file(path: &Path) -> Result<Vocabulary> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read vocabulary: {}", path.display()))?;
    let vocabulary: Vocabulary = serde_json::from_str(&raw)
        .with_context(|| format!("parse vocabulary: {}", path.display()))?;
    Ok(vocabulary)
}

/// Load every `*.json` vocabulary in a directory on top of the built-ins.
///
/// A loaded vocabulary with a built-in name replaces the built-in.
pub fn load_registry(dir: &Path) -> Result<VocabularyRegistry> {
    let mut registry = crate::builtin::default_registry();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read vocabulary dir: {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        registry.register(load_vocabulary_file(&path)?);
    }
    Ok(registry)
}
