//! Controlled vocabularies for choice columns.
//!
//! A vocabulary holds the canonical value set for one domain (department,
//! city, process classification, ...) together with an alias map collecting
//! the historical spelling variants seen in agency exports. Vocabularies are
//! built once and shared read-only across all rows.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Case convention applied before a vocabulary lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFold {
    #[default]
    Upper,
    Lower,
}

impl CaseFold {
    pub fn apply(self, value: &str) -> String {
        match self {
            CaseFold::Upper => value.to_uppercase(),
            CaseFold::Lower => value.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub name: String,
    #[serde(default)]
    pub case_fold: CaseFold,
    /// Strip a leading `<code>-` prefix before lookup. Off for vocabularies
    /// whose canonical values themselves carry code prefixes (procedures).
    #[serde(default)]
    pub strip_code_prefix: bool,
    pub values: BTreeSet<String>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Vocabulary {
    pub fn new(name: impl Into<String>, case_fold: CaseFold) -> Self {
        Self {
            name: name.into(),
            case_fold,
            strip_code_prefix: false,
            values: BTreeSet::new(),
            aliases: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_alias(mut self, variant: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(variant.into(), canonical.into());
        self
    }

    #[must_use]
    pub fn with_code_prefix_stripping(mut self) -> Self {
        self.strip_code_prefix = true;
        self
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Map a normalized variant to its canonical value, or return it as-is.
    pub fn resolve_alias<'a>(&'a self, value: &'a str) -> &'a str {
        self.aliases.get(value).map_or(value, String::as_str)
    }
}

/// Read-only set of vocabularies keyed by domain name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyRegistry {
    by_name: BTreeMap<String, Vocabulary>,
}

impl VocabularyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, vocabulary: Vocabulary) {
        self.by_name.insert(vocabulary.name.clone(), vocabulary);
    }

    pub fn get(&self, name: &str) -> Option<&Vocabulary> {
        self.by_name.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
