//! # Name Normalisation and the Hygiene Audit
//!
//! Distillery labels are compared through a canonical form so that spelling
//! noise (stray whitespace, curly quotes, punctuation, case) cannot hide a
//! duplicate. [`normalise`] computes that form; [`audit_labels`] walks a
//! dataset and reports everything a maintainer should look at.
//!
//! ## Design
//!
//! The pipeline runs in a fixed order: trim, collapse whitespace, unify
//! apostrophes, strip characters outside `[A-Za-z0-9' ]`, title-case. The
//! apostrophe step must precede the strip so a typographic `’` survives as
//! `'` instead of vanishing. Title-casing works on whitespace-delimited words
//! only, so `Mo'land` keeps the letter after its apostrophe lower-case.
//!
//! Audit findings come back in dataset order, interleaved exactly as the
//! entries produced them. Only duplicate labels are fatal to the caller;
//! rename suggestions and alias collisions are advisory.

use std::collections::HashMap;

use serde_json::Value;

use crate::entry::{alias_list, scalar_text};
use crate::error::DramError;
use crate::ReferenceDataset;

/// Canonicalises a name for duplicate comparison.
///
/// Idempotent and pure: `normalise(normalise(x)) == normalise(x)` for any
/// input, and equal inputs always produce equal output.
pub fn normalise(name: &str) -> String {
    let collapsed = collapse_whitespace(name.trim());
    let unified = collapsed.replace('’', "'");
    let stripped = strip_illegal(&unified);
    // Stripping can fuse the spaces that flanked a removed token ("Glen - Foo"
    // becomes "Glen  Foo"); collapse once more so the pipeline stays
    // idempotent.
    let tidied = collapse_whitespace(stripped.trim());
    title_case(&tidied)
}

/// Replaces every run of whitespace (Unicode-aware) with a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Drops every character outside `[A-Za-z0-9' ]`.
fn strip_illegal(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '\'' || *c == ' ')
        .collect()
}

/// Upper-cases the first character of each whitespace-delimited word and
/// lower-cases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// One observation from the hygiene audit, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFinding {
    /// The stored label differs from its canonical form.
    Suggestion {
        /// Label as stored.
        label: String,
        /// Canonical form the maintainer should consider adopting.
        canonical: String,
    },
    /// Two entries share one canonical label. Fatal.
    Duplicate {
        /// The shared canonical form.
        canonical: String,
        /// Id of the entry that claimed the canonical form first.
        first_id: String,
        /// Id of the entry that collided with it.
        second_id: String,
    },
    /// An alias of one entry normalises onto another entry's canonical label.
    AliasCollision {
        /// Alias as stored.
        alias: String,
        /// The existing canonical form it lands on.
        canonical: String,
    },
}

/// Outcome of auditing one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameAudit {
    findings: Vec<NameFinding>,
}

impl NameAudit {
    /// All findings, in dataset order.
    pub fn findings(&self) -> &[NameFinding] {
        &self.findings
    }

    /// True when the audit produced nothing at all.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// True when at least one fatal duplicate was found.
    pub fn has_duplicates(&self) -> bool {
        self.findings
            .iter()
            .any(|f| matches!(f, NameFinding::Duplicate { .. }))
    }
}

/// Audits a dataset's labels and aliases for hygiene problems.
///
/// Every entry must carry an `id` and a string `label`; anything else is a
/// structural error. Canonical forms are claimed first-come: a duplicate's id
/// is never registered, so a three-way clash reports the first claimant
/// twice. Aliases are compared but never claim a canonical form, and an alias
/// that normalises onto its own entry's label is ignored.
pub fn audit_labels(dataset: &ReferenceDataset) -> Result<NameAudit, DramError> {
    let mut findings = Vec::new();
    let mut seen: HashMap<String, String> = HashMap::new();

    for (index, value) in dataset.raw().iter().enumerate() {
        let obj = value
            .as_object()
            .ok_or_else(|| DramError::EntryNotAnObject {
                dataset: dataset.name().to_string(),
                index,
            })?;

        let label = match obj.get("label") {
            Some(Value::String(s)) => s.as_str(),
            Some(_) => {
                return Err(DramError::InvalidField {
                    dataset: dataset.name().to_string(),
                    index,
                    field: "label".to_string(),
                    expected: "a string",
                })
            }
            None => {
                return Err(DramError::MissingField {
                    dataset: dataset.name().to_string(),
                    index,
                    field: "label".to_string(),
                })
            }
        };
        let id = match obj.get("id") {
            Some(v) => scalar_text(v),
            None => {
                return Err(DramError::MissingField {
                    dataset: dataset.name().to_string(),
                    index,
                    field: "id".to_string(),
                })
            }
        };

        let canonical = normalise(label);
        if canonical != label {
            findings.push(NameFinding::Suggestion {
                label: label.to_string(),
                canonical: canonical.clone(),
            });
        }

        match seen.get(&canonical) {
            Some(first_id) => findings.push(NameFinding::Duplicate {
                canonical: canonical.clone(),
                first_id: first_id.clone(),
                second_id: id,
            }),
            None => {
                seen.insert(canonical.clone(), id);
            }
        }

        for alias in alias_list(obj.get("aliases")) {
            let alias_canon = normalise(&alias);
            if alias_canon == canonical {
                continue;
            }
            if seen.contains_key(&alias_canon) {
                findings.push(NameFinding::AliasCollision {
                    alias,
                    canonical: alias_canon,
                });
            }
        }
    }

    Ok(NameAudit { findings })
}
