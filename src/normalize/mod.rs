//! Field normalization: legacy upstream records → canonical records.
//!
//! Every transform is a [`RuleSet`]: keys to drop, [`RenameRule`]s that move
//! legacy keys onto canonical ones (or install a fallback), and [`Coercion`]s
//! run on the canonical keys afterwards. Applying a rule set is pure and
//! idempotent: a record without legacy keys only gets missing canonical keys
//! filled in.

pub mod category;
pub mod coerce;
pub mod common;
pub mod image;

use serde_json::{Map, Value};

pub use category::{normalize_intro, ContentType};
pub use common::{normalize_common, normalize_detail_common, normalize_listing};
pub use image::{normalize_images, ImageRecord};

/// A record exactly as the upstream API returned it.
pub type RawRecord = Map<String, Value>;

/// A record keyed by canonical field names.
pub type CanonicalRecord = Map<String, Value>;

/// Value installed under a canonical key when its legacy key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Null,
    Bool(bool),
}

impl Fallback {
    fn to_value(self) -> Value {
        match self {
            Fallback::Null => Value::Null,
            Fallback::Bool(b) => Value::Bool(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameRule {
    pub legacy: &'static str,
    pub canonical: &'static str,
    pub fallback: Fallback,
}

/// Rename with a `null` fallback.
pub const fn rename(legacy: &'static str, canonical: &'static str) -> RenameRule {
    RenameRule { legacy, canonical, fallback: Fallback::Null }
}

/// Rename with a `false` fallback, for flags whose absence means "no".
pub const fn rename_or_false(legacy: &'static str, canonical: &'static str) -> RenameRule {
    RenameRule { legacy, canonical, fallback: Fallback::Bool(false) }
}

impl RenameRule {
    pub fn apply(&self, record: &mut RawRecord) {
        match record.remove(self.legacy) {
            Some(value) => {
                record.insert(self.canonical.to_string(), value);
            }
            None => {
                if !record.contains_key(self.canonical) {
                    record.insert(self.canonical.to_string(), self.fallback.to_value());
                }
            }
        }
    }
}

/// Type fix-ups applied to a canonical key after renaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Timestamp → `YYYYMMDD`.
    Date,
    /// Free text → first HTTP(S) URL, or null.
    FirstUrl,
    /// `1` → true, anything else → false, null stays null.
    Flag,
    /// `<br>`-separated text → trimmed list of lines.
    Lines,
}

impl Coercion {
    pub fn apply(self, value: Value) -> Value {
        match self {
            Coercion::Date => coerce::date(value),
            Coercion::FirstUrl => coerce::first_url(value),
            Coercion::Flag => coerce::flag(value),
            Coercion::Lines => coerce::lines(value),
        }
    }
}

/// A closed transform table for one record shape.
#[derive(Debug)]
pub struct RuleSet {
    pub drop: &'static [&'static str],
    pub rules: &'static [RenameRule],
    pub coercions: &'static [(&'static str, Coercion)],
}

impl RuleSet {
    /// Drop, rename, then coerce. Keys no rule names pass through.
    pub fn apply(&self, mut record: RawRecord) -> CanonicalRecord {
        for key in self.drop {
            record.remove(*key);
        }
        for rule in self.rules {
            rule.apply(&mut record);
        }
        for (key, coercion) in self.coercions {
            let value = record.remove(*key).unwrap_or(Value::Null);
            record.insert(key.to_string(), coercion.apply(value));
        }
        record
    }

    pub fn legacy_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .filter(|r| r.legacy != r.canonical)
            .map(|r| r.legacy)
            .chain(self.drop.iter().copied())
    }

    pub fn canonical_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static SAMPLE: RuleSet = RuleSet {
        drop: &["junk"],
        rules: &[
            rename("oldname", "name"),
            rename_or_false("flagx", "flag"),
            rename("same", "same"),
        ],
        coercions: &[("flag", Coercion::Flag)],
    };

    fn record(v: Value) -> RawRecord {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn renames_present_keys() {
        let out = SAMPLE.apply(record(json!({ "oldname": "x", "flagx": 1, "same": 3 })));
        assert_eq!(out, record(json!({ "name": "x", "flag": true, "same": 3 })));
    }

    #[test]
    fn installs_fallbacks_for_absent_keys() {
        let out = SAMPLE.apply(RawRecord::new());
        assert_eq!(out, record(json!({ "name": null, "flag": false, "same": null })));
    }

    #[test]
    fn drops_and_passes_through() {
        let out = SAMPLE.apply(record(json!({ "junk": 1, "extra": "kept" })));
        assert!(!out.contains_key("junk"));
        assert_eq!(out["extra"], "kept");
    }

    #[test]
    fn reapplying_is_a_no_op() {
        let once = SAMPLE.apply(record(json!({ "oldname": "x", "flagx": 0 })));
        let twice = SAMPLE.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn legacy_keys_skip_identity_renames() {
        let keys: Vec<_> = SAMPLE.legacy_keys().collect();
        assert_eq!(keys, vec!["oldname", "flagx", "junk"]);
    }
}
