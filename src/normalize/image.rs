use serde::Serialize;
use serde_json::Value;

use super::{rename, RawRecord, RuleSet};

static IMAGE: RuleSet = RuleSet {
    drop: &["contentid", "serialnum"],
    rules: &[
        rename("originimgurl", "origin"),
        rename("smallimageurl", "small"),
    ],
    coercions: &[],
};

/// One gallery entry: the full-size image and its thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub origin: Option<String>,
    pub small: Option<String>,
}

impl ImageRecord {
    pub fn from_raw(raw: RawRecord) -> Self {
        let mut record = IMAGE.apply(raw);
        ImageRecord {
            origin: take_string(&mut record, "origin"),
            small: take_string(&mut record, "small"),
        }
    }
}

fn take_string(record: &mut RawRecord, key: &str) -> Option<String> {
    match record.remove(key)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// `None` in, `None` out: an envelope without a gallery means "no images".
pub fn normalize_images(items: Option<Vec<RawRecord>>) -> Option<Vec<ImageRecord>> {
    items.map(|list| list.into_iter().map(ImageRecord::from_raw).collect())
}
