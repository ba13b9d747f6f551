//! Rule sets shared by listing records and common-detail records.

use super::{rename, CanonicalRecord, Coercion, RawRecord, RuleSet};

/// Area/administrative codes, the map zoom hint and the secondary address line.
const DROPPED: &[&str] = &["areacode", "sigungucode", "mlevel", "addr2"];

pub static LIST_RULES: RuleSet = RuleSet {
    drop: DROPPED,
    rules: &[
        rename("contentid", "content_id"),
        rename("contenttypeid", "content_type_id"),
        rename("title", "title"),
        rename("addr1", "address"),
        rename("zipcode", "zip_code"),
        rename("tel", "tel"),
        rename("cat1", "main_category"),
        rename("cat2", "middle_category"),
        rename("cat3", "small_category"),
        rename("firstimage", "image"),
        rename("firstimage2", "thumbnail"),
        rename("mapx", "x"),
        rename("mapy", "y"),
        rename("readcount", "views"),
        rename("booktour", "book_tour"),
        rename("createdtime", "creation_date"),
        rename("modifiedtime", "modification_date"),
    ],
    coercions: &[
        ("creation_date", Coercion::Date),
        ("modification_date", Coercion::Date),
    ],
};

/// Listing fields plus the ones only `detailCommon` returns.
pub static DETAIL_COMMON_RULES: RuleSet = RuleSet {
    drop: DROPPED,
    rules: &[
        rename("contentid", "content_id"),
        rename("contenttypeid", "content_type_id"),
        rename("title", "title"),
        rename("addr1", "address"),
        rename("zipcode", "zip_code"),
        rename("tel", "tel"),
        rename("telname", "tel_name"),
        rename("homepage", "homepage"),
        rename("overview", "overview"),
        rename("cat1", "main_category"),
        rename("cat2", "middle_category"),
        rename("cat3", "small_category"),
        rename("firstimage", "image"),
        rename("firstimage2", "thumbnail"),
        rename("mapx", "x"),
        rename("mapy", "y"),
        rename("readcount", "views"),
        rename("booktour", "book_tour"),
        rename("createdtime", "creation_date"),
        rename("modifiedtime", "modification_date"),
    ],
    coercions: &[
        ("creation_date", Coercion::Date),
        ("modification_date", Coercion::Date),
        ("homepage", Coercion::FirstUrl),
    ],
};

pub fn normalize_common(raw: RawRecord, rules: &RuleSet) -> CanonicalRecord {
    rules.apply(raw)
}

pub fn normalize_listing(raw: RawRecord) -> CanonicalRecord {
    normalize_common(raw, &LIST_RULES)
}

pub fn normalize_detail_common(raw: RawRecord) -> CanonicalRecord {
    normalize_common(raw, &DETAIL_COMMON_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(v: Value) -> RawRecord {
        v.as_object().cloned().unwrap()
    }

    fn listing() -> RawRecord {
        record(json!({
            "addr1": "서울특별시 종로구 사직로 161",
            "addr2": "(세종로)",
            "areacode": 1,
            "cat1": "A02",
            "cat2": "A0201",
            "cat3": "A02010100",
            "contentid": 126508,
            "contenttypeid": 12,
            "createdtime": 20070116000000_i64,
            "firstimage": "http://tong.visitkorea.or.kr/cms/resource/33/2678633_image2_1.jpg",
            "firstimage2": "http://tong.visitkorea.or.kr/cms/resource/33/2678633_image3_1.jpg",
            "mapx": 126.9767375783,
            "mapy": 37.5760836609,
            "mlevel": 6,
            "modifiedtime": "20230401153000",
            "readcount": 58312,
            "sigungucode": 23,
            "tel": "02-3700-3900",
            "title": "경복궁",
            "zipcode": "03045"
        }))
    }

    #[test]
    fn listing_renames_and_drops() {
        let out = normalize_listing(listing());
        assert_eq!(out["content_id"], 126508);
        assert_eq!(out["content_type_id"], 12);
        assert_eq!(out["address"], "서울특별시 종로구 사직로 161");
        assert_eq!(out["small_category"], "A02010100");
        assert_eq!(out["views"], 58312);
        assert_eq!(out["creation_date"], "20070116");
        assert_eq!(out["modification_date"], "20230401");
        assert_eq!(out["book_tour"], Value::Null);
        for dropped in DROPPED {
            assert!(!out.contains_key(*dropped), "{} leaked", dropped);
        }
        assert!(!out.contains_key("homepage"));
    }

    #[test]
    fn no_legacy_keys_leak() {
        let out = normalize_listing(listing());
        for key in LIST_RULES.legacy_keys() {
            assert!(!out.contains_key(key), "{} leaked", key);
        }
    }

    #[test]
    fn empty_record_gets_every_declared_key() {
        let out = normalize_detail_common(RawRecord::new());
        for key in DETAIL_COMMON_RULES.canonical_keys() {
            assert_eq!(out.get(key), Some(&Value::Null), "{} missing", key);
        }
        assert_eq!(out.len(), DETAIL_COMMON_RULES.rules.len());
    }

    #[test]
    fn detail_extracts_homepage() {
        let mut raw = listing();
        raw.insert(
            "homepage".into(),
            json!("<a href=\"http://www.royalpalace.go.kr\" target=\"_blank\">royalpalace.go.kr</a>"),
        );
        raw.insert("overview".into(), json!("조선왕조 제일의 법궁"));
        let out = normalize_detail_common(raw);
        assert_eq!(out["homepage"], "http://www.royalpalace.go.kr");
        assert_eq!(out["overview"], "조선왕조 제일의 법궁");
        assert_eq!(out["tel_name"], Value::Null);
    }

    #[test]
    fn homepage_without_url_is_null() {
        let mut raw = listing();
        raw.insert("homepage".into(), json!("홈페이지 없음"));
        assert_eq!(normalize_detail_common(raw)["homepage"], Value::Null);
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let once = normalize_detail_common(listing());
        assert_eq!(normalize_detail_common(once.clone()), once);
    }
}
