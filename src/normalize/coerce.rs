use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[A-Za-z0-9\-._~:/?#\[\]@!$&*+,;=%]+").unwrap());
static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

const DATE_LEN: usize = 8;

/// `"20230401153000"` → `"20230401"`. Integer timestamps are stringified first.
pub fn date(value: Value) -> Value {
    let raw = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        other => return other,
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::Null;
    }
    Value::String(raw.chars().take(DATE_LEN).collect())
}

/// First HTTP(S) URL inside free text, e.g. an `<a href=...>` snippet.
/// Surrounding Hangul and trailing sentence punctuation are not part of it.
pub fn first_url(value: Value) -> Value {
    match value {
        Value::String(s) => URL_RE
            .find(&s)
            .map(|m| Value::String(m.as_str().trim_end_matches(['.', ',']).to_string()))
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// Upstream flags are `1`/`0`, as integers, floats or strings.
pub fn flag(value: Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(b),
        Value::Number(n) => Value::Bool(n.as_f64() == Some(1.0)),
        Value::String(s) => Value::Bool(s.trim() == "1"),
        _ => Value::Bool(false),
    }
}

pub fn lines(value: Value) -> Value {
    match value {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(list) => Value::Array(list),
        Value::String(s) => Value::Array(
            BR_RE
                .split(&s)
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| Value::String(line.to_string()))
                .collect(),
        ),
        other => Value::Array(vec![Value::String(other.to_string())]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn date_truncates_timestamp() {
        assert_eq!(date(json!("20230401153000")), json!("20230401"));
        assert_eq!(date(json!(20230401153000_i64)), json!("20230401"));
        assert_eq!(date(json!("20230401")), json!("20230401"));
        assert_eq!(date(Value::Null), Value::Null);
    }

    #[test]
    fn blank_date_is_null() {
        assert_eq!(date(json!("")), Value::Null);
        assert_eq!(date(json!("   ")), Value::Null);
    }

    #[test]
    fn first_url_in_free_text() {
        assert_eq!(first_url(json!("방문 http://example.co.kr 입니다")), json!("http://example.co.kr"));
        assert_eq!(
            first_url(json!(r#"<a href="https://www.visitseoul.net" target="_blank">홈페이지</a>"#)),
            json!("https://www.visitseoul.net")
        );
    }

    #[test]
    fn first_url_stops_at_surrounding_text() {
        let palace = json!("http://www.royalpalace.go.kr");
        assert_eq!(first_url(json!("홈페이지 http://www.royalpalace.go.kr입니다")), palace);
        assert_eq!(first_url(json!("홈페이지(http://www.royalpalace.go.kr)")), palace);
        assert_eq!(first_url(json!("홈페이지: http://www.royalpalace.go.kr.")), palace);
        assert_eq!(first_url(json!("http://www.royalpalace.go.kr, 02-3700-3900")), palace);
        assert_eq!(
            first_url(json!("예약 https://booking.example.kr/ko/index.do?lang=ko&id=7#top 참고")),
            json!("https://booking.example.kr/ko/index.do?lang=ko&id=7#top")
        );
    }

    #[test]
    fn first_url_without_match_is_null() {
        assert_eq!(first_url(json!("www.example.com")), Value::Null);
        assert_eq!(first_url(json!("")), Value::Null);
        assert_eq!(first_url(Value::Null), Value::Null);
    }

    #[test]
    fn flag_decoding() {
        assert_eq!(flag(json!(1)), json!(true));
        assert_eq!(flag(json!(0)), json!(false));
        assert_eq!(flag(json!(1.0)), json!(true));
        assert_eq!(flag(json!(0.0)), json!(false));
        assert_eq!(flag(json!("1")), json!(true));
        assert_eq!(flag(json!("")), json!(false));
        assert_eq!(flag(Value::Null), Value::Null);
        assert_eq!(flag(json!(true)), json!(true));
    }

    #[test]
    fn lines_split_on_br() {
        assert_eq!(lines(json!("A \n <br /> \n B")), json!(["A", "B"]));
        assert_eq!(lines(json!("02-123-4567<br>02-765-4321<BR/>")), json!(["02-123-4567", "02-765-4321"]));
        assert_eq!(lines(Value::Null), json!([]));
        assert_eq!(lines(json!(["kept"])), json!(["kept"]));
    }
}
