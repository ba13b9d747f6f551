//! Client configuration and the request URL templates derived from it.
//!
//! [`ClientConfig::from_env`] layers `TOURAPI_*` environment variables over the
//! built-in defaults. [`Endpoints`] is computed once per client and never
//! changes afterwards.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_ENDPOINT: &str = "http://api.visitkorea.or.kr/openapi/service/rest/KorService";
const DEFAULT_MOBILE_APP: &str = "tourapi";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── Area codes ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(try_from = "i64")]
pub enum AreaCode {
    Seoul,
    Incheon,
    Daejeon,
    Daegu,
    Gwangju,
    Busan,
    Ulsan,
    Sejong,
    Gyeonggi,
    Gangwon,
    Chungbuk,
    Chungnam,
    Gyeongbuk,
    Gyeongnam,
    Jeonbuk,
    Jeonnam,
    Jeju,
}

const AREA_CODES: &[(AreaCode, i64)] = &[
    (AreaCode::Seoul, 1),
    (AreaCode::Incheon, 2),
    (AreaCode::Daejeon, 3),
    (AreaCode::Daegu, 4),
    (AreaCode::Gwangju, 5),
    (AreaCode::Busan, 6),
    (AreaCode::Ulsan, 7),
    (AreaCode::Sejong, 8),
    (AreaCode::Gyeonggi, 31),
    (AreaCode::Gangwon, 32),
    (AreaCode::Chungbuk, 33),
    (AreaCode::Chungnam, 34),
    (AreaCode::Gyeongbuk, 35),
    (AreaCode::Gyeongnam, 36),
    (AreaCode::Jeonbuk, 37),
    (AreaCode::Jeonnam, 38),
    (AreaCode::Jeju, 39),
];

impl AreaCode {
    pub fn code(self) -> i64 {
        match self {
            AreaCode::Seoul => 1,
            AreaCode::Incheon => 2,
            AreaCode::Daejeon => 3,
            AreaCode::Daegu => 4,
            AreaCode::Gwangju => 5,
            AreaCode::Busan => 6,
            AreaCode::Ulsan => 7,
            AreaCode::Sejong => 8,
            AreaCode::Gyeonggi => 31,
            AreaCode::Gangwon => 32,
            AreaCode::Chungbuk => 33,
            AreaCode::Chungnam => 34,
            AreaCode::Gyeongbuk => 35,
            AreaCode::Gyeongnam => 36,
            AreaCode::Jeonbuk => 37,
            AreaCode::Jeonnam => 38,
            AreaCode::Jeju => 39,
        }
    }
}

impl TryFrom<i64> for AreaCode {
    type Error = String;

    fn try_from(code: i64) -> std::result::Result<Self, Self::Error> {
        AREA_CODES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(area, _)| *area)
            .ok_or_else(|| format!("unknown area code {}", code))
    }
}

// ── Mobile OS tag ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(try_from = "String")]
pub enum MobileOs {
    Android,
    Ios,
    Windows,
    #[default]
    Etc,
}

impl MobileOs {
    pub fn as_param(self) -> &'static str {
        match self {
            MobileOs::Android => "AND",
            MobileOs::Ios => "IOS",
            MobileOs::Windows => "WIN",
            MobileOs::Etc => "ETC",
        }
    }
}

impl fmt::Display for MobileOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for MobileOs {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" | "ANDROID" => Ok(MobileOs::Android),
            "IOS" => Ok(MobileOs::Ios),
            "WIN" | "WINDOWS" => Ok(MobileOs::Windows),
            "ETC" | "OTHER" => Ok(MobileOs::Etc),
            other => Err(format!("unknown mobile OS tag {:?}", other)),
        }
    }
}

impl TryFrom<String> for MobileOs {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

// ── Client configuration ──

/// Per-client settings embedded into every request URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Issued already percent-encoded, so it is inserted into URLs verbatim.
    pub service_key: String,
    #[serde(default = "default_area_code")]
    pub area_code: AreaCode,
    #[serde(default)]
    pub mobile_os: MobileOs,
    #[serde(default = "default_mobile_app")]
    pub mobile_app: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_area_code() -> AreaCode { AreaCode::Seoul }
fn default_mobile_app() -> String { DEFAULT_MOBILE_APP.to_string() }
fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }

impl ClientConfig {
    pub fn new(service_key: impl Into<String>, area_code: AreaCode) -> Self {
        ClientConfig {
            service_key: service_key.into(),
            area_code,
            mobile_os: MobileOs::default(),
            mobile_app: default_mobile_app(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Read `TOURAPI_SERVICE_KEY`, `TOURAPI_AREA_CODE`, `TOURAPI_MOBILE_OS`,
    /// `TOURAPI_MOBILE_APP`, `TOURAPI_ENDPOINT` and `TOURAPI_TIMEOUT_SECS`.
    /// Only the service key is required.
    pub fn from_env() -> Result<Self> {
        Self::from_source(config::Environment::with_prefix("TOURAPI"))
    }

    pub(crate) fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder().add_source(source).build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ── URL templates ──

/// Request URL prefixes for each upstream operation, with the per-client
/// parameters already filled in.
#[derive(Debug, Clone)]
pub struct Endpoints {
    tour_list: String,
    detail_common: String,
    detail_intro: String,
    detail_image: String,
}

impl Endpoints {
    pub fn new(config: &ClientConfig) -> Self {
        let base = config.endpoint.trim_end_matches('/');
        let params = format!(
            "areaCode={}&ServiceKey={}&MobileOS={}&MobileApp={}&_type=json",
            config.area_code.code(),
            config.service_key,
            config.mobile_os.as_param(),
            config.mobile_app,
        );

        Endpoints {
            tour_list: format!("{}/areaBasedList?{}", base, params),
            detail_common: format!("{}/detailCommon?defaultYN=Y&overviewYN=Y&{}", base, params),
            detail_intro: format!("{}/detailIntro?{}", base, params),
            detail_image: format!("{}/detailImage?imageYN=Y&{}", base, params),
        }
    }

    pub fn tour_list(&self) -> &str {
        &self.tour_list
    }

    pub fn detail_common(&self, content_id: i64) -> String {
        format!("{}&contentId={}", self.detail_common, content_id)
    }

    pub fn detail_intro(&self, content_id: i64, content_type_id: i64) -> String {
        format!(
            "{}&contentId={}&contentTypeId={}",
            self.detail_intro, content_id, content_type_id
        )
    }

    pub fn detail_image(&self, content_id: i64) -> String {
        format!("{}&contentId={}", self.detail_image, content_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_codes_round_trip_through_integers() {
        assert_eq!(AreaCode::Seoul.code(), 1);
        assert_eq!(AreaCode::Gyeonggi.code(), 31);
        assert_eq!(AreaCode::Jeju.code(), 39);
        assert_eq!(AreaCode::try_from(36), Ok(AreaCode::Gyeongnam));
        assert!(AreaCode::try_from(9).is_err());
    }

    #[test]
    fn every_area_code_maps_both_ways() {
        assert_eq!(AREA_CODES.len(), 17);
        for &(area, code) in AREA_CODES {
            assert_eq!(area.code(), code, "{:?}", area);
            assert_eq!(AreaCode::try_from(code), Ok(area));
        }
    }

    #[test]
    fn mobile_os_params() {
        assert_eq!("and".parse::<MobileOs>(), Ok(MobileOs::Android));
        assert_eq!("IOS".parse::<MobileOs>(), Ok(MobileOs::Ios));
        assert_eq!(MobileOs::Etc.as_param(), "ETC");
        assert!("beos".parse::<MobileOs>().is_err());
    }

    #[test]
    fn endpoints_embed_client_params() {
        let mut config = ClientConfig::new("KEY%2B1", AreaCode::Busan);
        config.mobile_os = MobileOs::Ios;
        config.mobile_app = "guide".into();
        config.endpoint = "http://host/KorService/".into();
        let endpoints = Endpoints::new(&config);

        assert_eq!(
            endpoints.tour_list(),
            "http://host/KorService/areaBasedList?areaCode=6&ServiceKey=KEY%2B1&MobileOS=IOS&MobileApp=guide&_type=json"
        );
        assert!(endpoints
            .detail_common(126508)
            .starts_with("http://host/KorService/detailCommon?defaultYN=Y&overviewYN=Y&areaCode=6"));
        assert!(endpoints.detail_common(126508).ends_with("&contentId=126508"));
        assert!(endpoints
            .detail_intro(126508, 12)
            .ends_with("&contentId=126508&contentTypeId=12"));
        assert!(endpoints
            .detail_image(7)
            .starts_with("http://host/KorService/detailImage?imageYN=Y&"));
    }

    #[test]
    fn config_from_source_applies_defaults() {
        let source = config::File::from_str(
            r#"{ "service_key": "abc", "area_code": 39 }"#,
            config::FileFormat::Json,
        );
        let config = ClientConfig::from_source(source).unwrap();
        assert_eq!(config.service_key, "abc");
        assert_eq!(config.area_code, AreaCode::Jeju);
        assert_eq!(config.mobile_os, MobileOs::Etc);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn config_requires_service_key() {
        let source = config::File::from_str(r#"{ "area_code": 1 }"#, config::FileFormat::Json);
        assert!(ClientConfig::from_source(source).is_err());
    }
}
