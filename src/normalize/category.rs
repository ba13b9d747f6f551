//! Content-type dispatch for `detailIntro` records.
//!
//! Each category returns its own set of verbosely suffixed keys
//! (`chkcreditcardshopping`, `infocenterlodging`, ...). The tables below map
//! them to short names shared across categories where the meaning matches.

use serde_json::Value;

use super::{rename, rename_or_false, CanonicalRecord, Coercion, RawRecord, RuleSet};

/// The caller already knows these, so intro records never carry them.
const IDENTIFIERS: &[&str] = &["contentid", "contenttypeid"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Attraction,
    CulturalFacility,
    Festival,
    TourCourse,
    Leisure,
    Lodging,
    Shopping,
    Food,
    /// A code outside the documented schema; records pass through as-is.
    Other(i64),
}

impl ContentType {
    pub fn from_code(code: i64) -> Self {
        match code {
            12 => ContentType::Attraction,
            14 => ContentType::CulturalFacility,
            15 => ContentType::Festival,
            25 => ContentType::TourCourse,
            28 => ContentType::Leisure,
            32 => ContentType::Lodging,
            38 => ContentType::Shopping,
            39 => ContentType::Food,
            other => ContentType::Other(other),
        }
    }

    /// Read a `contenttypeid`, which upstream sends as a number or a numeric string.
    pub fn from_value(value: &Value) -> Option<Self> {
        let code = match value {
            Value::Number(n) => n.as_i64()?,
            Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        Some(Self::from_code(code))
    }

    pub fn code(self) -> i64 {
        match self {
            ContentType::Attraction => 12,
            ContentType::CulturalFacility => 14,
            ContentType::Festival => 15,
            ContentType::TourCourse => 25,
            ContentType::Leisure => 28,
            ContentType::Lodging => 32,
            ContentType::Shopping => 38,
            ContentType::Food => 39,
            ContentType::Other(code) => code,
        }
    }

    pub fn rule_set(self) -> Option<&'static RuleSet> {
        match self {
            ContentType::Attraction => Some(&ATTRACTION),
            ContentType::CulturalFacility => Some(&CULTURAL_FACILITY),
            ContentType::Festival => Some(&FESTIVAL),
            ContentType::TourCourse => Some(&TOUR_COURSE),
            ContentType::Leisure => Some(&LEISURE),
            ContentType::Lodging => Some(&LODGING),
            ContentType::Shopping => Some(&SHOPPING),
            ContentType::Food => Some(&FOOD),
            ContentType::Other(_) => None,
        }
    }
}

pub fn normalize_intro(mut raw: RawRecord, content_type: ContentType) -> CanonicalRecord {
    for key in IDENTIFIERS {
        raw.remove(*key);
    }
    match content_type.rule_set() {
        Some(rules) => rules.apply(raw),
        None => raw,
    }
}

// ── Tables ──

pub static ATTRACTION: RuleSet = RuleSet {
    drop: &[],
    rules: &[
        rename("accomcount", "capacity"),
        rename("chkbabycarriage", "stroller"),
        rename("chkcreditcard", "credit_card"),
        rename("chkpet", "pet"),
        rename("expagerange", "age_range"),
        rename("expguide", "experience_guide"),
        rename("heritage1", "cultural_heritage"),
        rename("heritage2", "natural_heritage"),
        rename("heritage3", "archival_heritage"),
        rename("infocenter", "info_center"),
        rename("opendate", "open_date"),
        rename("parking", "parking"),
        rename("restdate", "rest_date"),
        rename("useseason", "use_season"),
        rename("usetime", "use_time"),
    ],
    coercions: &[
        ("cultural_heritage", Coercion::Flag),
        ("natural_heritage", Coercion::Flag),
        ("archival_heritage", Coercion::Flag),
        ("info_center", Coercion::Lines),
    ],
};

pub static CULTURAL_FACILITY: RuleSet = RuleSet {
    drop: &[],
    rules: &[
        rename("accomcountculture", "capacity"),
        rename("chkbabycarriageculture", "stroller"),
        rename("chkcreditcardculture", "credit_card"),
        rename("chkpetculture", "pet"),
        rename("discountinfo", "discount"),
        rename("infocenterculture", "info_center"),
        rename("parkingculture", "parking"),
        rename("parkingfee", "parking_fee"),
        rename("restdateculture", "rest_date"),
        rename("usefee", "fee"),
        rename("usetimeculture", "use_time"),
        rename("scale", "scale"),
        rename("spendtime", "spend_time"),
    ],
    coercions: &[],
};

pub static FESTIVAL: RuleSet = RuleSet {
    // Superseded by the common record's homepage.
    drop: &["eventhomepage"],
    rules: &[
        rename("agelimit", "age_limit"),
        rename("bookingplace", "booking_place"),
        rename("discountinfofestival", "discount"),
        rename("eventstartdate", "start_date"),
        rename("eventenddate", "end_date"),
        rename("eventplace", "place"),
        rename("festivalgrade", "grade"),
        rename("placeinfo", "place_info"),
        rename("playtime", "play_time"),
        rename("program", "program"),
        rename("spendtimefestival", "spend_time"),
        rename("sponsor1", "host"),
        rename("sponsor1tel", "host_tel"),
        rename("sponsor2", "organizer"),
        rename("sponsor2tel", "organizer_tel"),
        rename("subevent", "sub_event"),
        // Upstream stores the admission fee under this name.
        rename("usetimefestival", "fee"),
    ],
    coercions: &[],
};

pub static TOUR_COURSE: RuleSet = RuleSet {
    drop: &[],
    rules: &[
        rename("distance", "distance"),
        rename("infocentertourcourse", "info_center"),
        rename("schedule", "schedule"),
        rename("taketime", "take_time"),
        rename("theme", "theme"),
    ],
    coercions: &[],
};

pub static LEISURE: RuleSet = RuleSet {
    drop: &[],
    rules: &[
        rename("accomcountleports", "capacity"),
        rename("chkbabycarriageleports", "stroller"),
        rename("chkcreditcardleports", "credit_card"),
        rename("chkpetleports", "pet"),
        rename("expagerangeleports", "age_range"),
        rename("infocenterleports", "info_center"),
        rename("openperiod", "open_period"),
        rename("parkingfeeleports", "parking_fee"),
        rename("parkingleports", "parking"),
        rename("reservation", "reservation"),
        rename("restdateleports", "rest_date"),
        rename("scaleleports", "scale"),
        rename("usefeeleports", "fee"),
        rename("usetimeleports", "use_time"),
    ],
    coercions: &[],
};

pub static LODGING: RuleSet = RuleSet {
    drop: &[],
    rules: &[
        rename("accomcountlodging", "capacity"),
        rename("checkintime", "checkin_time"),
        rename("checkouttime", "checkout_time"),
        rename("chkcooking", "cooking"),
        rename("foodplace", "food_place"),
        rename("infocenterlodging", "info_center"),
        rename("parkinglodging", "parking"),
        rename("pickup", "pickup"),
        rename("roomcount", "room_count"),
        rename("reservationlodging", "reservation"),
        rename("reservationurl", "reservation_url"),
        rename("roomtype", "room_type"),
        rename("scalelodging", "scale"),
        rename("subfacility", "sub_facility"),
        rename("refundregulation", "refund_policy"),
        rename_or_false("barbecue", "barbecue"),
        rename_or_false("beauty", "beauty"),
        rename_or_false("beverage", "beverage"),
        rename_or_false("bicycle", "bicycle"),
        rename_or_false("campfire", "campfire"),
        rename_or_false("fitness", "fitness"),
        rename_or_false("karaoke", "karaoke"),
        rename_or_false("publicbath", "public_bath"),
        rename_or_false("publicpc", "public_pc"),
        rename_or_false("sauna", "sauna"),
        rename_or_false("seminar", "seminar"),
    ],
    coercions: &[
        ("barbecue", Coercion::Flag),
        ("beauty", Coercion::Flag),
        ("beverage", Coercion::Flag),
        ("bicycle", Coercion::Flag),
        ("campfire", Coercion::Flag),
        ("fitness", Coercion::Flag),
        ("karaoke", Coercion::Flag),
        ("public_bath", Coercion::Flag),
        ("public_pc", Coercion::Flag),
        ("sauna", Coercion::Flag),
        ("seminar", Coercion::Flag),
    ],
};

pub static SHOPPING: RuleSet = RuleSet {
    drop: &[],
    rules: &[
        rename("chkbabycarriageshopping", "stroller"),
        rename("chkcreditcardshopping", "credit_card"),
        rename("chkpetshopping", "pet"),
        rename("culturecenter", "culture_center"),
        rename("fairday", "fair_day"),
        rename("infocentershopping", "info_center"),
        rename("opendateshopping", "open_date"),
        rename("opentime", "open_time"),
        rename("parkingshopping", "parking"),
        rename("restdateshopping", "rest_date"),
        rename("restroom", "restroom"),
        rename("saleitem", "sale_item"),
        rename("saleitemcost", "sale_item_cost"),
        rename("scaleshopping", "scale"),
        rename("shopguide", "shop_guide"),
    ],
    coercions: &[],
};

pub static FOOD: RuleSet = RuleSet {
    drop: &[],
    rules: &[
        rename("chkcreditcardfood", "credit_card"),
        rename("discountinfofood", "discount"),
        rename("firstmenu", "signature_menu"),
        rename("infocenterfood", "info_center"),
        rename("kidsfacility", "kids_facility"),
        rename("lcnsno", "license_no"),
        rename("opendatefood", "open_date"),
        rename("opentimefood", "open_time"),
        rename("packing", "packing"),
        rename("parkingfood", "parking"),
        rename("reservationfood", "reservation"),
        rename("restdatefood", "rest_date"),
        rename("scalefood", "scale"),
        rename("seat", "seats"),
        rename("smoking", "smoking"),
        rename("treatmenu", "menu"),
    ],
    coercions: &[("kids_facility", Coercion::Flag)],
};
