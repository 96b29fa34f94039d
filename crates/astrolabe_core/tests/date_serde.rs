use astrolabe_core::{Date, DateUnit, Weekday};
use serde_json::json;

#[test]
fn date_serializes_as_iso_string() {
    let date = Date::from_ymd(2024, 2, 29).unwrap();
    assert_eq!(serde_json::to_value(date).unwrap(), json!("2024-02-29"));

    let ancient = Date::from_ymd(-44, 3, 15).unwrap();
    assert_eq!(serde_json::to_value(ancient).unwrap(), json!("-0044-03-15"));
}

#[test]
fn date_deserializes_and_validates() {
    let decoded: Date = serde_json::from_value(json!("2000-02-29")).unwrap();
    assert_eq!(decoded, Date::from_ymd(2000, 2, 29).unwrap());

    let err = serde_json::from_value::<Date>(json!("1900-02-29")).unwrap_err();
    assert!(err.to_string().contains("out of range"), "unexpected error: {err}");

    for text in ["29/02/2000", "2000-\u{660}\u{662}-29", " 2000-02-29"] {
        let err = serde_json::from_value::<Date>(json!(text)).unwrap_err();
        assert!(err.to_string().contains("invalid format"), "unexpected error: {err}");
    }
}

#[test]
fn units_and_weekdays_use_snake_case() {
    assert_eq!(serde_json::to_value(DateUnit::Month).unwrap(), json!("month"));
    assert_eq!(serde_json::to_value(Weekday::Sunday).unwrap(), json!("sunday"));
    let unit: DateUnit = serde_json::from_value(json!("year")).unwrap();
    assert_eq!(unit, DateUnit::Year);
}

#[test]
fn dates_nested_in_structs() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Range {
        start: Date,
        end: Date,
    }

    let range = Range {
        start: Date::from_ymd(2024, 1, 1).unwrap(),
        end: Date::from_ymd(2024, 12, 31).unwrap(),
    };
    let value = serde_json::to_value(&range).unwrap();
    assert_eq!(value, json!({"start": "2024-01-01", "end": "2024-12-31"}));
    let decoded: Range = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, range);
}
