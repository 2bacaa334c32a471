use chrono::{NaiveDate, NaiveDateTime};
use dynamodb_json::{decode, decode_str, AttributeValueDecoder, NativeValue};
use serde_json::json;

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, us: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_micro_opt(h, mi, s, us))
        .expect("valid timestamp")
}

fn s(v: &str) -> NativeValue {
    NativeValue::String(v.to_string())
}

#[test]
fn string_tag_recovers_timestamps() {
    let expected = NaiveDateTime::parse_from_str("2020-01-02T03:04:05.123456", "%Y-%m-%dT%H:%M:%S%.f")
        .expect("literal parses");
    assert_eq!(
        decode(json!({"S": "2020-01-02T03:04:05.123456"})),
        NativeValue::Timestamp(expected)
    );
    assert_eq!(expected, ts(2020, 1, 2, 3, 4, 5, 123_456));
}

#[test]
fn string_tag_keeps_other_strings() {
    assert_eq!(decode(json!({"S": "hello"})), s("hello"));
    assert_eq!(decode(json!({"S": ""})), s(""));
    assert_eq!(
        decode(json!({"S": "2020-01-02T03:04:05Z"})),
        s("2020-01-02T03:04:05Z")
    );
    assert_eq!(decode(json!({"S": "2020-01-02"})), s("2020-01-02"));
}

#[test]
fn string_tag_keeps_near_miss_timestamps_verbatim() {
    for input in [
        " 2020-01-02T03:04:05.123456",
        "+2020-01-02T03:04:05.123456",
        "2020-01-02T03:04:60.123456",
    ] {
        assert_eq!(decode(json!({ "S": input })), s(input), "S = {input:?}");
    }
    let v = decode(json!({"M": {"at": {"S": " 2020-01-02T03:04:05.1"}}}));
    assert_eq!(v.get("at"), Some(&s(" 2020-01-02T03:04:05.1")));
}

#[test]
fn number_tag_matrix() {
    let cases = [
        ("3", NativeValue::Int(3)),
        ("0", NativeValue::Int(0)),
        ("-42", NativeValue::Int(-42)),
        ("3.5", NativeValue::Float(3.5)),
        ("-2.0", NativeValue::Float(-2.0)),
        ("0.25", NativeValue::Float(0.25)),
    ];
    for (input, expected) in cases {
        assert_eq!(decode(json!({ "N": input })), expected, "N = {input}");
    }
}

#[test]
fn set_tags_collapse_duplicates() {
    let v = decode(json!({"SS": ["a", "a", "b"]}));
    let NativeValue::Set(items) = &v else {
        panic!("expected a set, got {v:?}");
    };
    assert_eq!(items.len(), 2);
    assert!(items.contains(&s("a")));
    assert!(items.contains(&s("b")));

    // no per-element conversion for number or binary sets
    let v = decode(json!({"NS": ["1", "2.5", "1"]}));
    assert_eq!(v, NativeValue::Set(vec![s("1"), s("2.5")]));
    let v = decode(json!({"BS": ["AAE=", "AAE="]}));
    assert_eq!(v, NativeValue::Set(vec![s("AAE=")]));
}

#[test]
fn sets_compare_without_regard_to_order() {
    assert_eq!(
        decode(json!({"SS": ["a", "b"]})),
        decode(json!({"SS": ["b", "a"]}))
    );
    assert_eq!(
        decode(json!({"M": {"ids": {"NS": ["1", "2", "3"]}}})),
        decode(json!({"M": {"ids": {"NS": ["3", "1", "2", "1"]}}}))
    );
    assert_ne!(
        decode(json!({"SS": ["a", "b"]})),
        decode(json!({"SS": ["a", "c"]}))
    );
    assert_ne!(
        decode(json!({"L": [{"S": "a"}, {"S": "b"}]})),
        decode(json!({"L": [{"S": "b"}, {"S": "a"}]}))
    );
}

#[test]
fn large_string_sets_decode() {
    let members: Vec<String> = (0..60_000).map(|i| format!("k{i}")).collect();
    let v = decode(json!({ "SS": members }));
    assert_eq!(v.as_slice().map(<[_]>::len), Some(60_000));
}

#[test]
fn binary_and_bool_tags_are_verbatim() {
    assert_eq!(decode(json!({"B": "dGVzdA=="})), s("dGVzdA=="));
    assert_eq!(decode(json!({"BOOL": true})), NativeValue::Bool(true));
    assert_eq!(decode(json!({"BOOL": false})), NativeValue::Bool(false));
}

#[test]
fn null_tag_is_asymmetric() {
    assert_eq!(decode(json!({"NULL": true})), NativeValue::Null);

    let v = decode(json!({"NULL": false}));
    let mut expected = dynamodb_json::Mapping::new();
    expected.insert("NULL".into(), NativeValue::Bool(false));
    assert_eq!(v, NativeValue::Mapping(expected));
}

#[test]
fn map_tag_decodes_nested_values() {
    let v = decode(json!({"M": {"a": {"N": "1"}, "b": {"S": "x"}}}));
    let m = v.as_mapping().expect("mapping");
    assert_eq!(m.len(), 2);
    assert_eq!(m.get("a"), Some(&NativeValue::Int(1)));
    assert_eq!(m.get("b"), Some(&s("x")));
    assert_eq!(m.keys().collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn list_tag_preserves_order() {
    let v = decode(json!({"L": [{"N": "1"}, {"N": "2"}]}));
    assert_eq!(
        v,
        NativeValue::Sequence(vec![NativeValue::Int(1), NativeValue::Int(2)])
    );
}

#[test]
fn ambiguous_objects_follow_precedence() {
    assert_eq!(decode(json!({"N": "1", "S": "one"})), s("one"));
    assert_eq!(decode(json!({"B": "AA==", "N": "7"})), NativeValue::Int(7));
    assert_eq!(
        decode(json!({"NULL": true, "L": [{"BOOL": true}]})),
        NativeValue::Sequence(vec![NativeValue::Bool(true)])
    );
    assert_eq!(decode(json!({"BOOL": false, "NULL": true})), NativeValue::Bool(false));
}

#[test]
fn ordinary_object_recovers_timestamp_fields() {
    let v = decode(json!({
        "created": "2019-12-31T23:59:59.000001",
        "name": "widget",
        "count": 3,
    }));
    assert_eq!(
        v.get("created"),
        Some(&NativeValue::Timestamp(ts(2019, 12, 31, 23, 59, 59, 1)))
    );
    assert_eq!(v.get("name"), Some(&s("widget")));
    assert_eq!(v.get("count"), Some(&NativeValue::Int(3)));
}

#[test]
fn full_item_document() {
    let doc = r#"{
        "id": {"S": "order-17"},
        "placed": {"S": "2023-04-05T06:07:08.900000"},
        "total": {"N": "19.99"},
        "lines": {"L": [
            {"M": {"sku": {"S": "A-1"}, "qty": {"N": "2"}}},
            {"M": {"sku": {"S": "B-2"}, "qty": {"N": "1"}, "note": {"NULL": true}}}
        ]},
        "tags": {"SS": ["gift", "gift", "rush"]},
        "paid": {"BOOL": true}
    }"#;
    let v = decode_str(doc).expect("valid json");

    assert_eq!(
        v.to_json(),
        json!({
            "id": "order-17",
            "placed": "2023-04-05T06:07:08.900000",
            "total": 19.99,
            "lines": [
                {"sku": "A-1", "qty": 2},
                {"sku": "B-2", "qty": 1, "note": null}
            ],
            "tags": ["gift", "rush"],
            "paid": true
        })
    );
    assert_eq!(
        v.get("placed"),
        Some(&NativeValue::Timestamp(ts(2023, 4, 5, 6, 7, 8, 900_000)))
    );
}

#[test]
fn top_level_arrays_are_decoded_elementwise() {
    let v = AttributeValueDecoder::new().decode(json!([{"N": "1"}, {"S": "a"}, 5]));
    assert_eq!(
        v,
        NativeValue::Sequence(vec![NativeValue::Int(1), s("a"), NativeValue::Int(5)])
    );
}
