//! Property tests for parse/serialize round trips.

use canon_json::{parse, serialize, serialize_pretty, JsonValue, Object};
use proptest::prelude::*;

/// Finite values only: NaN and infinities have no JSON spelling.
fn arb_value() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<f64>()
            .prop_filter("finite", |n| n.is_finite())
            .prop_map(JsonValue::Number),
        any::<i32>().prop_map(JsonValue::from),
        any::<String>().prop_map(JsonValue::String),
        "[\\x00-\\x1f\"\\\\/]{0,8}".prop_map(JsonValue::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(JsonValue::Array),
            prop::collection::vec((any::<String>(), inner), 0..8)
                .prop_map(|pairs| JsonValue::Object(pairs.into_iter().collect::<Object>())),
        ]
    })
}

proptest! {
    #[test]
    fn serialize_then_parse_is_identity(value in arb_value()) {
        let text = serialize(&value);
        let reparsed = parse(&text).map_err(|e| TestCaseError::fail(format!("{text}: {e}")))?;
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn serialization_is_idempotent(value in arb_value()) {
        let once = serialize(&value);
        let twice = serialize(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn pretty_output_parses_to_same_value(value in arb_value()) {
        let reparsed = parse(&serialize_pretty(&value)).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn numbers_keep_their_bits(n in any::<f64>().prop_filter("not NaN", |n| !n.is_nan())) {
        let text = serialize(&JsonValue::Number(n));
        let back = parse(&text).unwrap().to_number();
        prop_assert_eq!(back.to_bits(), n.to_bits(), "{}", text);
    }

    #[test]
    fn arbitrary_input_never_panics(input in any::<String>()) {
        let _ = parse(&input);
    }

    #[test]
    fn canonical_output_is_accepted_by_serde_json(value in arb_value()) {
        let text = serialize(&value);
        prop_assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok(), "{}", text);
    }
}
