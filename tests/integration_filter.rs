//! End-to-end tests for the redaction filter.
//!
//! These tests exercise the integration of:
//! - blacklist/whitelist policy resolution,
//! - shape classification (objects, arrays, JSON text, errors, wrappers), and
//! - the recursive redaction walk over realistic payloads.

use scrublog::{LoggerFilter, PLACEHOLDER, RedactionPolicy};
use serde_json::{Map, Value, json};

fn default_filter() -> LoggerFilter {
    LoggerFilter::default()
}

fn filter_with(include: &[&str], exclude: &[&str], whitelist: &[&str]) -> LoggerFilter {
    LoggerFilter::new(RedactionPolicy::new(include, exclude, whitelist))
}

fn process(filter: &LoggerFilter, value: &Value) -> Map<String, Value> {
    filter.process(Some(value))
}

mod defensive_input {
    use super::*;

    #[test]
    fn returns_empty_map_for_absent_input() {
        assert!(default_filter().process(None::<&Value>).is_empty());
    }

    #[test]
    fn returns_empty_map_for_non_object_input() {
        let filter = default_filter();
        assert!(process(&filter, &json!("just a string")).is_empty());
        assert!(process(&filter, &json!(17)).is_empty());
        assert!(process(&filter, &json!(null)).is_empty());
        assert!(process(&filter, &json!(["a", "b"])).is_empty());
    }

    #[test]
    fn does_not_mutate_the_input() {
        let original = json!({"password": "hunter2", "user": "ada"});
        let snapshot = original.clone();
        let filter = default_filter();
        let _ = process(&filter, &original);
        assert_eq!(original, snapshot);
    }
}

mod blacklist_matching {
    use super::*;

    #[test]
    fn keeps_payload_without_sensitive_keys() {
        let item = json!({"word": "rust", "amount": 10, "flag": true});
        let out = process(&default_filter(), &item);
        assert_eq!(Value::Object(out), item);
    }

    #[test]
    fn replaces_default_blacklist_keys() {
        let out = process(
            &default_filter(),
            &json!({"password": "hunter2", "access_token": "abc", "user": "ada"}),
        );
        assert_eq!(out["password"], json!(PLACEHOLDER));
        assert_eq!(out["access_token"], json!(PLACEHOLDER));
        assert_eq!(out["user"], json!("ada"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lower = process(&default_filter(), &json!({"password": "x"}));
        let upper = process(&default_filter(), &json!({"PASSWORD": "x"}));
        assert_eq!(lower["password"], json!(PLACEHOLDER));
        assert_eq!(upper["PASSWORD"], json!(PLACEHOLDER));
    }

    #[test]
    fn matches_fragments_as_substrings() {
        let out = process(
            &default_filter(),
            &json!({"x-authorization-bearer": "abc", "customerCpf": "123"}),
        );
        assert_eq!(out["x-authorization-bearer"], json!(PLACEHOLDER));
        assert_eq!(out["customerCpf"], json!(PLACEHOLDER));
    }

    #[test]
    fn excluded_fragment_is_not_redacted() {
        let out = process(&filter_with(&[], &["token"], &[]), &json!({"token": "abc"}));
        assert_eq!(out["token"], json!("abc"));
    }

    #[test]
    fn included_fragment_is_redacted() {
        let out = process(
            &filter_with(&["device"], &[], &[]),
            &json!({"deviceFingerprint": "fp-1"}),
        );
        assert_eq!(out["deviceFingerprint"], json!(PLACEHOLDER));
    }

    #[test]
    fn whitelist_overrides_blacklist() {
        let out = process(
            &filter_with(&["device"], &[], &["device"]),
            &json!({"deviceFingerprint": "fp-1"}),
        );
        assert_eq!(out["deviceFingerprint"], json!("fp-1"));
    }

    #[test]
    fn redacts_any_value_shape_under_sensitive_key() {
        let filter = default_filter();
        for value in [
            json!("text"),
            json!(42),
            json!(true),
            json!(null),
            json!(["a", "b"]),
            json!({"nested": {"deep": 1}}),
        ] {
            let out = process(&filter, &json!({"secret": value }));
            assert_eq!(out["secret"], json!(PLACEHOLDER));
        }
    }
}

mod recursion {
    use super::*;

    #[test]
    fn redacts_inside_nested_objects() {
        let out = process(
            &default_filter(),
            &json!({"request": {"headers": {"authorization": "Bearer x", "accept": "json"}}}),
        );
        assert_eq!(
            out["request"]["headers"]["authorization"],
            json!(PLACEHOLDER)
        );
        assert_eq!(out["request"]["headers"]["accept"], json!("json"));
    }

    #[test]
    fn redacts_objects_inside_arrays() {
        let out = process(
            &default_filter(),
            &json!({"users": [{"name": "ada", "password": "x"}, {"name": "bob"}]}),
        );
        assert_eq!(out["users"][0]["password"], json!(PLACEHOLDER));
        assert_eq!(out["users"][0]["name"], json!("ada"));
        assert_eq!(out["users"][1], json!({"name": "bob"}));
    }

    #[test]
    fn preserves_array_order_and_length() {
        let out = process(&default_filter(), &json!({"ids": ["a", "b", "c"]}));
        assert_eq!(out["ids"], json!(["a", "b", "c"]));
    }

    #[test]
    fn big_number_strings_pass_through_unchanged() {
        let out = process(&default_filter(), &json!({"value": "61009801560022021"}));
        assert_eq!(out["value"], json!("61009801560022021"));
    }
}

mod json_encoded_strings {
    use super::*;

    fn inner(out: &Map<String, Value>, key: &str) -> Value {
        let Value::String(text) = &out[key] else {
            panic!("expected re-encoded JSON string under {key:?}, got {:?}", out[key]);
        };
        serde_json::from_str(text).expect("re-encoded value must be valid JSON")
    }

    #[test]
    fn outer_key_wins_before_parsing() {
        let payload = json!({"a": 1}).to_string();
        let out = process(&default_filter(), &json!({"secret": payload}));
        assert_eq!(out["secret"], json!(PLACEHOLDER));
    }

    #[test]
    fn filters_inside_the_encoded_payload() {
        let payload = json!({"secret": "x", "word": "ok"}).to_string();
        let out = process(&default_filter(), &json!({"nested": payload}));
        let parsed = inner(&out, "nested");
        assert_eq!(parsed["secret"], json!(PLACEHOLDER));
        assert_eq!(parsed["word"], json!("ok"));
    }

    #[test]
    fn filters_encoded_arrays_under_the_outer_key() {
        let payload = json!([{"password": "x"}, {"amount": 2}]).to_string();
        let out = process(&default_filter(), &json!({"batch": payload}));
        let parsed = inner(&out, "batch");
        assert_eq!(parsed[0]["password"], json!(PLACEHOLDER));
        assert_eq!(parsed[1]["amount"], json!(2));
    }

    #[test]
    fn non_json_strings_stay_plain() {
        let out = process(&default_filter(), &json!({"note": "{ not json"}));
        assert_eq!(out["note"], json!("{ not json"));
    }
}

mod error_values {
    use super::*;

    #[test]
    fn serializes_errors_to_name_and_message() {
        let out = process(
            &default_filter(),
            &json!({"err": {
                "name": "Error",
                "message": "boom",
                "stack": "Error: boom\n  at main (src/main.rs:1)",
            }}),
        );
        assert_eq!(out["err"]["name"], json!("Error"));
        assert_eq!(out["err"]["message"], json!("boom"));
        assert_eq!(out["err"].get("stack"), None);
    }

    #[test]
    fn reduces_http_client_errors_and_redacts_their_headers() {
        let out = process(
            &default_filter(),
            &json!({"err": {
                "name": "Error",
                "message": "Request failed with status code 401",
                "stack": "...",
                "config": {
                    "url": "https://api.example.com/charge",
                    "headers": {"authorization": "Bearer live-key"},
                },
                "response": {
                    "status": 401,
                    "statusText": "Unauthorized",
                    "headers": {"set-cookie": "sid=abc", "content-type": "application/json"},
                    "data": {"detail": "bad credentials"},
                    "request": {"socket": "opaque"},
                },
            }}),
        );
        let err = &out["err"];
        assert_eq!(err["response"]["status"], json!(401));
        assert_eq!(err["response"]["statusText"], json!("Unauthorized"));
        assert_eq!(err["response"]["headers"]["set-cookie"], json!(PLACEHOLDER));
        assert_eq!(
            err["response"]["headers"]["content-type"],
            json!("application/json")
        );
        assert_eq!(err["config"]["headers"]["authorization"], json!(PLACEHOLDER));
        assert_eq!(err.get("stack"), None);
        assert_eq!(err["response"].get("request"), None);
    }

    #[test]
    fn rust_errors_bridge_through_error_value() {
        let err = std::io::Error::other("connection reset");
        let out = process(&default_filter(), &json!({"err": scrublog::error_value(&err)}));
        assert_eq!(out["err"]["name"], json!("Error"));
        assert_eq!(out["err"]["message"], json!("connection reset"));
    }
}

mod idempotence {
    use super::*;

    #[test]
    fn reprocessing_redacted_output_is_a_no_op() {
        let filter = default_filter();
        let item = json!({
            "password": "hunter2",
            "profile": {"cpf": "123.456.789-00", "city": "Recife"},
            "nested": json!({"secret": "x"}).to_string(),
        });
        let once = filter.process(Some(&item));
        let twice = filter.process(Some(&Value::Object(once.clone())));
        assert_eq!(once, twice);
    }

    #[test]
    fn placeholder_under_plain_key_is_left_alone() {
        let out = process(&default_filter(), &json!({"note": PLACEHOLDER}));
        assert_eq!(out["note"], json!(PLACEHOLDER));
    }
}
