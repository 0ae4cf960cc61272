//! Registry normalization matrix: map and array sources, multi-name keys,
//! override order and owner types.

use custom_json_type_reviver::{
    flat_parse_type_revivers, merge_type_revivers, to_type_reviver_array, ParseArgs, Reviver,
    TypeKey, TypeReviverMap, TypeRevivers,
};
use custom_json_value::{Key, Value};

fn parse_tag(tag: &'static str) -> Reviver {
    Reviver::parse(move |_| Ok(Value::from(tag)))
}

fn run_parse(reviver: &Reviver) -> Value {
    let f = reviver.parse_fn().expect("parse direction");
    f(ParseArgs {
        key: Key::Root,
        value: Value::Null,
        type_name: "t",
        call_count: 1,
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

#[test]
fn map_source_keeps_insertion_order() {
    let map = TypeReviverMap::new().with("B", parse_tag("b")).with("A", parse_tag("a"));
    let pairs = to_type_reviver_array(&TypeRevivers::from(map));
    let names: Vec<&TypeKey> = pairs.iter().map(|(key, _)| key).collect();
    assert_eq!(names, vec![&TypeKey::from("B"), &TypeKey::from("A")]);
}

#[test]
fn array_source_keeps_multi_name_keys() {
    let pairs = vec![(TypeKey::from(["Map", "Set"]), parse_tag("coll"))];
    let out = to_type_reviver_array(&TypeRevivers::from(pairs));
    assert_eq!(out[0].0.names(), ["Map".to_owned(), "Set".to_owned()]);
}

// ---------------------------------------------------------------------------
// Flattening
// ---------------------------------------------------------------------------

#[test]
fn multi_name_key_fans_out() {
    let flat = flat_parse_type_revivers(&[(TypeKey::from(["Map", "Set"]), parse_tag("coll"))]);
    assert_eq!(run_parse(flat.get("Map").unwrap()), Value::from("coll"));
    assert_eq!(run_parse(flat.get("Set").unwrap()), Value::from("coll"));
    assert_eq!(flat.owner_types, vec!["Map", "Set"]);
}

#[test]
fn later_pairs_win_within_one_source() {
    let pairs = vec![
        (TypeKey::from("T"), parse_tag("first")),
        (TypeKey::from(vec!["T".to_owned(), "U".to_owned()]), parse_tag("second")),
    ];
    let flat = flat_parse_type_revivers(&pairs);
    assert_eq!(run_parse(flat.get("T").unwrap()), Value::from("second"));
    // first-seen order, no duplicates
    assert_eq!(flat.owner_types, vec!["T", "U"]);
}

#[test]
fn call_site_array_overrides_preset_map() {
    let preset = TypeReviverMap::new()
        .with("T", parse_tag("preset"))
        .with("default", parse_tag("d"));
    let call = TypeRevivers::from(vec![(TypeKey::from("T"), parse_tag("call"))]);
    let flat = flat_parse_type_revivers(&merge_type_revivers(&preset, Some(&call)));
    assert_eq!(run_parse(flat.get("T").unwrap()), Value::from("call"));
    assert_eq!(run_parse(flat.default_reviver().unwrap()), Value::from("d"));
    assert_eq!(flat.owner_types, vec!["T"]);
}

#[test]
fn absent_type_has_no_entry() {
    let flat = flat_parse_type_revivers(&merge_type_revivers(&TypeReviverMap::new(), None));
    assert!(flat.get("T").is_none());
    assert!(flat.default_reviver().is_none());
}
