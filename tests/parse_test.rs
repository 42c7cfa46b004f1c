//! Library-level tests for parsing and projection through the public API.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use sportsml_json::mapping::MappedEntity;
use sportsml_json::xml::MAX_DEPTH;
use sportsml_json::{SportsMlError, parse_reader, parse_str};
use std::thread;

fn to_value(xml: &str) -> Value {
    serde_json::to_value(parse_str(xml).unwrap()).unwrap()
}

#[test]
fn test_strings_are_not_trimmed_or_recased() {
    let json = to_value(
        r#"<sports-content><sports-metadata doc-id="  Mixed Case  " language="EN-us"/></sports-content>"#,
    );
    assert_eq!(
        json,
        json!({ "sportsMetadata": { "docId": "  Mixed Case  ", "language": "EN-us" } })
    );
}

#[test]
fn test_entities_are_unescaped() {
    let json = to_value(
        r#"<sports-content><sports-event><event-metadata key="a&amp;b"><name>Tom &amp; Jerry Cup</name></event-metadata></sports-event></sports-content>"#,
    );
    assert_eq!(json["sportsEvents"][0]["eventMetadata"]["key"], "a&b");
    assert_eq!(
        json["sportsEvents"][0]["eventMetadata"]["names"][0]["name"],
        "Tom & Jerry Cup"
    );
}

#[test]
fn test_top_level_collections_keep_document_order() {
    let json = to_value(
        r#"<sports-content>
  <statistic type="b"/>
  <sports-event id="e.2"/>
  <statistic type="a"/>
  <sports-event id="e.1"/>
  <schedule content-label="fixtures"/>
  <article><article-metadata key="recap"/></article>
</sports-content>"#,
    );

    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["sportsEvents", "schedules", "statistics", "articles"]);
    assert_eq!(json["sportsEvents"], json!([{ "id": "e.2" }, { "id": "e.1" }]));
    assert_eq!(json["statistics"], json!([{ "type": "b" }, { "type": "a" }]));
}

#[test]
fn test_empty_elements_are_omitted_everywhere() {
    let json = to_value(
        r#"<sports-content>
  <sports-metadata/>
  <sports-event><event-metadata/><team/></sports-event>
  <tournament/>
</sports-content>"#,
    );
    assert_eq!(
        json,
        json!({ "sportsEvents": [ { "teams": [ {} ] } ], "tournaments": [ {} ] })
    );
}

#[test]
fn test_unknown_elements_and_attributes_are_ignored() {
    let json = to_value(
        r#"<sports-content xmlns:x="http://example.com/x">
  <sports-metadata doc-id="d.1" vendor-flag="yes" x:extra="1"/>
  <x:sports-event id="foreign"/>
  <weather-report/>
</sports-content>"#,
    );
    assert_eq!(json, json!({ "sportsMetadata": { "docId": "d.1" } }));
}

#[test]
fn test_parse_reader_matches_parse_str() {
    let xml = r#"<sports-content><standing content-label="East"><team id="t.1"/></standing></sports-content>"#;
    let from_reader = parse_reader(xml.as_bytes()).unwrap();
    let from_str = parse_str(xml).unwrap();
    assert_eq!(from_reader, from_str);
    assert!(from_reader.is_present());
    assert_eq!(from_reader.standings.len(), 1);
}

#[test]
fn test_coercion_error_surfaces_through_nesting() {
    let err = parse_str(
        r#"<sports-content>
  <statistic><team><team-stats><penalty-stats count="2.5"/></team-stats></team></statistic>
</sports-content>"#,
    )
    .unwrap_err();

    assert!(!err.is_document_format_error());
    assert_eq!(
        err.to_string(),
        r#"Attribute Coercion Error: <penalty-stats count="2.5"> is not a valid integer value"#
    );
}

#[test]
fn test_excessive_nesting_is_rejected() {
    let depth = 300;
    let xml = format!(
        "<sports-content>{}{}</sports-content>",
        "<sports-event>".repeat(depth),
        "</sports-event>".repeat(depth)
    );
    assert!(matches!(parse_str(&xml), Err(SportsMlError::MalformedXml(_))));
}

fn nested_events(levels: usize) -> String {
    format!(
        "<sports-content>{}{}</sports-content>",
        r#"<sports-event id="e">"#.repeat(levels),
        "</sports-event>".repeat(levels)
    )
}

#[test]
fn test_deepest_accepted_document_fits_default_thread_stack() {
    let handle = thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(|| {
            let xml = nested_events(MAX_DEPTH - 1);
            let content = parse_str(&xml).unwrap();
            let json = content.to_json(false).unwrap();
            let pretty = content.to_json(true).unwrap();
            (json, pretty)
        })
        .unwrap();

    let (json, pretty) = handle.join().unwrap();
    assert_eq!(json.matches("\"sportsEvents\"").count(), MAX_DEPTH - 1);
    assert!(pretty.starts_with("{\n    \"sportsEvents\""));

    let handle = thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(|| parse_str(&nested_events(MAX_DEPTH)).map(|_| ()))
        .unwrap();
    assert!(matches!(handle.join().unwrap(), Err(SportsMlError::MalformedXml(_))));
}

#[test]
fn test_undecodable_bytes_are_a_format_error() {
    let err = parse_reader(&b"<sports-content><sports-metadata doc-id=\"\xff\xfe\"/></sports-content>"[..])
        .unwrap_err();
    assert!(err.is_document_format_error());
    assert!(err.to_string().starts_with("Malformed XML"));
}

#[test]
fn test_latin1_document_is_decoded() {
    let bytes: &[u8] = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\
<sports-content><sports-event><event-metadata key=\"e.1\"><name>Gr\xfc\xdfe aus M\xfcnchen</name></event-metadata></sports-event></sports-content>";
    let json = serde_json::to_value(parse_reader(bytes).unwrap()).unwrap();
    assert_eq!(
        json["sportsEvents"][0]["eventMetadata"]["names"][0]["name"],
        "Gr\u{fc}\u{df}e aus M\u{fc}nchen"
    );
}
