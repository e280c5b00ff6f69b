use caliper_canonical::{
    canonicalizer::Canonicalizer, Action, CanonicalizationError, EntityType, Iri, Role,
    Timestamp, UuidVersion, Vocabulary,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn canonicalizer_produces_ordered_bytes() {
    let value = json!({"b": 1, "a": {"nested": 2, "first": true}});
    let bytes = Canonicalizer::new().canonicalize(&value).unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        r#"{"a":{"first":true,"nested":2},"b":1}"#
    );
}

#[test]
fn canonical_comparison_ignores_member_order() {
    let expected = json!({
        "@id": "https://example.edu/terms/201601/courses/7/sections/1/resources/123",
        "@type": "http://purl.imsglobal.org/caliper/v1/DigitalResource",
        "name": "Course Syllabus"
    });
    let actual = json!({
        "name": "Course Syllabus",
        "@type": "http://purl.imsglobal.org/caliper/v1/DigitalResource",
        "@id": "https://example.edu/terms/201601/courses/7/sections/1/resources/123"
    });
    assert!(Canonicalizer::new().equivalent(&expected, &actual).unwrap());
    assert!(!Canonicalizer::new()
        .equivalent(&expected, &json!({"name": "Course Syllabus"}))
        .unwrap());
}

#[test]
fn canonicalizer_reports_error_path() {
    // serde_json refuses to hold non-finite floats, so only well-formed input
    // reaches the canonicalizer through `json!`.
    let value = json!({"items": [1.5, 2]});
    assert!(Canonicalizer::new().canonicalize(&value).is_ok());

    let err = CanonicalizationError::NonFiniteNumber("items.[0]".into());
    assert_eq!(err.to_string(), "non-finite number detected at items.[0]");
}

#[test]
fn vocabulary_serializes_to_golden_json() {
    let value = json!({
        "action": Action::Paused,
        "type": EntityType::VideoObject,
        "roles": [Role::Learner, Role::TeachingAssistant],
    });
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        concat!(
            r#"{"action":"http://purl.imsglobal.org/vocab/caliper/v1/action#Paused","#,
            r#""type":"http://purl.imsglobal.org/caliper/v1/VideoObject","#,
            r#""roles":["http://purl.imsglobal.org/vocab/lis/v2/membership#Learner","#,
            r#""http://purl.imsglobal.org/vocab/lis/v2/membership#TeachingAssistant"]}"#
        )
    );
}

#[test]
fn registry_lookup_by_key() {
    assert_eq!(
        Vocabulary::EventType.lookup("TOOL_LAUNCH").unwrap(),
        "http://purl.imsglobal.org/caliper/v1/ToolLaunchEvent"
    );
    assert_eq!(
        Vocabulary::Status.lookup("INACTIVE").unwrap(),
        "http://purl.imsglobal.org/vocab/lis/v2/status#Inactive"
    );
    assert!(Vocabulary::Role.lookup("Learner").is_err());
}

#[test]
fn identifiers_serialize_transparently() {
    let iri = Iri::parse("https://example.edu/users/554433").unwrap();
    let ts = Timestamp::parse("2016-11-15T10:15:00.000Z").unwrap();
    assert_eq!(
        serde_json::to_string(&json!({"id": iri, "at": ts})).unwrap(),
        r#"{"id":"https://example.edu/users/554433","at":"2016-11-15T10:15:00.000Z"}"#
    );

    let bad: Result<Iri, _> = serde_json::from_str(r#""not an iri""#);
    assert!(bad.is_err());
}

#[test]
fn uuid_version_config_names() {
    assert_eq!(serde_json::to_string(&UuidVersion::V4).unwrap(), r#""v4""#);
    let v7: UuidVersion = serde_json::from_str(r#""v7""#).unwrap();
    assert_eq!(v7, UuidVersion::V7);
}
