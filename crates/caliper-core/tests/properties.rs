use std::sync::Arc;
use std::thread;

use caliper_canonical::{Action, EntityType, EventType, IdGenerator, Iri, UuidGenerator};
use caliper_core::entities::{AssignableProps, CollectionProps, CourseSectionProps, ScoreProps};
use caliper_core::{is_allowed, CoreError, Entity, Factory, Node, PropertyBag, Props, Serializer};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

struct Counter(std::sync::atomic::AtomicU32);

impl IdGenerator for Counter {
    fn generate_id(&self) -> String {
        let n = self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        format!("urn:uuid:00000000-0000-4000-8000-{n:012}")
    }
}

fn bag(value: Value) -> PropertyBag {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn iri(value: &str) -> Iri {
    Iri::parse(value).unwrap()
}

#[test]
fn bare_entities_serialize_to_header_only() {
    let factory = Factory::default();
    let serializer = Serializer::default();
    for kind in EntityType::ALL {
        let entity = factory
            .create_entity(*kind, "https://example.edu/things/1", &PropertyBag::new())
            .unwrap();
        let out = serializer.serialize(&entity).unwrap();
        let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["@context", "@id", "@type"], "{kind:?}");
        assert_eq!(out["@id"], json!("https://example.edu/things/1"));
        assert_eq!(out["@type"], json!(kind.iri()));
    }
}

fn expected_actions(kind: EventType) -> Vec<&'static str> {
    let mut terms = match kind {
        EventType::Event => Action::ALL.iter().map(|action| action.term()).collect(),
        EventType::AnnotationEvent => vec!["Bookmarked", "Highlighted", "Shared", "Tagged"],
        EventType::AssessmentEvent => {
            vec!["Started", "Paused", "Resumed", "Restarted", "Reset", "Submitted"]
        }
        EventType::AssessmentItemEvent => vec!["Started", "Skipped", "Completed"],
        EventType::AssignableEvent => vec![
            "Activated", "Deactivated", "Started", "Completed", "Submitted", "Reviewed",
        ],
        EventType::ForumEvent => vec!["Subscribed", "Unsubscribed"],
        EventType::GradeEvent => vec!["Graded"],
        EventType::MediaEvent => vec![
            "Started",
            "Ended",
            "Paused",
            "Resumed",
            "Restarted",
            "ForwardedTo",
            "JumpedTo",
            "ChangedResolution",
            "ChangedSize",
            "ChangedSpeed",
            "ChangedVolume",
            "EnabledClosedCaptioning",
            "DisabledClosedCaptioning",
            "EnteredFullScreen",
            "ExitedFullScreen",
            "Muted",
            "Unmuted",
            "OpenedPopout",
            "ClosedPopout",
        ],
        EventType::MessageEvent => vec!["Posted", "MarkedAsRead", "MarkedAsUnread"],
        EventType::NavigationEvent => vec!["NavigatedTo"],
        EventType::SearchEvent => vec!["Searched"],
        EventType::SessionEvent => vec!["LoggedIn", "LoggedOut", "TimedOut"],
        EventType::ThreadEvent => vec![
            "Created", "Deleted", "MarkedAsRead", "MarkedAsUnread", "Removed", "Updated",
        ],
        EventType::ToolLaunchEvent => vec!["Launched", "Returned"],
        EventType::ToolUseEvent => vec!["Used"],
        EventType::ViewEvent => vec!["Viewed"],
    };
    terms.sort_unstable();
    terms
}

#[test]
fn each_event_kind_accepts_exactly_its_action_set() {
    let factory = Factory::new(Counter(Default::default()));
    for kind in EventType::ALL {
        let mut accepted = Vec::new();
        for action in Action::ALL {
            let result = factory.create_event(
                *kind,
                &bag(json!({
                    "actor": "https://example.edu/users/554433",
                    "action": action.iri(),
                    "object": "https://example.edu/things/1",
                    "eventTime": "2016-11-15T10:15:00.000Z"
                })),
            );
            match result {
                Ok(event) => {
                    assert_eq!(event.action(), *action);
                    accepted.push(action.term());
                }
                Err(err) => assert_eq!(
                    err,
                    CoreError::IllegalActionForEventType {
                        event_type: *kind,
                        action: *action
                    }
                ),
            }
        }
        accepted.sort_unstable();
        assert_eq!(accepted, expected_actions(*kind), "{kind:?}");
    }
}

#[test]
fn allowed_action_lookup_agrees_with_construction() {
    assert!(is_allowed(EventType::AssessmentEvent, Action::Reset));
    assert!(!is_allowed(EventType::AssessmentEvent, Action::Completed));
    assert!(is_allowed(EventType::ThreadEvent, Action::Removed));
    assert!(!is_allowed(EventType::ForumEvent, Action::Posted));
    assert!(!is_allowed(EventType::ToolUseEvent, Action::Launched));
}

#[test]
fn serialization_is_idempotent() {
    let event = Factory::new(Counter(Default::default()))
        .create_event(
            EventType::NavigationEvent,
            &bag(json!({
                "actor": {"id": "https://example.edu/users/554433", "type": "Person"},
                "action": "NavigatedTo",
                "object": {
                    "id": "https://example.edu/terms/201601/courses/7/sections/1/pages/2",
                    "type": "WebPage",
                    "name": "Learning Analytics Specifications",
                    "keywords": ["caliper", "analytics"]
                },
                "eventTime": "2016-11-15T10:15:00.000Z",
                "referrer": {"id": "https://example.edu/terms/201601/courses/7/sections/1/pages/1", "type": "WebPage"}
            })),
        )
        .unwrap();

    let serializer = Serializer::default();
    let first = serializer.to_string(&event).unwrap();
    let second = serializer.to_string(&event).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parse_of_serialize_reconstructs_the_property_bag() {
    let factory = Factory::new(Counter(Default::default()));
    let nodes = vec![
        factory
            .create_node(&bag(json!({
                "id": "https://example.edu/terms/201601/courses/7/sections/1/assess/1",
                "type": "Assessment",
                "name": "Quiz One",
                "keywords": ["quiz"],
                "dateToSubmit": "2016-11-16T11:59:59.000Z",
                "maxAttempts": 2,
                "maxScore": 15.0,
                "isPartOf": {"id": "https://example.edu/terms/201601/courses/7/sections/1", "type": "CourseSection", "name": "Section 1"}
            })))
            .unwrap(),
        factory
            .create_node(&bag(json!({
                "id": "https://example.edu/terms/201601/courses/7/sections/1/assess/1/users/554433/attempts/1",
                "type": "Attempt",
                "assignee": {"id": "https://example.edu/users/554433", "type": "Person"},
                "assignable": "https://example.edu/terms/201601/courses/7/sections/1/assess/1",
                "count": 1,
                "startedAtTime": "2016-11-15T10:05:00.000Z",
                "duration": "PT50M"
            })))
            .unwrap(),
        factory
            .create_node(&bag(json!({
                "id": "https://example.edu/users/554433/texts/imscaliperimplguide/highlights/1",
                "type": "HighlightAnnotation",
                "annotator": {"id": "https://example.edu/users/554433", "type": "Person"},
                "annotated": {"id": "https://example.com/#/texts/imscaliperimplguide/cfi/6/10!/4/2/2/2@0:0", "type": "Document"},
                "selection": {"start": "2300", "end": "2370"},
                "selectionText": "ISO 8601 formatted date and time expressed with millisecond precision."
            })))
            .unwrap(),
        factory
            .create_node(&bag(json!({
                "type": "SessionEvent",
                "actor": {"id": "https://example.edu/users/554433", "type": "Person"},
                "action": "LoggedIn",
                "object": {"id": "https://example.edu", "type": "SoftwareApplication", "version": "v2"},
                "eventTime": "2016-11-15T10:15:00.000Z",
                "session": {
                    "id": "https://example.edu/sessions/1",
                    "type": "Session",
                    "user": {"id": "https://example.edu/users/554433", "type": "Person"}
                },
                "extensions": {"job": {"id": "08c1233d", "attempt": 1}}
            })))
            .unwrap(),
    ];

    let serializer = Serializer::default();
    for node in nodes {
        let document = serializer.serialize(&node).unwrap();
        let parsed = serializer.parse(&document).unwrap();
        assert_eq!(parsed, node.to_property_bag(), "{}", node.type_iri());
    }
}

#[test]
fn collection_references_its_section() {
    let section = Entity::new(
        iri("https://example.edu/terms/201601/courses/7/sections/1"),
        Props::CourseSection(CourseSectionProps {
            name: Some("CPS 435 Learning Analytics, Section 01".into()),
            course_number: Some("CPS 435-01".into()),
            ..Default::default()
        }),
    );
    let collection = Entity::new(
        iri("https://example.edu/terms/201601/courses/7/sections/1/resources/1"),
        Props::DigitalResourceCollection(CollectionProps {
            name: Some("Course Assets".into()),
            is_part_of: Some(section.into()),
            ..Default::default()
        }),
    );

    let out = Serializer::default().serialize(&collection).unwrap();
    assert_eq!(
        out["isPartOf"],
        json!({
            "@id": "https://example.edu/terms/201601/courses/7/sections/1",
            "@type": "http://purl.imsglobal.org/caliper/v1/CourseSection"
        })
    );
}

#[test]
fn scores_render_integral_values_without_fraction() {
    let score = Entity::new(
        iri("https://example.edu/terms/201601/courses/7/sections/1/assess/1/users/554433/attempts/1/scores/1"),
        Props::Score(ScoreProps {
            max_score: Some(15.0),
            score_given: Some(10.5),
            ..Default::default()
        }),
    );
    let text = Serializer::default().to_string(&score).unwrap();
    assert!(text.contains(r#""maxScore":15,"scoreGiven":10.5"#), "{text}");
}

#[test]
fn non_finite_numbers_fail_serialization() {
    let assessment = Entity::new(
        iri("https://example.edu/terms/201601/courses/7/sections/1/assess/1"),
        Props::Assessment(AssignableProps {
            max_score: Some(f64::NAN),
            ..Default::default()
        }),
    );
    assert_eq!(
        Serializer::default().serialize(&assessment).unwrap_err(),
        CoreError::NonFiniteNumber("maxScore".into())
    );
}

#[test]
fn unknown_action_term_fails_loudly() {
    let err = Factory::default()
        .create_event(
            EventType::Event,
            &bag(json!({
                "actor": "https://example.edu/users/554433",
                "action": "Yawned",
                "object": "https://example.edu/things/1",
                "eventTime": "2016-11-15T10:15:00.000Z"
            })),
        )
        .unwrap_err();
    assert!(matches!(err, CoreError::UnknownVocabularyTerm(_)));
}

#[test]
fn failed_build_leaves_no_state_behind() {
    let factory = Factory::default();
    let bad = factory.create_entity(
        EntityType::Person,
        "https://example.edu/users/1",
        &bag(json!({"name": "Ada", "dateModified": "tomorrow"})),
    );
    assert!(bad.is_err());

    let good = factory
        .create_entity(EntityType::Person, "https://example.edu/users/1", &PropertyBag::new())
        .unwrap();
    assert_eq!(good.to_property_bag().get("name"), None);
}

#[test]
fn serializer_is_shareable_across_threads() {
    let serializer = Arc::new(Serializer::default());
    let document = Arc::new(
        Factory::default()
            .create_entity(
                EntityType::Document,
                "https://example.edu/etexts/201.epub",
                &bag(json!({"name": "IMS Caliper Implementation Guide", "version": "1.1"})),
            )
            .unwrap(),
    );
    let expected = serializer.to_string(document.as_ref()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let serializer = Arc::clone(&serializer);
            let document = Arc::clone(&document);
            thread::spawn(move || serializer.to_string(document.as_ref()).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn generated_ids_are_urn_uuids() {
    let event = Factory::new(UuidGenerator::default())
        .create_event(
            EventType::ViewEvent,
            &bag(json!({
                "actor": "https://example.edu/users/554433",
                "action": "Viewed",
                "object": "https://example.edu/etexts/201.epub",
                "eventTime": "2016-11-15T10:15:00.000Z"
            })),
        )
        .unwrap();
    assert!(caliper_canonical::is_valid_id(event.id().as_str()));
}
