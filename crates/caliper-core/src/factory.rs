//! Single entry point for building entities and events from property bags.

use std::sync::Arc;

use caliper_canonical::{EntityType, EventType, IdGenerator, UuidGenerator};
use tracing::debug;

use crate::entities::Entity;
use crate::errors::CoreError;
use crate::events::Event;
use crate::node::{header, PropertyBag};
use crate::payload::Payload;

/// Builds typed nodes from property bags.
///
/// Holds only the id collaborator; it keeps no per-call state and can be
/// shared across threads.
#[derive(Clone)]
pub struct Factory {
    ids: Arc<dyn IdGenerator>,
}

impl Default for Factory {
    fn default() -> Self {
        Self::new(UuidGenerator::default())
    }
}

impl std::fmt::Debug for Factory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory").finish_non_exhaustive()
    }
}

impl Factory {
    /// Creates a factory that mints event ids with `ids`.
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self { ids: Arc::new(ids) }
    }

    /// Builds an entity of `kind`.
    ///
    /// The id is validated first, then the kind's defaults are overlaid with
    /// every attribute of `props`. Header keys (`id`, `type` and their `@`
    /// forms, `@context`) in `props` are ignored, so the kind always wins.
    pub fn create_entity(
        &self,
        kind: EntityType,
        id: &str,
        props: &PropertyBag,
    ) -> Result<Entity, CoreError> {
        let entity = Entity::build(kind, id, props)?;
        debug!(entity_type = kind.term(), id, "created entity");
        Ok(entity)
    }

    /// Builds an event of `kind`. Nested nodes are built recursively.
    pub fn create_event(&self, kind: EventType, props: &PropertyBag) -> Result<Event, CoreError> {
        Event::from_bag(kind, props, self.ids.as_ref())
    }

    /// Builds whatever node the bag's `type` (or `@type`) names.
    pub fn create_node(&self, props: &PropertyBag) -> Result<Payload, CoreError> {
        let type_name = header(props, "type")?.ok_or(CoreError::MissingRequiredField("type"))?;

        if let Ok(kind) = EventType::from_iri(type_name).or_else(|_| EventType::from_term(type_name))
        {
            return self.create_event(kind, props).map(Payload::Event);
        }

        let kind = EntityType::resolve(type_name)?;
        let id = header(props, "id")?.ok_or(CoreError::MissingRequiredField("id"))?;
        self.create_entity(kind, id, props).map(Payload::Entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use serde_json::json;

    struct Fixed;

    impl IdGenerator for Fixed {
        fn generate_id(&self) -> String {
            "urn:uuid:ff9ec22a-fc59-4ae1-ae8d-2c9463ee2f8f".to_string()
        }
    }

    fn bag(value: serde_json::Value) -> PropertyBag {
        match value {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn type_in_overlay_cannot_override_kind() {
        let entity = Factory::default()
            .create_entity(
                EntityType::Person,
                "https://example.edu/users/554433",
                &bag(json!({"type": "Organization", "@type": "Group", "name": "Ada"})),
            )
            .unwrap();
        assert_eq!(entity.entity_type(), EntityType::Person);
        assert_eq!(entity.to_property_bag()["name"], json!("Ada"));
    }

    #[test]
    fn unknown_attribute_is_rejected() {
        let err = Factory::default()
            .create_entity(
                EntityType::Person,
                "https://example.edu/users/554433",
                &bag(json!({"shoeSize": 44})),
            )
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownProperty {
                kind: "Person",
                key: "shoeSize".into()
            }
        );
    }

    #[test]
    fn missing_event_id_is_generated() {
        let factory = Factory::new(Fixed);
        let event = factory
            .create_event(
                EventType::SessionEvent,
                &bag(json!({
                    "actor": {"id": "https://example.edu/users/554433", "type": "Person"},
                    "action": "LoggedIn",
                    "object": {"id": "https://example.edu", "type": "SoftwareApplication"},
                    "eventTime": "2016-11-15T10:15:00.000Z"
                })),
            )
            .unwrap();
        assert_eq!(
            event.id().as_str(),
            "urn:uuid:ff9ec22a-fc59-4ae1-ae8d-2c9463ee2f8f"
        );
    }

    #[test]
    fn malformed_event_id_is_rejected() {
        let factory = Factory::new(Fixed);
        let props = |extra: serde_json::Value| {
            let mut props = bag(json!({
                "actor": "https://example.edu/users/554433",
                "action": "Viewed",
                "object": "https://example.edu/etexts/201.epub",
                "eventTime": "2016-11-15T10:15:00.000Z"
            }));
            props.extend(bag(extra));
            props
        };

        let err = factory
            .create_event(EventType::ViewEvent, &props(json!({"id": 42})))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidIdentifier {
                value: "42".into(),
                reason: "id must be a string".into()
            }
        );

        let err = factory
            .create_event(
                EventType::ViewEvent,
                &props(json!({"id": 5, "@id": "urn:uuid:3a648e68-f00d-4c08-aa59-8738e1884f2c"})),
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidIdentifier { .. }));

        let event = factory
            .create_event(
                EventType::ViewEvent,
                &props(json!({"@id": "urn:uuid:3a648e68-f00d-4c08-aa59-8738e1884f2c"})),
            )
            .unwrap();
        assert_eq!(
            event.id().as_str(),
            "urn:uuid:3a648e68-f00d-4c08-aa59-8738e1884f2c"
        );
    }

    #[test]
    fn create_node_rejects_non_string_header() {
        let factory = Factory::new(Fixed);
        let err = factory
            .create_node(&bag(json!({"@id": ["https://example.edu/users/554433"], "@type": "Person"})))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidIdentifier { .. }));

        let err = factory
            .create_node(&bag(json!({"@id": "https://example.edu/users/554433", "@type": 7})))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidIdentifier { .. }));
    }

    #[test]
    fn missing_required_field_is_named() {
        let err = Factory::new(Fixed)
            .create_event(
                EventType::ViewEvent,
                &bag(json!({
                    "actor": "https://example.edu/users/554433",
                    "action": "Viewed",
                    "eventTime": "2016-11-15T10:15:00.000Z"
                })),
            )
            .unwrap_err();
        assert_eq!(err, CoreError::MissingRequiredField("object"));
    }

    #[test]
    fn create_node_dispatches_on_type() {
        let factory = Factory::new(Fixed);
        let node = factory
            .create_node(&bag(json!({
                "@id": "https://example.edu/terms/201601/courses/7/sections/1",
                "@type": "http://purl.imsglobal.org/caliper/v1/CourseSection",
                "courseNumber": "CPS 435-01"
            })))
            .unwrap();
        assert!(matches!(node, Payload::Entity(ref e) if e.entity_type() == EntityType::CourseSection));

        let err = factory
            .create_node(&bag(json!({"type": "Spaceship", "id": "https://example.edu/x"})))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownVocabularyTerm(_)));
    }
}
