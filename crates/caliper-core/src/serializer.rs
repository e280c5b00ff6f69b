//! JSON-LD serializer and its structural inverse.

use caliper_canonical::CALIPER_CONTEXT;
use serde_json::Value;
use tracing::debug;

use crate::errors::CoreError;
use crate::factory::Factory;
use crate::node::{Emitter, Node, PropertyBag};

/// Converts nodes into the JSON-LD wire form.
///
/// Output members follow each kind's declared order: `@context` (root only),
/// `@id`, `@type`, then the kind's attributes. Unset values, empty sequences
/// and empty mappings are suppressed. Relationship fields embed or reference
/// the linked entity according to the field.
#[derive(Debug, Clone)]
pub struct Serializer {
    context: String,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new(CALIPER_CONTEXT)
    }
}

impl Serializer {
    /// Creates a serializer stamping `context` on root nodes.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// JSON-LD context IRI.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Serializes `node` as a root JSON-LD document.
    pub fn serialize<N: Node + ?Sized>(&self, node: &N) -> Result<Value, CoreError> {
        let document = Emitter::new().node(node, Some(&self.context))?;
        debug!(id = %node.id(), kind = node.type_iri(), "serialized node");
        Ok(Value::Object(document))
    }

    /// Compact JSON text of [`Serializer::serialize`].
    pub fn to_string<N: Node + ?Sized>(&self, node: &N) -> Result<String, CoreError> {
        Ok(self.serialize(node)?.to_string())
    }

    /// Indented JSON text of [`Serializer::serialize`].
    pub fn to_string_pretty<N: Node + ?Sized>(&self, node: &N) -> Result<String, CoreError> {
        Ok(format!("{:#}", self.serialize(node)?))
    }

    /// Rebuilds the property bag of a serialized node.
    ///
    /// The document is decoded through the factory, so every constraint that
    /// applies at construction applies here too.
    pub fn parse(&self, document: &Value) -> Result<PropertyBag, CoreError> {
        let bag = document
            .as_object()
            .ok_or_else(|| CoreError::invalid_property("document", "expected a JSON object"))?;
        let node = Factory::default().create_node(bag)?;
        Ok(node.to_property_bag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        Entity, Link, MediaLocationProps, MediaObjectProps, OrganizationProps, Props, ResourceProps,
    };
    use caliper_canonical::{EntityType, Iri};
    use serde_json::json;

    fn iri(value: &str) -> Iri {
        Iri::parse(value).unwrap()
    }

    #[test]
    fn nested_nodes_carry_no_context() {
        let parent = Entity::of_kind(EntityType::CourseOffering, iri("https://example.edu/courses/7"));
        let section = Entity::new(
            iri("https://example.edu/courses/7/sections/1"),
            Props::Group(OrganizationProps {
                sub_organization_of: Some(parent.into()),
                ..Default::default()
            }),
        );
        let out = Serializer::default().serialize(&section).unwrap();
        assert_eq!(out["@context"], json!(CALIPER_CONTEXT));
        assert_eq!(
            out["subOrganizationOf"],
            json!({
                "@id": "https://example.edu/courses/7",
                "@type": "http://purl.imsglobal.org/caliper/v1/CourseOffering"
            })
        );
    }

    #[test]
    fn repeated_id_on_embedding_chain_is_a_cycle() {
        let inner = Entity::new(
            iri("https://example.edu/orgs/1"),
            Props::Organization(OrganizationProps::default()),
        );
        let outer = Entity::new(
            iri("https://example.edu/orgs/1"),
            Props::Organization(OrganizationProps {
                sub_organization_of: Some(inner.into()),
                ..Default::default()
            }),
        );
        assert_eq!(
            Serializer::default().serialize(&outer).unwrap_err(),
            CoreError::CyclicReference {
                id: "https://example.edu/orgs/1".into()
            }
        );
    }

    #[test]
    fn shared_iri_across_kinds_is_an_identity_cycle() {
        let video = Entity::new(
            iri("https://example.edu/videos/1225"),
            Props::VideoObject(MediaObjectProps::default()),
        );
        let location = |parent: Link| {
            Entity::new(
                iri("https://example.edu/videos/1225"),
                Props::MediaLocation(MediaLocationProps {
                    is_part_of: Some(parent),
                    ..Default::default()
                }),
            )
        };

        assert_eq!(
            Serializer::default()
                .serialize(&location(video.into()))
                .unwrap_err(),
            CoreError::CyclicReference {
                id: "https://example.edu/videos/1225".into()
            }
        );

        let out = Serializer::default()
            .serialize(&location(Link::Iri(iri("https://example.edu/videos/1225"))))
            .unwrap();
        assert_eq!(out["isPartOf"], json!("https://example.edu/videos/1225"));
    }

    #[test]
    fn repeated_id_in_sibling_positions_is_not_a_cycle() {
        let person = Entity::of_kind(EntityType::Person, iri("https://example.edu/users/223344"));
        let document = Entity::new(
            iri("https://example.edu/etexts/201.epub"),
            Props::Document(ResourceProps {
                creators: vec![person.clone().into(), person.into()],
                ..Default::default()
            }),
        );
        let out = Serializer::default().serialize(&document).unwrap();
        assert_eq!(out["creators"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn parse_rejects_non_objects() {
        assert!(Serializer::default().parse(&json!([1, 2])).is_err());
    }
}
