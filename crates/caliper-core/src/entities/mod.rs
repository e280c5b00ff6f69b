//! Entity model.
//!
//! An [`Entity`] is an identifier plus a [`Props`] value. `Props` has one
//! variant per entity kind, so the `@type` of an entity is always derived
//! from the variant and cannot drift from the attributes it carries. Kinds
//! that share an attribute set share a props struct (every reading kind uses
//! [`ResourceProps`], for example).

use std::sync::Arc;

use caliper_canonical::{EntityType, Iri};
use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::node::{header, is_reserved, Emitter, Node, PropertyBag};

/// Declares a props struct once: field, attribute key and relationship
/// policy. Fields are emitted in declaration order.
macro_rules! shape {
    (@policy) => {
        $crate::node::Policy::Embed
    };
    (@policy reference) => {
        $crate::node::Policy::Reference
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty = $key:literal $(, $policy:ident)? ; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        #[allow(missing_docs)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $name {
            pub(crate) fn write_fields(
                &self,
                out: &mut serde_json::Map<String, serde_json::Value>,
                emitter: &mut $crate::node::Emitter,
            ) -> Result<(), $crate::errors::CoreError> {
                $(
                    if let Some(value) = $crate::node::Field::emit(
                        &self.$field,
                        $key,
                        shape!(@policy $($policy)?),
                        emitter,
                    )? {
                        out.insert($key.to_string(), value);
                    }
                )*
                Ok(())
            }

            pub(crate) fn bag_fields(&self, bag: &mut $crate::node::PropertyBag) {
                $(
                    if let Some(value) = $crate::node::Field::to_bag(&self.$field) {
                        bag.insert($key.to_string(), value);
                    }
                )*
            }

            pub(crate) fn set(
                &mut self,
                key: &str,
                value: &serde_json::Value,
            ) -> Result<bool, $crate::errors::CoreError> {
                match key {
                    $(
                        $key => {
                            self.$field = $crate::node::Field::from_bag($key, value)?;
                            Ok(true)
                        }
                    )*
                    _ => Ok(false),
                }
            }
        }
    };
}

macro_rules! entity_kinds {
    ( $( $variant:ident($props:ident) ),* $(,)? ) => {
        /// Kind-specific attributes. The variant is the entity's kind.
        #[derive(Debug, Clone, PartialEq)]
        #[allow(missing_docs)]
        pub enum Props {
            $( $variant($props), )*
        }

        impl Props {
            /// Default attributes of `kind`.
            pub fn for_kind(kind: EntityType) -> Self {
                match kind {
                    $( EntityType::$variant => Props::$variant($props::default()), )*
                }
            }

            /// Kind this variant stands for.
            pub fn entity_type(&self) -> EntityType {
                match self {
                    $( Props::$variant(_) => EntityType::$variant, )*
                }
            }

            pub(crate) fn write_fields(
                &self,
                out: &mut Map<String, Value>,
                emitter: &mut Emitter,
            ) -> Result<(), CoreError> {
                match self {
                    $( Props::$variant(props) => props.write_fields(out, emitter), )*
                }
            }

            pub(crate) fn bag_fields(&self, bag: &mut PropertyBag) {
                match self {
                    $( Props::$variant(props) => props.bag_fields(bag), )*
                }
            }

            pub(crate) fn set(&mut self, key: &str, value: &Value) -> Result<bool, CoreError> {
                match self {
                    $( Props::$variant(props) => props.set(key, value), )*
                }
            }
        }
    };
}

mod agent;
mod annotation;
mod assessment;
mod lis;
mod resource;
mod response;
mod search;
mod session;

pub use agent::{AgentProps, SoftwareApplicationProps};
pub use annotation::{
    AnnotationProps, BookmarkAnnotationProps, HighlightAnnotationProps, Selection,
    SharedAnnotationProps, TagAnnotationProps,
};
pub use assessment::{AssignableProps, AttemptProps, ScoreProps};
pub use lis::{CourseOfferingProps, CourseSectionProps, MembershipProps, OrganizationProps};
pub use resource::{
    CollectionProps, FrameProps, MediaLocationProps, MediaObjectProps, MessageProps,
    QuestionProps, ResourceProps,
};
pub use response::{MultiValueResponseProps, ResponseProps, SingleValueResponseProps};
pub use search::{QueryProps, SearchResponseProps};
pub use session::{LtiSessionProps, SessionProps};

entity_kinds! {
    Person(AgentProps),
    LearningObjective(AgentProps),
    SoftwareApplication(SoftwareApplicationProps),
    Organization(OrganizationProps),
    Group(OrganizationProps),
    CourseOffering(CourseOfferingProps),
    CourseSection(CourseSectionProps),
    Membership(MembershipProps),
    DigitalResource(ResourceProps),
    Document(ResourceProps),
    Chapter(ResourceProps),
    Page(ResourceProps),
    WebPage(ResourceProps),
    EpubVolume(ResourceProps),
    Thread(ResourceProps),
    Forum(ResourceProps),
    Link(ResourceProps),
    LtiLink(ResourceProps),
    DigitalResourceCollection(CollectionProps),
    Frame(FrameProps),
    MediaObject(MediaObjectProps),
    AudioObject(MediaObjectProps),
    VideoObject(MediaObjectProps),
    ImageObject(MediaObjectProps),
    MediaLocation(MediaLocationProps),
    Assessment(AssignableProps),
    AssessmentItem(AssignableProps),
    AssignableDigitalResource(AssignableProps),
    Message(MessageProps),
    Question(QuestionProps),
    Annotation(AnnotationProps),
    BookmarkAnnotation(BookmarkAnnotationProps),
    HighlightAnnotation(HighlightAnnotationProps),
    SharedAnnotation(SharedAnnotationProps),
    TagAnnotation(TagAnnotationProps),
    Attempt(AttemptProps),
    Score(ScoreProps),
    Response(ResponseProps),
    MultipleChoiceResponse(SingleValueResponseProps),
    TrueFalseResponse(SingleValueResponseProps),
    FillinBlankResponse(MultiValueResponseProps),
    MultipleResponseResponse(MultiValueResponseProps),
    SelectTextResponse(MultiValueResponseProps),
    Session(SessionProps),
    LtiSession(LtiSessionProps),
    Query(QueryProps),
    SearchResponse(SearchResponseProps),
}

/// A typed, identified domain object.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: Iri,
    props: Props,
}

impl Entity {
    /// Creates an entity from its id and attributes.
    pub fn new(id: Iri, props: Props) -> Self {
        Self { id, props }
    }

    /// Creates an entity of `kind` carrying only default attributes.
    pub fn of_kind(kind: EntityType, id: Iri) -> Self {
        Self::new(id, Props::for_kind(kind))
    }

    /// Kind of this entity.
    pub fn entity_type(&self) -> EntityType {
        self.props.entity_type()
    }

    /// Kind-specific attributes.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Mutable access for typed setters.
    pub fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }

    /// Sets one attribute from its property bag form.
    ///
    /// The value is fully decoded before it is stored, so on error the
    /// entity is left untouched. `id` and `type` cannot be set this way.
    pub fn set_property(&mut self, key: &str, value: &Value) -> Result<(), CoreError> {
        if !is_reserved(key) && self.props.set(key, value)? {
            return Ok(());
        }
        Err(CoreError::UnknownProperty {
            kind: self.entity_type().term(),
            key: key.to_string(),
        })
    }

    /// Builds an entity of `kind`: defaults first, then every non-reserved
    /// key of `bag` overlaid in order.
    pub(crate) fn build(kind: EntityType, id: &str, bag: &PropertyBag) -> Result<Self, CoreError> {
        let mut entity = Self::of_kind(kind, parse_id(id)?);
        for (key, value) in bag {
            if is_reserved(key) {
                continue;
            }
            entity.set_property(key, value)?;
        }
        Ok(entity)
    }

    /// Builds a nested entity found in relationship `field`; kind and id
    /// come from the bag itself.
    pub(crate) fn from_bag(field: &str, bag: &PropertyBag) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidReference {
            field: field.to_string(),
        };
        let id = header(bag, "id")?.ok_or_else(invalid)?;
        let kind = EntityType::resolve(header(bag, "type")?.ok_or_else(invalid)?)?;
        Self::build(kind, id, bag)
    }
}

impl Node for Entity {
    fn id(&self) -> &Iri {
        &self.id
    }

    fn type_iri(&self) -> &'static str {
        self.entity_type().iri()
    }

    fn to_property_bag(&self) -> PropertyBag {
        let mut bag = Map::new();
        bag.insert("id".into(), Value::String(self.id.to_string()));
        bag.insert("type".into(), Value::String(self.type_iri().to_string()));
        self.props.bag_fields(&mut bag);
        bag
    }

    fn write_fields(
        &self,
        out: &mut Map<String, Value>,
        emitter: &mut Emitter,
    ) -> Result<(), CoreError> {
        self.props.write_fields(out, emitter)
    }
}

/// Validates a node identifier.
pub(crate) fn parse_id(value: &str) -> Result<Iri, CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidIdentifier {
            value: value.to_string(),
            reason: "identifier is empty".into(),
        });
    }
    Iri::parse(value).map_err(|err| CoreError::InvalidIdentifier {
        value: value.to_string(),
        reason: err.to_string(),
    })
}

/// Value of a relationship field.
#[derive(Debug, Clone, PartialEq)]
pub enum Link {
    /// Bare identifier, serialized as a JSON string.
    Iri(Iri),
    /// Shared, immutable entity.
    Entity(Arc<Entity>),
}

impl Link {
    /// Identifier of the linked node.
    pub fn id(&self) -> &Iri {
        match self {
            Link::Iri(iri) => iri,
            Link::Entity(entity) => entity.id(),
        }
    }

    /// The linked entity, when the link carries one.
    pub fn entity(&self) -> Option<&Entity> {
        match self {
            Link::Iri(_) => None,
            Link::Entity(entity) => Some(entity.as_ref()),
        }
    }

    pub(crate) fn from_value(field: &str, value: &Value) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidReference {
            field: field.to_string(),
        };
        match value {
            Value::String(raw) => Iri::parse(raw.as_str()).map(Link::Iri).map_err(|_| invalid()),
            Value::Object(bag) => Entity::from_bag(field, bag).map(|e| Link::Entity(Arc::new(e))),
            _ => Err(invalid()),
        }
    }
}

impl From<Entity> for Link {
    fn from(entity: Entity) -> Self {
        Link::Entity(Arc::new(entity))
    }
}

impl From<Arc<Entity>> for Link {
    fn from(entity: Arc<Entity>) -> Self {
        Link::Entity(entity)
    }
}

impl From<Iri> for Link {
    fn from(iri: Iri) -> Self {
        Link::Iri(iri)
    }
}
