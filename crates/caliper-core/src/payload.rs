use caliper_canonical::Iri;
use serde_json::{Map, Value};

use crate::entities::Entity;
use crate::errors::CoreError;
use crate::events::Event;
use crate::node::{Emitter, Node, PropertyBag};

/// Either kind of top-level node.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// An entity.
    Entity(Entity),
    /// An event.
    Event(Event),
}

impl Payload {
    fn node(&self) -> &dyn Node {
        match self {
            Payload::Entity(entity) => entity,
            Payload::Event(event) => event,
        }
    }
}

impl Node for Payload {
    fn id(&self) -> &Iri {
        self.node().id()
    }

    fn type_iri(&self) -> &'static str {
        self.node().type_iri()
    }

    fn to_property_bag(&self) -> PropertyBag {
        self.node().to_property_bag()
    }

    fn write_fields(
        &self,
        out: &mut Map<String, Value>,
        emitter: &mut Emitter,
    ) -> Result<(), CoreError> {
        self.node().write_fields(out, emitter)
    }
}

impl From<Entity> for Payload {
    fn from(entity: Entity) -> Self {
        Payload::Entity(entity)
    }
}

impl From<Event> for Payload {
    fn from(event: Event) -> Self {
        Payload::Event(event)
    }
}

impl From<Payload> for Vec<Payload> {
    fn from(payload: Payload) -> Self {
        vec![payload]
    }
}

impl From<Entity> for Vec<Payload> {
    fn from(entity: Entity) -> Self {
        vec![Payload::Entity(entity)]
    }
}

impl From<Event> for Vec<Payload> {
    fn from(event: Event) -> Self {
        vec![Payload::Event(event)]
    }
}
