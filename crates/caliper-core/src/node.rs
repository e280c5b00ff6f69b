//! The contract shared by entities and events, and the per-field codecs the
//! serializer and factory drive.

use caliper_canonical::{Iri, IsoDuration, Role, Status, Timestamp};
use serde_json::{Map, Number, Value};

use crate::entities::{Entity, Link};
use crate::errors::CoreError;

/// Attribute mapping keyed by camelCase names, with `id` and `type`.
pub type PropertyBag = Map<String, Value>;

/// Base contract of every entity and event.
pub trait Node {
    /// Node identifier.
    fn id(&self) -> &Iri;

    /// Canonical `@type` IRI, fixed by the node's kind.
    fn type_iri(&self) -> &'static str;

    /// Attributes as currently set. Unset optionals are left out; defaulted
    /// collections are always present.
    fn to_property_bag(&self) -> PropertyBag;

    /// Appends kind-specific JSON-LD members after `@id`/`@type`, in the
    /// kind's declared order.
    fn write_fields(
        &self,
        out: &mut Map<String, Value>,
        emitter: &mut Emitter,
    ) -> Result<(), CoreError>;
}

/// How a relationship field renders a linked entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Full entity graph inlined.
    Embed,
    /// `@id` and `@type` only.
    Reference,
}

/// Serialization state threaded through one document walk.
///
/// Holds the chain of node ids currently being embedded; meeting an id that
/// is already on the chain is a cycle.
///
/// Cycles are by identity, not by pointer: in JSON-LD two nodes with the same
/// `@id` are one node, so a `MediaLocation` embedding a `VideoObject` that
/// carries its own IRI is rejected even though the two values are distinct
/// and the `Arc` graph is acyclic. Link such a parent with `Link::Iri`. The
/// same id in sibling positions is not a cycle.
#[derive(Debug, Default)]
pub struct Emitter {
    chain: Vec<String>,
}

impl Emitter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn node<N: Node + ?Sized>(
        &mut self,
        node: &N,
        context: Option<&str>,
    ) -> Result<Map<String, Value>, CoreError> {
        let id = node.id().as_str();
        if self.chain.iter().any(|seen| seen == id) {
            return Err(CoreError::CyclicReference { id: id.to_string() });
        }

        let mut out = Map::new();
        if let Some(context) = context {
            out.insert("@context".into(), Value::String(context.to_string()));
        }
        out.insert("@id".into(), Value::String(id.to_string()));
        out.insert("@type".into(), Value::String(node.type_iri().to_string()));

        self.chain.push(id.to_string());
        let result = node.write_fields(&mut out, self);
        self.chain.pop();
        result.map(|()| out)
    }

    fn link(&mut self, link: &Link, policy: Policy) -> Result<Value, CoreError> {
        match (link, policy) {
            (Link::Iri(iri), _) => Ok(Value::String(iri.to_string())),
            (Link::Entity(entity), Policy::Reference) => Ok(reference(entity.as_ref())),
            (Link::Entity(entity), Policy::Embed) => {
                self.node(entity.as_ref(), None).map(Value::Object)
            }
        }
    }
}

fn reference(entity: &Entity) -> Value {
    let mut out = Map::new();
    out.insert("@id".into(), Value::String(entity.id().to_string()));
    out.insert("@type".into(), Value::String(entity.type_iri().to_string()));
    Value::Object(out)
}

/// Reads a node header member, accepting both `id` and `@id` spellings.
///
/// Absent from both spellings is `Ok(None)`. A spelling that is present but
/// not a string is an `InvalidIdentifier`, whatever the other one holds.
pub(crate) fn header<'a>(bag: &'a PropertyBag, name: &str) -> Result<Option<&'a str>, CoreError> {
    let mut found = None;
    for key in [name.to_string(), format!("@{name}")] {
        match bag.get(&key) {
            None => {}
            Some(Value::String(value)) => found = found.or(Some(value.as_str())),
            Some(other) => {
                return Err(CoreError::InvalidIdentifier {
                    value: other.to_string(),
                    reason: format!("{key} must be a string"),
                });
            }
        }
    }
    Ok(found)
}

/// Keys that never reach a kind's attribute setter.
pub(crate) fn is_reserved(key: &str) -> bool {
    matches!(key, "@context" | "@id" | "@type" | "id" | "type")
}

/// Renders a float the way the wire format expects: integral values without
/// a fractional part.
pub(crate) fn number(key: &str, value: f64) -> Result<Value, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::NonFiniteNumber(key.to_string()));
    }
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        return Ok(Value::from(value as i64));
    }
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| CoreError::NonFiniteNumber(key.to_string()))
}

/// Codec for one attribute slot of a kind.
pub(crate) trait Field: Sized {
    /// JSON-LD value, or `None` when the slot is suppressed.
    fn emit(
        &self,
        key: &str,
        policy: Policy,
        emitter: &mut Emitter,
    ) -> Result<Option<Value>, CoreError>;

    /// Property bag value, or `None` when the slot is unset.
    fn to_bag(&self) -> Option<Value>;

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError>;
}

/// Codec for a single attribute value.
pub(crate) trait FieldValue: Sized {
    fn emit(&self, key: &str, policy: Policy, emitter: &mut Emitter) -> Result<Value, CoreError>;
    fn to_bag(&self) -> Value;
    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError>;
}

impl<T: FieldValue> Field for Option<T> {
    fn emit(
        &self,
        key: &str,
        policy: Policy,
        emitter: &mut Emitter,
    ) -> Result<Option<Value>, CoreError> {
        self.as_ref()
            .map(|value| value.emit(key, policy, emitter))
            .transpose()
    }

    fn to_bag(&self) -> Option<Value> {
        self.as_ref().map(FieldValue::to_bag)
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_bag(key, other).map(Some),
        }
    }
}

impl<T: FieldValue> Field for Vec<T> {
    fn emit(
        &self,
        key: &str,
        policy: Policy,
        emitter: &mut Emitter,
    ) -> Result<Option<Value>, CoreError> {
        if self.is_empty() {
            return Ok(None);
        }
        let items = self
            .iter()
            .map(|item| item.emit(key, policy, emitter))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Value::Array(items)))
    }

    fn to_bag(&self) -> Option<Value> {
        Some(Value::Array(self.iter().map(FieldValue::to_bag).collect()))
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items.iter().map(|item| T::from_bag(key, item)).collect(),
            _ => Err(CoreError::invalid_property(key, "expected an array")),
        }
    }
}

impl Field for Map<String, Value> {
    fn emit(&self, _: &str, _: Policy, _: &mut Emitter) -> Result<Option<Value>, CoreError> {
        Ok(self.to_bag())
    }

    fn to_bag(&self) -> Option<Value> {
        (!self.is_empty()).then(|| Value::Object(self.clone()))
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        match value {
            Value::Null => Ok(Map::new()),
            Value::Object(map) => Ok(map.clone()),
            _ => Err(CoreError::invalid_property(key, "expected an object")),
        }
    }
}

pub(crate) fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str, CoreError> {
    value
        .as_str()
        .ok_or_else(|| CoreError::invalid_property(key, "expected a string"))
}

impl FieldValue for String {
    fn emit(&self, _: &str, _: Policy, _: &mut Emitter) -> Result<Value, CoreError> {
        Ok(Value::String(self.clone()))
    }

    fn to_bag(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        expect_str(key, value).map(str::to_string)
    }
}

impl FieldValue for Timestamp {
    fn emit(&self, _: &str, _: Policy, _: &mut Emitter) -> Result<Value, CoreError> {
        Ok(self.to_bag())
    }

    fn to_bag(&self) -> Value {
        Value::String(self.to_string())
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        Timestamp::parse(expect_str(key, value)?)
            .map_err(|err| CoreError::invalid_property(key, err))
    }
}

impl FieldValue for IsoDuration {
    fn emit(&self, _: &str, _: Policy, _: &mut Emitter) -> Result<Value, CoreError> {
        Ok(self.to_bag())
    }

    fn to_bag(&self) -> Value {
        Value::String(self.to_string())
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        IsoDuration::parse(expect_str(key, value)?)
            .map_err(|err| CoreError::invalid_property(key, err))
    }
}

impl FieldValue for u64 {
    fn emit(&self, _: &str, _: Policy, _: &mut Emitter) -> Result<Value, CoreError> {
        Ok(Value::from(*self))
    }

    fn to_bag(&self) -> Value {
        Value::from(*self)
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        value
            .as_u64()
            .ok_or_else(|| CoreError::invalid_property(key, "expected a non-negative integer"))
    }
}

impl FieldValue for f64 {
    fn emit(&self, key: &str, _: Policy, _: &mut Emitter) -> Result<Value, CoreError> {
        number(key, *self)
    }

    fn to_bag(&self) -> Value {
        number("", *self).unwrap_or(Value::Null)
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        value
            .as_f64()
            .ok_or_else(|| CoreError::invalid_property(key, "expected a number"))
    }
}

impl FieldValue for Role {
    fn emit(&self, _: &str, _: Policy, _: &mut Emitter) -> Result<Value, CoreError> {
        Ok(self.to_bag())
    }

    fn to_bag(&self) -> Value {
        Value::String(self.iri().to_string())
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        Ok(Role::resolve(expect_str(key, value)?)?)
    }
}

impl FieldValue for Status {
    fn emit(&self, _: &str, _: Policy, _: &mut Emitter) -> Result<Value, CoreError> {
        Ok(self.to_bag())
    }

    fn to_bag(&self) -> Value {
        Value::String(self.iri().to_string())
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        Ok(Status::resolve(expect_str(key, value)?)?)
    }
}

impl FieldValue for Link {
    fn emit(&self, _: &str, policy: Policy, emitter: &mut Emitter) -> Result<Value, CoreError> {
        emitter.link(self, policy)
    }

    fn to_bag(&self) -> Value {
        match self {
            Link::Iri(iri) => Value::String(iri.to_string()),
            Link::Entity(entity) => Value::Object(entity.to_property_bag()),
        }
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        Link::from_value(key, value)
    }
}
