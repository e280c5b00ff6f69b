//! Event model.
//!
//! Every event kind shares one record; the kind is an [`EventType`] tag that
//! fixes the `@type` and restricts the action to the kind's allowed set.

use caliper_canonical::{Action, EventType, IdGenerator, Iri, Timestamp};
use serde_json::{Map, Value};
use tracing::debug;

use crate::entities::{parse_id, Link};
use crate::errors::CoreError;
use crate::node::{header, is_reserved, Emitter, Field, FieldValue, Node, Policy, PropertyBag};

/// Actions an event kind accepts. `None` means every action.
pub fn allowed_actions(kind: EventType) -> Option<&'static [Action]> {
    use Action::*;

    let actions: &'static [Action] = match kind {
        EventType::Event => return None,
        EventType::AnnotationEvent => &[Bookmarked, Highlighted, Shared, Tagged],
        EventType::AssessmentEvent => &[Started, Paused, Resumed, Restarted, Reset, Submitted],
        EventType::AssessmentItemEvent => &[Started, Skipped, Completed],
        EventType::AssignableEvent => &[
            Activated,
            Deactivated,
            Started,
            Completed,
            Submitted,
            Reviewed,
        ],
        EventType::ForumEvent => &[Subscribed, Unsubscribed],
        EventType::GradeEvent => &[Graded],
        EventType::MediaEvent => &[
            Started,
            Ended,
            Paused,
            Resumed,
            Restarted,
            ForwardedTo,
            JumpedTo,
            ChangedResolution,
            ChangedSize,
            ChangedSpeed,
            ChangedVolume,
            EnabledClosedCaptioning,
            DisabledClosedCaptioning,
            EnteredFullScreen,
            ExitedFullScreen,
            Muted,
            Unmuted,
            OpenedPopout,
            ClosedPopout,
        ],
        EventType::MessageEvent => &[Posted, MarkedAsRead, MarkedAsUnread],
        EventType::NavigationEvent => &[NavigatedTo],
        EventType::SearchEvent => &[Searched],
        EventType::SessionEvent => &[LoggedIn, LoggedOut, TimedOut],
        EventType::ThreadEvent => &[
            Created,
            Deleted,
            MarkedAsRead,
            MarkedAsUnread,
            Removed,
            Updated,
        ],
        EventType::ToolLaunchEvent => &[Launched, Returned],
        EventType::ToolUseEvent => &[Used],
        EventType::ViewEvent => &[Viewed],
    };
    Some(actions)
}

/// True when `kind` accepts `action`.
pub fn is_allowed(kind: EventType, action: Action) -> bool {
    allowed_actions(kind).map_or(true, |actions| actions.contains(&action))
}

fn check_action(kind: EventType, action: Action) -> Result<(), CoreError> {
    if is_allowed(kind, action) {
        Ok(())
    } else {
        Err(CoreError::IllegalActionForEventType {
            event_type: kind,
            action,
        })
    }
}

/// A single interaction: an actor performing an action on an object.
///
/// Construct through [`EventBuilder`] or the factory. The kind and action
/// are private so that the action can only change through
/// [`Event::set_action`], which re-checks the kind's allowed set.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: Iri,
    event_type: EventType,
    action: Action,
    /// Agent performing the action.
    pub actor: Link,
    /// Object acted upon.
    pub object: Link,
    /// Part of the object that was targeted.
    pub target: Option<Link>,
    /// Entity produced by the interaction.
    pub generated: Option<Link>,
    /// When the interaction happened.
    pub event_time: Timestamp,
    /// Resource the actor came from.
    pub referrer: Option<Link>,
    /// Application in which the interaction happened.
    pub ed_app: Option<Link>,
    /// Organizational context.
    pub group: Option<Link>,
    /// Actor's membership in the group.
    pub membership: Option<Link>,
    /// Actor's session.
    pub session: Option<Link>,
    /// LTI session of the tool consumer.
    pub federated_session: Option<Link>,
    /// Additional, non-vocabulary attributes.
    pub extensions: Map<String, Value>,
}

impl Event {
    /// Kind of this event.
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Action performed.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Replaces the action, keeping the old one if the kind disallows it.
    pub fn set_action(&mut self, action: Action) -> Result<(), CoreError> {
        check_action(self.event_type, action)?;
        self.action = action;
        Ok(())
    }

    /// Builds an event of `kind` from a property bag. Keys are the camelCase
    /// attribute names; `id` is optional.
    pub(crate) fn from_bag(
        kind: EventType,
        bag: &PropertyBag,
        ids: &dyn IdGenerator,
    ) -> Result<Self, CoreError> {
        let mut builder = EventBuilder::new(kind);
        if let Some(id) = header(bag, "id")? {
            builder.id = Some(parse_id(id)?);
        }

        for (key, value) in bag {
            if is_reserved(key) {
                continue;
            }
            match key.as_str() {
                "actor" => builder.actor = Field::from_bag(key, value)?,
                "action" => builder.action = Some(action_from_bag(key, value)?),
                "object" => builder.object = Field::from_bag(key, value)?,
                "target" => builder.target = Field::from_bag(key, value)?,
                "generated" => builder.generated = Field::from_bag(key, value)?,
                "eventTime" => builder.event_time = Field::from_bag(key, value)?,
                "referrer" => builder.referrer = Field::from_bag(key, value)?,
                "edApp" => builder.ed_app = Field::from_bag(key, value)?,
                "group" => builder.group = Field::from_bag(key, value)?,
                "membership" => builder.membership = Field::from_bag(key, value)?,
                "session" => builder.session = Field::from_bag(key, value)?,
                "federatedSession" => builder.federated_session = Field::from_bag(key, value)?,
                "extensions" => builder.extensions = Field::from_bag(key, value)?,
                _ => {
                    return Err(CoreError::UnknownProperty {
                        kind: kind.term(),
                        key: key.clone(),
                    })
                }
            }
        }

        builder.build(ids)
    }
}

fn action_from_bag(key: &str, value: &Value) -> Result<Action, CoreError> {
    let raw = value
        .as_str()
        .ok_or_else(|| CoreError::invalid_property(key, "expected a string"))?;
    Ok(Action::resolve(raw)?)
}

fn put<F: Field>(
    out: &mut Map<String, Value>,
    key: &'static str,
    field: &F,
    emitter: &mut Emitter,
) -> Result<(), CoreError> {
    if let Some(value) = field.emit(key, Policy::Embed, emitter)? {
        out.insert(key.to_string(), value);
    }
    Ok(())
}

impl Node for Event {
    fn id(&self) -> &Iri {
        &self.id
    }

    fn type_iri(&self) -> &'static str {
        self.event_type.iri()
    }

    fn to_property_bag(&self) -> PropertyBag {
        let mut bag = Map::new();
        bag.insert("id".into(), Value::String(self.id.to_string()));
        bag.insert("type".into(), Value::String(self.type_iri().to_string()));
        bag.insert("actor".into(), FieldValue::to_bag(&self.actor));
        bag.insert("action".into(), Value::String(self.action.iri().to_string()));
        bag.insert("object".into(), FieldValue::to_bag(&self.object));
        let optional = [
            ("target", &self.target),
            ("generated", &self.generated),
            ("referrer", &self.referrer),
            ("edApp", &self.ed_app),
            ("group", &self.group),
            ("membership", &self.membership),
            ("session", &self.session),
            ("federatedSession", &self.federated_session),
        ];
        for (key, link) in optional {
            if let Some(value) = Field::to_bag(link) {
                bag.insert(key.to_string(), value);
            }
        }
        bag.insert("eventTime".into(), FieldValue::to_bag(&self.event_time));
        if let Some(value) = Field::to_bag(&self.extensions) {
            bag.insert("extensions".into(), value);
        }
        bag
    }

    fn write_fields(
        &self,
        out: &mut Map<String, Value>,
        emitter: &mut Emitter,
    ) -> Result<(), CoreError> {
        let actor = FieldValue::emit(&self.actor, "actor", Policy::Embed, emitter)?;
        out.insert("actor".into(), actor);
        out.insert("action".into(), Value::String(self.action.iri().to_string()));
        let object = FieldValue::emit(&self.object, "object", Policy::Embed, emitter)?;
        out.insert("object".into(), object);
        put(out, "target", &self.target, emitter)?;
        put(out, "generated", &self.generated, emitter)?;
        out.insert("eventTime".into(), FieldValue::to_bag(&self.event_time));
        put(out, "referrer", &self.referrer, emitter)?;
        put(out, "edApp", &self.ed_app, emitter)?;
        put(out, "group", &self.group, emitter)?;
        put(out, "membership", &self.membership, emitter)?;
        put(out, "session", &self.session, emitter)?;
        put(out, "federatedSession", &self.federated_session, emitter)?;
        put(out, "extensions", &self.extensions, emitter)
    }
}

/// Typed construction of an [`Event`].
///
/// ```rust
/// use caliper_canonical::{Action, EntityType, EventType, Iri, Timestamp, UuidGenerator};
/// use caliper_core::{Entity, EventBuilder, Node};
///
/// let actor = Entity::of_kind(EntityType::Person, Iri::parse("https://example.edu/users/554433")?);
/// let video = Entity::of_kind(EntityType::VideoObject, Iri::parse("https://example.edu/videos/1225")?);
///
/// let event = EventBuilder::new(EventType::MediaEvent)
///     .actor(actor)
///     .action(Action::Paused)
///     .object(video)
///     .event_time(Timestamp::parse("2016-11-15T10:15:00.000Z")?)
///     .build(&UuidGenerator::default())?;
/// assert!(event.id().as_str().starts_with("urn:uuid:"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct EventBuilder {
    kind: EventType,
    id: Option<Iri>,
    actor: Option<Link>,
    action: Option<Action>,
    object: Option<Link>,
    target: Option<Link>,
    generated: Option<Link>,
    event_time: Option<Timestamp>,
    referrer: Option<Link>,
    ed_app: Option<Link>,
    group: Option<Link>,
    membership: Option<Link>,
    session: Option<Link>,
    federated_session: Option<Link>,
    extensions: Map<String, Value>,
}

impl EventBuilder {
    /// Starts an event of `kind`.
    pub fn new(kind: EventType) -> Self {
        Self {
            kind,
            id: None,
            actor: None,
            action: None,
            object: None,
            target: None,
            generated: None,
            event_time: None,
            referrer: None,
            ed_app: None,
            group: None,
            membership: None,
            session: None,
            federated_session: None,
            extensions: Map::new(),
        }
    }

    /// Explicit identifier; one is generated when omitted.
    pub fn id(mut self, id: Iri) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the actor.
    pub fn actor(mut self, actor: impl Into<Link>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Sets the action.
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets the object.
    pub fn object(mut self, object: impl Into<Link>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Sets the target.
    pub fn target(mut self, target: impl Into<Link>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the generated entity.
    pub fn generated(mut self, generated: impl Into<Link>) -> Self {
        self.generated = Some(generated.into());
        self
    }

    /// Sets the event time.
    pub fn event_time(mut self, at: Timestamp) -> Self {
        self.event_time = Some(at);
        self
    }

    /// Sets the referrer.
    pub fn referrer(mut self, referrer: impl Into<Link>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    /// Sets the edApp.
    pub fn ed_app(mut self, ed_app: impl Into<Link>) -> Self {
        self.ed_app = Some(ed_app.into());
        self
    }

    /// Sets the group.
    pub fn group(mut self, group: impl Into<Link>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sets the membership.
    pub fn membership(mut self, membership: impl Into<Link>) -> Self {
        self.membership = Some(membership.into());
        self
    }

    /// Sets the session.
    pub fn session(mut self, session: impl Into<Link>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// Sets the federated (LTI) session.
    pub fn federated_session(mut self, session: impl Into<Link>) -> Self {
        self.federated_session = Some(session.into());
        self
    }

    /// Adds one extension member.
    pub fn extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Validates and builds the event.
    ///
    /// Mandatory fields are checked in the order actor, action, object,
    /// eventTime; the action is then checked against the kind.
    pub fn build(self, ids: &dyn IdGenerator) -> Result<Event, CoreError> {
        let actor = self.actor.ok_or(CoreError::MissingRequiredField("actor"))?;
        let action = self.action.ok_or(CoreError::MissingRequiredField("action"))?;
        let object = self.object.ok_or(CoreError::MissingRequiredField("object"))?;
        let event_time = self
            .event_time
            .ok_or(CoreError::MissingRequiredField("eventTime"))?;
        check_action(self.kind, action)?;

        let id = match self.id {
            Some(id) => id,
            None => parse_id(&ids.generate_id())?,
        };
        debug!(event_type = self.kind.term(), id = %id, action = action.term(), "built event");

        Ok(Event {
            id,
            event_type: self.kind,
            action,
            actor,
            object,
            target: self.target,
            generated: self.generated,
            event_time,
            referrer: self.referrer,
            ed_app: self.ed_app,
            group: self.group,
            membership: self.membership,
            session: self.session,
            federated_session: self.federated_session,
            extensions: self.extensions,
        })
    }
}
