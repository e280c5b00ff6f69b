use caliper_canonical::{Action, EventType, VocabularyError};
use thiserror::Error;

/// Core error types.
///
/// Every error is raised at the point of violation, during construction or
/// serialization of a single node. A failed build leaves no partial state
/// behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Empty or malformed node identifier.
    #[error("invalid identifier '{value}': {reason}")]
    InvalidIdentifier {
        /// Offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// A relationship field was given a value that is not an identified node.
    #[error("{field} must reference a node with an id")]
    InvalidReference {
        /// Relationship field name.
        field: String,
    },
    /// A mandatory attribute is absent.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    /// The action is outside the event kind's allowed set.
    #[error("action {} is not allowed for {}", .action.term(), .event_type.term())]
    IllegalActionForEventType {
        /// Event kind being built.
        event_type: EventType,
        /// Rejected action.
        action: Action,
    },
    /// Lookup of an undefined vocabulary term.
    #[error(transparent)]
    UnknownVocabularyTerm(#[from] VocabularyError),
    /// The same node id appears twice on one embedding chain.
    #[error("cyclic reference through {id}")]
    CyclicReference {
        /// Id met twice.
        id: String,
    },
    /// NaN or infinity in a numeric attribute.
    #[error("non-finite number in {0}")]
    NonFiniteNumber(String),
    /// Property bag key that the kind does not declare.
    #[error("{key} is not a property of {kind}")]
    UnknownProperty {
        /// Kind term.
        kind: &'static str,
        /// Offending key.
        key: String,
    },
    /// Property present but of the wrong shape.
    #[error("invalid value for {key}: {reason}")]
    InvalidProperty {
        /// Attribute name.
        key: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn invalid_property(key: &str, reason: impl ToString) -> Self {
        CoreError::InvalidProperty {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
