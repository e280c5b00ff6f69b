//! Process-wide vocabulary tables.
//!
//! Every vocabulary is a closed enum whose members carry a symbolic key
//! (`PAUSED`), a term (`Paused`) and a canonical IRI. Reverse lookups go
//! through hash tables built once on first use and never mutated afterwards.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// JSON-LD context IRI of the v1p1 data model.
pub const CALIPER_CONTEXT: &str = "http://purl.imsglobal.org/ctx/caliper/v1p1";

/// Lookup failure for a symbolic key, term or IRI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// The value is not a member of the named vocabulary.
    #[error("unknown {vocabulary} term: {term}")]
    UnknownTerm {
        /// Vocabulary that was searched.
        vocabulary: &'static str,
        /// Offending key, term or IRI.
        term: String,
    },
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, $base:literal {
            $( $variant:ident => $key:literal, $term:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(missing_docs)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Symbolic key, e.g. `PAUSED`.
            pub const fn key(self) -> &'static str {
                match self { $( $name::$variant => $key, )+ }
            }

            /// Short term, e.g. `Paused`.
            pub const fn term(self) -> &'static str {
                match self { $( $name::$variant => $term, )+ }
            }

            /// Canonical IRI.
            pub const fn iri(self) -> &'static str {
                match self { $( $name::$variant => concat!($base, $term), )+ }
            }

            /// Looks a member up by symbolic key.
            pub fn from_key(key: &str) -> Result<Self, VocabularyError> {
                static BY_KEY: Lazy<HashMap<&'static str, $name>> =
                    Lazy::new(|| $name::ALL.iter().map(|v| (v.key(), *v)).collect());
                BY_KEY.get(key).copied().ok_or_else(|| Self::unknown(key))
            }

            /// Looks a member up by term.
            pub fn from_term(term: &str) -> Result<Self, VocabularyError> {
                static BY_TERM: Lazy<HashMap<&'static str, $name>> =
                    Lazy::new(|| $name::ALL.iter().map(|v| (v.term(), *v)).collect());
                BY_TERM.get(term).copied().ok_or_else(|| Self::unknown(term))
            }

            /// Looks a member up by canonical IRI.
            pub fn from_iri(iri: &str) -> Result<Self, VocabularyError> {
                static BY_IRI: Lazy<HashMap<&'static str, $name>> =
                    Lazy::new(|| $name::ALL.iter().map(|v| (v.iri(), *v)).collect());
                BY_IRI.get(iri).copied().ok_or_else(|| Self::unknown(iri))
            }

            /// Accepts an IRI, a term or a key, tried in that order.
            pub fn resolve(value: &str) -> Result<Self, VocabularyError> {
                Self::from_iri(value)
                    .or_else(|_| Self::from_term(value))
                    .or_else(|_| Self::from_key(value))
            }

            fn unknown(value: &str) -> VocabularyError {
                VocabularyError::UnknownTerm {
                    vocabulary: $label,
                    term: value.to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.iri())
            }
        }

        impl FromStr for $name {
            type Err = VocabularyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::resolve(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.iri())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::resolve(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

vocabulary! {
    /// Actions an actor can perform on an object.
    Action, "action", "http://purl.imsglobal.org/vocab/caliper/v1/action#" {
        Aborted => "ABORTED", "Aborted";
        Accepted => "ACCEPTED", "Accepted";
        Activated => "ACTIVATED", "Activated";
        Added => "ADDED", "Added";
        Attached => "ATTACHED", "Attached";
        Bookmarked => "BOOKMARKED", "Bookmarked";
        ChangedResolution => "CHANGED_RESOLUTION", "ChangedResolution";
        ChangedSize => "CHANGED_SIZE", "ChangedSize";
        ChangedSpeed => "CHANGED_SPEED", "ChangedSpeed";
        ChangedVolume => "CHANGED_VOLUME", "ChangedVolume";
        Classified => "CLASSIFIED", "Classified";
        ClosedPopout => "CLOSED_POPOUT", "ClosedPopout";
        Commented => "COMMENTED", "Commented";
        Completed => "COMPLETED", "Completed";
        Created => "CREATED", "Created";
        Deactivated => "DEACTIVATED", "Deactivated";
        Declined => "DECLINED", "Declined";
        Deleted => "DELETED", "Deleted";
        Described => "DESCRIBED", "Described";
        DisabledClosedCaptioning => "DISABLED_CLOSED_CAPTIONING", "DisabledClosedCaptioning";
        Disliked => "DISLIKED", "Disliked";
        EnabledClosedCaptioning => "ENABLED_CLOSED_CAPTIONING", "EnabledClosedCaptioning";
        Ended => "ENDED", "Ended";
        EnteredFullScreen => "ENTERED_FULLSCREEN", "EnteredFullScreen";
        ExitedFullScreen => "EXITED_FULLSCREEN", "ExitedFullScreen";
        ForwardedTo => "FORWARDED_TO", "ForwardedTo";
        Graded => "GRADED", "Graded";
        Hid => "HID", "Hid";
        Highlighted => "HIGHLIGHTED", "Highlighted";
        Identified => "IDENTIFIED", "Identified";
        JumpedTo => "JUMPED_TO", "JumpedTo";
        Launched => "LAUNCHED", "Launched";
        Liked => "LIKED", "Liked";
        Linked => "LINKED", "Linked";
        LoggedIn => "LOGGED_IN", "LoggedIn";
        LoggedOut => "LOGGED_OUT", "LoggedOut";
        MarkedAsRead => "MARKED_AS_READ", "MarkedAsRead";
        MarkedAsUnread => "MARKED_AS_UNREAD", "MarkedAsUnread";
        Modified => "MODIFIED", "Modified";
        Muted => "MUTED", "Muted";
        NavigatedTo => "NAVIGATED_TO", "NavigatedTo";
        OpenedPopout => "OPENED_POPOUT", "OpenedPopout";
        Paused => "PAUSED", "Paused";
        Posted => "POSTED", "Posted";
        Questioned => "QUESTIONED", "Questioned";
        Ranked => "RANKED", "Ranked";
        Recommended => "RECOMMENDED", "Recommended";
        Removed => "REMOVED", "Removed";
        Reset => "RESET", "Reset";
        Restarted => "RESTARTED", "Restarted";
        Resumed => "RESUMED", "Resumed";
        Retrieved => "RETRIEVED", "Retrieved";
        Returned => "RETURNED", "Returned";
        Reviewed => "REVIEWED", "Reviewed";
        Rewound => "REWOUND", "Rewound";
        Saved => "SAVED", "Saved";
        Searched => "SEARCHED", "Searched";
        Shared => "SHARED", "Shared";
        Showed => "SHOWED", "Showed";
        Skipped => "SKIPPED", "Skipped";
        Started => "STARTED", "Started";
        Submitted => "SUBMITTED", "Submitted";
        Subscribed => "SUBSCRIBED", "Subscribed";
        Tagged => "TAGGED", "Tagged";
        TimedOut => "TIMED_OUT", "TimedOut";
        Unmuted => "UNMUTED", "Unmuted";
        Unsubscribed => "UNSUBSCRIBED", "Unsubscribed";
        Updated => "UPDATED", "Updated";
        Used => "USED", "Used";
        Viewed => "VIEWED", "Viewed";
    }
}

vocabulary! {
    /// Entity kinds of the data model.
    EntityType, "entity type", "http://purl.imsglobal.org/caliper/v1/" {
        Annotation => "ANNOTATION", "Annotation";
        Assessment => "ASSESSMENT", "Assessment";
        AssessmentItem => "ASSESSMENT_ITEM", "AssessmentItem";
        AssignableDigitalResource => "ASSIGNABLE_DIGITAL_RESOURCE", "AssignableDigitalResource";
        Attempt => "ATTEMPT", "Attempt";
        AudioObject => "AUDIO_OBJECT", "AudioObject";
        BookmarkAnnotation => "BOOKMARK_ANNOTATION", "BookmarkAnnotation";
        Chapter => "CHAPTER", "Chapter";
        CourseOffering => "COURSE_OFFERING", "CourseOffering";
        CourseSection => "COURSE_SECTION", "CourseSection";
        DigitalResource => "DIGITAL_RESOURCE", "DigitalResource";
        DigitalResourceCollection => "DIGITAL_RESOURCE_COLLECTION", "DigitalResourceCollection";
        Document => "DOCUMENT", "Document";
        EpubVolume => "EPUB_VOLUME", "EpubVolume";
        FillinBlankResponse => "FILLINBLANK", "FillinBlankResponse";
        Forum => "FORUM", "Forum";
        Frame => "FRAME", "Frame";
        Group => "GROUP", "Group";
        HighlightAnnotation => "HIGHLIGHT_ANNOTATION", "HighlightAnnotation";
        ImageObject => "IMAGE_OBJECT", "ImageObject";
        LearningObjective => "LEARNING_OBJECTIVE", "LearningObjective";
        Link => "LINK", "Link";
        LtiLink => "LTI_LINK", "LtiLink";
        LtiSession => "LTI_SESSION", "LtiSession";
        MediaLocation => "MEDIA_LOCATION", "MediaLocation";
        MediaObject => "MEDIA_OBJECT", "MediaObject";
        Membership => "MEMBERSHIP", "Membership";
        Message => "MESSAGE", "Message";
        MultipleChoiceResponse => "MULTIPLECHOICE", "MultipleChoiceResponse";
        MultipleResponseResponse => "MULTIPLERESPONSE", "MultipleResponseResponse";
        Organization => "ORGANIZATION", "Organization";
        Page => "PAGE", "Page";
        Person => "PERSON", "Person";
        Query => "QUERY", "Query";
        Question => "QUESTION", "Question";
        Response => "RESPONSE", "Response";
        Score => "SCORE", "Score";
        SearchResponse => "SEARCH_RESPONSE", "SearchResponse";
        SelectTextResponse => "SELECTTEXT", "SelectTextResponse";
        Session => "SESSION", "Session";
        SharedAnnotation => "SHARED_ANNOTATION", "SharedAnnotation";
        SoftwareApplication => "SOFTWARE_APPLICATION", "SoftwareApplication";
        TagAnnotation => "TAG_ANNOTATION", "TagAnnotation";
        Thread => "THREAD", "Thread";
        TrueFalseResponse => "TRUEFALSE", "TrueFalseResponse";
        VideoObject => "VIDEO_OBJECT", "VideoObject";
        WebPage => "WEB_PAGE", "WebPage";
    }
}

vocabulary! {
    /// Event kinds of the data model.
    EventType, "event type", "http://purl.imsglobal.org/caliper/v1/" {
        Event => "EVENT", "Event";
        AnnotationEvent => "ANNOTATION", "AnnotationEvent";
        AssessmentEvent => "ASSESSMENT", "AssessmentEvent";
        AssessmentItemEvent => "ASSESSMENT_ITEM", "AssessmentItemEvent";
        AssignableEvent => "ASSIGNABLE", "AssignableEvent";
        ForumEvent => "FORUM", "ForumEvent";
        GradeEvent => "GRADE", "GradeEvent";
        MediaEvent => "MEDIA", "MediaEvent";
        MessageEvent => "MESSAGE", "MessageEvent";
        NavigationEvent => "NAVIGATION", "NavigationEvent";
        SearchEvent => "SEARCH", "SearchEvent";
        SessionEvent => "SESSION", "SessionEvent";
        ThreadEvent => "THREAD", "ThreadEvent";
        ToolLaunchEvent => "TOOL_LAUNCH", "ToolLaunchEvent";
        ToolUseEvent => "TOOL_USE", "ToolUseEvent";
        ViewEvent => "VIEW", "ViewEvent";
    }
}

vocabulary! {
    /// LIS membership roles.
    Role, "role", "http://purl.imsglobal.org/vocab/lis/v2/membership#" {
        Administrator => "ADMINISTRATOR", "Administrator";
        ContentDeveloper => "CONTENT_DEVELOPER", "ContentDeveloper";
        Instructor => "INSTRUCTOR", "Instructor";
        Learner => "LEARNER", "Learner";
        Manager => "MANAGER", "Manager";
        Member => "MEMBER", "Member";
        Mentor => "MENTOR", "Mentor";
        TeachingAssistant => "TEACHING_ASSISTANT", "TeachingAssistant";
    }
}

vocabulary! {
    /// LIS membership status.
    Status, "status", "http://purl.imsglobal.org/vocab/lis/v2/status#" {
        Active => "ACTIVE", "Active";
        Inactive => "INACTIVE", "Inactive";
    }
}

/// Names one of the vocabularies for uniform lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// [`Action`]
    Action,
    /// [`EntityType`]
    EntityType,
    /// [`EventType`]
    EventType,
    /// [`Role`]
    Role,
    /// [`Status`]
    Status,
}

impl Vocabulary {
    /// Maps a symbolic key to its canonical IRI.
    ///
    /// ```rust
    /// use caliper_canonical::Vocabulary;
    ///
    /// let iri = Vocabulary::Action.lookup("PAUSED")?;
    /// assert_eq!(iri, "http://purl.imsglobal.org/vocab/caliper/v1/action#Paused");
    /// assert!(Vocabulary::Action.lookup("NAPPED").is_err());
    /// # Ok::<(), caliper_canonical::VocabularyError>(())
    /// ```
    pub fn lookup(self, key: &str) -> Result<&'static str, VocabularyError> {
        match self {
            Vocabulary::Action => Action::from_key(key).map(Action::iri),
            Vocabulary::EntityType => EntityType::from_key(key).map(EntityType::iri),
            Vocabulary::EventType => EventType::from_key(key).map(EventType::iri),
            Vocabulary::Role => Role::from_key(key).map(Role::iri),
            Vocabulary::Status => Status::from_key(key).map(Status::iri),
        }
    }
}

/// Registry facade: maps `key` in `vocabulary` to its canonical IRI.
pub fn lookup(vocabulary: Vocabulary, key: &str) -> Result<&'static str, VocabularyError> {
    vocabulary.lookup(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_terms_and_iris_resolve_to_the_same_member() {
        for action in Action::ALL {
            assert_eq!(Action::from_key(action.key()), Ok(*action));
            assert_eq!(Action::from_term(action.term()), Ok(*action));
            assert_eq!(Action::from_iri(action.iri()), Ok(*action));
        }
    }

    #[test]
    fn unknown_keys_fail_loudly() {
        let err = Role::from_key("LURKER").unwrap_err();
        assert_eq!(
            err,
            VocabularyError::UnknownTerm {
                vocabulary: "role",
                term: "LURKER".to_string()
            }
        );
    }

    #[test]
    fn entity_and_event_type_iris() {
        assert_eq!(
            EntityType::Person.iri(),
            "http://purl.imsglobal.org/caliper/v1/Person"
        );
        assert_eq!(
            EventType::MediaEvent.iri(),
            "http://purl.imsglobal.org/caliper/v1/MediaEvent"
        );
    }

    #[test]
    fn tables_have_no_duplicate_iris() {
        use std::collections::HashSet;
        let iris: HashSet<_> = EntityType::ALL.iter().map(|t| t.iri()).collect();
        assert_eq!(iris.len(), EntityType::ALL.len());
        let keys: HashSet<_> = Action::ALL.iter().map(|a| a.key()).collect();
        assert_eq!(keys.len(), Action::ALL.len());
    }

    #[test]
    fn serializes_as_iri() {
        let json = serde_json::to_string(&Status::Active).unwrap();
        assert_eq!(json, r#""http://purl.imsglobal.org/vocab/lis/v2/status#Active""#);
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Status::Active);
        let by_term: Role = serde_json::from_str(r#""Learner""#).unwrap();
        assert_eq!(by_term, Role::Learner);
    }
}
