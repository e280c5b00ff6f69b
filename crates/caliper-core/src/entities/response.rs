use caliper_canonical::{IsoDuration, Timestamp};
use serde_json::{Map, Value};

use super::Link;

shape! {
    /// Attributes of a generic response.
    pub struct ResponseProps {
        attempt: Option<Link> = "attempt";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        started_at_time: Option<Timestamp> = "startedAtTime";
        ended_at_time: Option<Timestamp> = "endedAtTime";
        duration: Option<IsoDuration> = "duration";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Multiple-choice and true/false responses.
    pub struct SingleValueResponseProps {
        attempt: Option<Link> = "attempt";
        value: Option<String> = "value";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        started_at_time: Option<Timestamp> = "startedAtTime";
        ended_at_time: Option<Timestamp> = "endedAtTime";
        duration: Option<IsoDuration> = "duration";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Fill-in-blank, multiple-response and select-text responses.
    pub struct MultiValueResponseProps {
        attempt: Option<Link> = "attempt";
        values: Vec<String> = "values";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        started_at_time: Option<Timestamp> = "startedAtTime";
        ended_at_time: Option<Timestamp> = "endedAtTime";
        duration: Option<IsoDuration> = "duration";
        extensions: Map<String, Value> = "extensions";
    }
}
