use caliper_canonical::{IsoDuration, Timestamp};
use serde_json::{Map, Value};

use super::Link;

shape! {
    /// Attributes of a user session.
    pub struct SessionProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        user: Option<Link> = "user";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        started_at_time: Option<Timestamp> = "startedAtTime";
        ended_at_time: Option<Timestamp> = "endedAtTime";
        duration: Option<IsoDuration> = "duration";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a session opened by an LTI launch.
    pub struct LtiSessionProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        user: Option<Link> = "user";
        /// Launch parameters exactly as received from the tool consumer.
        message_parameters: Map<String, Value> = "messageParameters";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        started_at_time: Option<Timestamp> = "startedAtTime";
        ended_at_time: Option<Timestamp> = "endedAtTime";
        duration: Option<IsoDuration> = "duration";
        extensions: Map<String, Value> = "extensions";
    }
}
