use caliper_canonical::Timestamp;
use serde_json::{Map, Value};

shape! {
    /// Attributes of a person or a learning objective.
    pub struct AgentProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a software application such as an edApp.
    pub struct SoftwareApplicationProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        version: Option<String> = "version";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}
