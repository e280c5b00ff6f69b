//! Annotations. The annotator and the annotated resource are always emitted
//! as references.

use caliper_canonical::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Link;
use crate::errors::CoreError;
use crate::node::{Emitter, FieldValue, Policy};

/// Text position selector of a highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Start offset.
    pub start: String,
    /// End offset.
    pub end: String,
}

impl FieldValue for Selection {
    fn emit(&self, _: &str, _: Policy, _: &mut Emitter) -> Result<Value, CoreError> {
        Ok(self.to_bag())
    }

    fn to_bag(&self) -> Value {
        let mut out = Map::new();
        out.insert("start".into(), Value::String(self.start.clone()));
        out.insert("end".into(), Value::String(self.end.clone()));
        Value::Object(out)
    }

    fn from_bag(key: &str, value: &Value) -> Result<Self, CoreError> {
        serde_json::from_value(value.clone()).map_err(|err| CoreError::invalid_property(key, err))
    }
}

shape! {
    /// Attributes of a plain annotation.
    pub struct AnnotationProps {
        annotator: Option<Link> = "annotator", reference;
        annotated: Option<Link> = "annotated", reference;
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    pub struct BookmarkAnnotationProps {
        annotator: Option<Link> = "annotator", reference;
        annotated: Option<Link> = "annotated", reference;
        bookmark_notes: Option<String> = "bookmarkNotes";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    pub struct HighlightAnnotationProps {
        annotator: Option<Link> = "annotator", reference;
        annotated: Option<Link> = "annotated", reference;
        selection: Option<Selection> = "selection";
        selection_text: Option<String> = "selectionText";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a share. Recipients are references.
    pub struct SharedAnnotationProps {
        annotator: Option<Link> = "annotator", reference;
        annotated: Option<Link> = "annotated", reference;
        with_agents: Vec<Link> = "withAgents", reference;
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    pub struct TagAnnotationProps {
        annotator: Option<Link> = "annotator", reference;
        annotated: Option<Link> = "annotated", reference;
        tags: Vec<String> = "tags";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}
