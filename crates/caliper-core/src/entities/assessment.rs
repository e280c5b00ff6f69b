//! Assignable resources and the attempts and scores attached to them.

use caliper_canonical::{IsoDuration, Timestamp};
use serde_json::{Map, Value};

use super::Link;

shape! {
    /// Attributes of an assessment, an assessment item or any other
    /// assignable resource.
    pub struct AssignableProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        media_type: Option<String> = "mediaType";
        creators: Vec<Link> = "creators";
        keywords: Vec<String> = "keywords";
        aligned_learning_objective: Vec<Link> = "alignedLearningObjective";
        is_part_of: Option<Link> = "isPartOf";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        date_published: Option<Timestamp> = "datePublished";
        date_to_activate: Option<Timestamp> = "dateToActivate";
        date_to_show: Option<Timestamp> = "dateToShow";
        date_to_start_on: Option<Timestamp> = "dateToStartOn";
        date_to_submit: Option<Timestamp> = "dateToSubmit";
        max_attempts: Option<u64> = "maxAttempts";
        max_submits: Option<u64> = "maxSubmits";
        max_score: Option<f64> = "maxScore";
        version: Option<String> = "version";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of an attempt. Assignee and assignable are references.
    pub struct AttemptProps {
        assignee: Option<Link> = "assignee", reference;
        assignable: Option<Link> = "assignable", reference;
        is_part_of: Option<Link> = "isPartOf";
        count: Option<u64> = "count";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        started_at_time: Option<Timestamp> = "startedAtTime";
        ended_at_time: Option<Timestamp> = "endedAtTime";
        duration: Option<IsoDuration> = "duration";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a score.
    pub struct ScoreProps {
        attempt: Option<Link> = "attempt", reference;
        max_score: Option<f64> = "maxScore";
        score_given: Option<f64> = "scoreGiven";
        comment: Option<String> = "comment";
        scored_by: Option<Link> = "scoredBy", reference;
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}
