//! Digital resources: reading material, media, collections and messages.

use caliper_canonical::{IsoDuration, Timestamp};
use serde_json::{Map, Value};

use super::Link;

shape! {
    /// Attributes shared by every plain digital resource kind.
    ///
    /// `creators`, `keywords` and `alignedLearningObjective` default to empty
    /// sequences. `isPartOf` stays unset until a parent is supplied.
    pub struct ResourceProps {
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
        version: Option<String> = "version";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a digital resource collection. Its parent is emitted as
    /// a reference; its items are embedded.
    pub struct CollectionProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        media_type: Option<String> = "mediaType";
        creators: Vec<Link> = "creators";
        keywords: Vec<String> = "keywords";
        aligned_learning_objective: Vec<Link> = "alignedLearningObjective";
        is_part_of: Option<Link> = "isPartOf", reference;
        items: Vec<Link> = "items";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        date_published: Option<Timestamp> = "datePublished";
        version: Option<String> = "version";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a frame within a reading.
    pub struct FrameProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        media_type: Option<String> = "mediaType";
        creators: Vec<Link> = "creators";
        keywords: Vec<String> = "keywords";
        aligned_learning_objective: Vec<Link> = "alignedLearningObjective";
        is_part_of: Option<Link> = "isPartOf";
        index: Option<u64> = "index";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        date_published: Option<Timestamp> = "datePublished";
        version: Option<String> = "version";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of audio, video, image and generic media objects.
    pub struct MediaObjectProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        media_type: Option<String> = "mediaType";
        creators: Vec<Link> = "creators";
        keywords: Vec<String> = "keywords";
        aligned_learning_objective: Vec<Link> = "alignedLearningObjective";
        is_part_of: Option<Link> = "isPartOf";
        duration: Option<IsoDuration> = "duration";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        date_published: Option<Timestamp> = "datePublished";
        version: Option<String> = "version";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a position within a media object.
    pub struct MediaLocationProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        media_type: Option<String> = "mediaType";
        creators: Vec<Link> = "creators";
        keywords: Vec<String> = "keywords";
        aligned_learning_objective: Vec<Link> = "alignedLearningObjective";
        is_part_of: Option<Link> = "isPartOf";
        current_time: Option<IsoDuration> = "currentTime";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        date_published: Option<Timestamp> = "datePublished";
        version: Option<String> = "version";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a forum or thread message.
    pub struct MessageProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        media_type: Option<String> = "mediaType";
        creators: Vec<Link> = "creators";
        keywords: Vec<String> = "keywords";
        aligned_learning_objective: Vec<Link> = "alignedLearningObjective";
        is_part_of: Option<Link> = "isPartOf";
        reply_to: Option<Link> = "replyTo";
        body: Option<String> = "body";
        attachments: Vec<Link> = "attachments";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        date_published: Option<Timestamp> = "datePublished";
        version: Option<String> = "version";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a question posed to a learner.
    pub struct QuestionProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        media_type: Option<String> = "mediaType";
        creators: Vec<Link> = "creators";
        keywords: Vec<String> = "keywords";
        aligned_learning_objective: Vec<Link> = "alignedLearningObjective";
        is_part_of: Option<Link> = "isPartOf";
        question_posed: Option<String> = "questionPosed";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        date_published: Option<Timestamp> = "datePublished";
        version: Option<String> = "version";
        extensions: Map<String, Value> = "extensions";
    }
}
