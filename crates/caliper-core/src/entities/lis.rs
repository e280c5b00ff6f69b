//! LIS organizational objects.

use caliper_canonical::{Role, Status, Timestamp};
use serde_json::{Map, Value};

use super::Link;

shape! {
    /// Attributes of an organization or group.
    pub struct OrganizationProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        /// Parent organization, embedded in full.
        sub_organization_of: Option<Link> = "subOrganizationOf";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a course offering.
    pub struct CourseOfferingProps {
        academic_session: Option<String> = "academicSession";
        course_number: Option<String> = "courseNumber";
        name: Option<String> = "name";
        description: Option<String> = "description";
        sub_organization_of: Option<Link> = "subOrganizationOf";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a course section.
    pub struct CourseSectionProps {
        academic_session: Option<String> = "academicSession";
        course_number: Option<String> = "courseNumber";
        name: Option<String> = "name";
        description: Option<String> = "description";
        category: Option<String> = "category";
        sub_organization_of: Option<Link> = "subOrganizationOf";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}

shape! {
    /// Attributes of a membership. Member and organization are emitted as
    /// references.
    pub struct MembershipProps {
        name: Option<String> = "name";
        description: Option<String> = "description";
        member: Option<Link> = "member", reference;
        organization: Option<Link> = "organization", reference;
        roles: Vec<Role> = "roles";
        status: Option<Status> = "status";
        date_created: Option<Timestamp> = "dateCreated";
        date_modified: Option<Timestamp> = "dateModified";
        extensions: Map<String, Value> = "extensions";
    }
}
