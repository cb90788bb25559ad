//! People, teams and other actor profiles.

use super::ReferenceableProperties;

variant_properties! {
    /// Shared by every kind of actor.
    ActorProfileProperties extends ReferenceableProperties as referenceable {
        display_name: String = "displayName",
        description: String = "description",
    }
}

variant_properties! {
    PersonProperties extends ActorProfileProperties as actor_profile {
        title: String = "title",
        initials: String = "initials",
        given_names: String = "givenNames",
        surname: String = "surname",
        full_name: String = "fullName",
        preferred_language: String = "preferredLanguage",
        job_title: String = "jobTitle",
        employee_number: String = "employeeNumber",
        employee_type: String = "employeeType",
        email_address: String = "emailAddress",
        pronouns: String = "pronouns",
        is_public: bool = "isPublic",
    }
}

variant_properties! {
    TeamProperties extends ActorProfileProperties as actor_profile {
        team_type: String = "teamType",
        identifier: String = "identifier",
    }
}
