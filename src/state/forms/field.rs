//! Form field identifiers and raw input payloads

/// Identifies one of the six contact-form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Query,
    Message,
    Consent,
}

impl FieldName {
    /// Display label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Email => "Email Address",
            FieldName::Query => "Query Type",
            FieldName::Message => "Message",
            FieldName::Consent => "I consent to being contacted by the team",
        }
    }

    /// Stable camelCase key used in logs and the serialized snapshot
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Query => "query",
            FieldName::Message => "message",
            FieldName::Consent => "consent",
        }
    }
}

/// Query type options offered by the radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    GeneralEnquiry,
    SupportRequest,
}

impl QueryType {
    pub const ALL: [QueryType; 2] = [QueryType::GeneralEnquiry, QueryType::SupportRequest];

    /// Exact label stored in the field value and shown on screen
    pub fn label(&self) -> &'static str {
        match self {
            QueryType::GeneralEnquiry => "General Enquiry",
            QueryType::SupportRequest => "Support Request",
        }
    }

    /// Look up a query type from its stored label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.label() == label)
    }
}

/// Raw inbound value for a single field edit
///
/// Text fields carry `Text`; the consent checkbox carries `Flag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Flag(bool),
}

impl FieldInput {
    pub fn text(value: impl Into<String>) -> Self {
        FieldInput::Text(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod field_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_labels_match_rendered_form() {
            assert_eq!(FieldName::FirstName.label(), "First Name");
            assert_eq!(FieldName::LastName.label(), "Last Name");
            assert_eq!(FieldName::Email.label(), "Email Address");
            assert_eq!(FieldName::Query.label(), "Query Type");
            assert_eq!(FieldName::Message.label(), "Message");
        }

        #[test]
        fn test_keys_are_camel_case() {
            assert_eq!(FieldName::FirstName.key(), "firstName");
            assert_eq!(FieldName::LastName.key(), "lastName");
            assert_eq!(FieldName::Email.key(), "email");
            assert_eq!(FieldName::Query.key(), "query");
            assert_eq!(FieldName::Message.key(), "message");
            assert_eq!(FieldName::Consent.key(), "consent");
        }
    }

    mod query_type {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_lists_both_options_in_display_order() {
            assert_eq!(
                QueryType::ALL,
                [QueryType::GeneralEnquiry, QueryType::SupportRequest]
            );
        }

        #[test]
        fn test_labels_are_exact() {
            assert_eq!(QueryType::GeneralEnquiry.label(), "General Enquiry");
            assert_eq!(QueryType::SupportRequest.label(), "Support Request");
        }

        #[test]
        fn test_from_label_round_trips() {
            for query in QueryType::ALL {
                assert_eq!(QueryType::from_label(query.label()), Some(query));
            }
        }

        #[test]
        fn test_from_label_rejects_unknown() {
            assert_eq!(QueryType::from_label(""), None);
            assert_eq!(QueryType::from_label("general enquiry"), None);
            assert_eq!(QueryType::from_label("Complaint"), None);
        }
    }

    mod field_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_helper_builds_text_variant() {
            assert_eq!(FieldInput::text("Ada"), FieldInput::Text("Ada".to_string()));
        }
    }
}
