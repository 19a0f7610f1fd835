//! Vocabulary terms used by access rules and response metadata.

/// Web Access Control vocabulary, extended with `Create` and `Delete` modes.
pub mod acl {
    use crate::NamedNode;

    /// Namespace of the vocabulary
    pub const NAMESPACE: &str = "http://www.w3.org/ns/auth/acl#";

    /// Class of authorization rules
    pub const AUTHORIZATION: NamedNode =
        NamedNode::from_static("http://www.w3.org/ns/auth/acl#Authorization");
    /// Resource a rule applies to
    pub const ACCESS_TO: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#accessTo");
    /// Container whose members inherit a rule
    pub const DEFAULT: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#default");
    /// Mode granted by a rule
    pub const MODE: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#mode");
    /// Exact agent a rule grants to
    pub const AGENT: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#agent");
    /// Class of agents a rule grants to
    pub const AGENT_CLASS: NamedNode =
        NamedNode::from_static("http://www.w3.org/ns/auth/acl#agentClass");
    /// Group of agents a rule grants to
    pub const AGENT_GROUP: NamedNode =
        NamedNode::from_static("http://www.w3.org/ns/auth/acl#agentGroup");
    /// Origin a rule grants to
    pub const ORIGIN: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#origin");
    /// Every agent that presents a WebID
    pub const AUTHENTICATED_AGENT: NamedNode =
        NamedNode::from_static("http://www.w3.org/ns/auth/acl#AuthenticatedAgent");

    /// Read mode
    pub const READ: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#Read");
    /// Write mode
    pub const WRITE: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#Write");
    /// Append mode
    pub const APPEND: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#Append");
    /// Create mode
    pub const CREATE: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#Create");
    /// Delete mode
    pub const DELETE: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#Delete");
    /// Control mode, for managing the rules themselves
    pub const CONTROL: NamedNode = NamedNode::from_static("http://www.w3.org/ns/auth/acl#Control");
}

/// Friend-of-a-friend vocabulary.
pub mod foaf {
    use crate::NamedNode;

    /// Namespace of the vocabulary
    pub const NAMESPACE: &str = "http://xmlns.com/foaf/0.1/";

    /// Every agent, authenticated or not
    pub const AGENT: NamedNode = NamedNode::from_static("http://xmlns.com/foaf/0.1/Agent");
}

/// Server-internal HTTP metadata terms.
pub mod http {
    use crate::NamedNode;

    /// Namespace of the vocabulary
    pub const NAMESPACE: &str = "urn:ldp:http:";

    /// Numeric status code of a response
    pub const STATUS_CODE_NUMBER: NamedNode = NamedNode::from_static("urn:ldp:http:statusCodeNumber");
}

/// Ticket negotiation terms.
pub mod auth {
    use crate::NamedNode;

    /// Namespace of the vocabulary
    pub const NAMESPACE: &str = "urn:ldp:auth:";

    /// The resource a ticket has to name
    pub const TICKET_SUBJECT: NamedNode = NamedNode::from_static("urn:ldp:auth:ticketSubject");
    /// A mode a ticket has to grant
    pub const TICKET_NEEDS: NamedNode = NamedNode::from_static("urn:ldp:auth:ticketNeeds");
}

/// Media annotations vocabulary.
pub mod ma {
    use crate::NamedNode;

    /// Namespace of the vocabulary
    pub const NAMESPACE: &str = "http://www.w3.org/ns/ma-ont#";

    /// Content type of a representation
    pub const FORMAT: NamedNode = NamedNode::from_static("http://www.w3.org/ns/ma-ont#format");
}

/// XML Schema datatypes.
pub mod xsd {
    use crate::NamedNode;

    /// Namespace of the vocabulary
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Integers
    pub const INTEGER: NamedNode = NamedNode::from_static("http://www.w3.org/2001/XMLSchema#integer");
    /// Strings
    pub const STRING: NamedNode = NamedNode::from_static("http://www.w3.org/2001/XMLSchema#string");
}
