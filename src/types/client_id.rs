use std::fmt;
use std::fmt::{Display, Formatter};

/// Identity of the client a transaction belongs to.
///
/// Identities are compared exactly as delivered: `"A"` and `" A "` are two
/// clients, and so are the number `7` and the text `"7"`. Records that arrive
/// without a usable client identity are grouped under `Unknown`, which never
/// collides with a real client, not even one whose identity is literally the
/// text "unknown".
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ClientId {
    /// A text identity, untrimmed.
    Known(String),
    /// A number or boolean identity, kept as its JSON text.
    Scalar(String),
    Unknown
}

impl ClientId {
    pub fn is_unknown(&self) -> bool {
        matches!(self, ClientId::Unknown)
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        ClientId::Known(value.to_string())
    }
}

impl Display for ClientId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ClientId::Known(client) | ClientId::Scalar(client) => write!(formatter, "{client}"),
            ClientId::Unknown => write!(formatter, "unknown")
        }
    }
}
