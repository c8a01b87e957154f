use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// The two record-store collections. Same field set, no relation between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Book {
    Addressbook,
    Invoicebook,
}

impl Book {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Addressbook => "addressbook",
            Self::Invoicebook => "invoicebook",
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
