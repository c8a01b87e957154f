use {
    derive_more::Display,
    rand::Rng,
    serde::{Deserialize, Serialize},
};

/// Short human-shareable record code (`X4K2P9`), assigned once at creation.
///
/// Six characters drawn uniformly from `[A-Z0-9]` gives a 36^6 space with no
/// collision check against existing records — a duplicate is possible and the
/// store will happily hold both. Accepted risk; enforcing uniqueness would
/// change search behavior under collision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCode(String);

impl EntryCode {
    pub const LEN: usize = 6;
    pub const ALPHABET: &'static [u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Draw a fresh code from the process RNG.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let code = (0..Self::LEN)
            .map(|_| {
                let i = rng.random_range(0..Self::ALPHABET.len());
                Self::ALPHABET[i] as char
            })
            .collect();
        Self(code)
    }

    /// Wrap an existing code verbatim. Inbound codes are free text (search
    /// keys typed by a user), so no shape validation here.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
