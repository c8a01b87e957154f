use {
    super::code::EntryCode,
    serde::{Deserialize, Serialize},
};

/// The mutable field set, shared verbatim by the create and update paths.
/// Every field is free text; `name` is required by UI convention only, so
/// nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub companyname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// A full record as held by the store: store-assigned `id`, creation-time
/// `UUID` code, and the mutable fields. `id` and `UUID` never change after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    // Legacy rows predating the code column come back without one.
    #[serde(rename = "UUID", default)]
    pub code: EntryCode,
    #[serde(flatten)]
    pub fields: EntryFields,
}
