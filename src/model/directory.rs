//! Supplier and commercial-agent directories.
//!
//! Both are plain `{ id, name }` lists managed from the settings screen. They share one
//! shape, so a single macro declares each type together with its id newtype, its
//! creation payload and its [`RecordEntity`] implementation.

use crate::directory_actor::DirectoryError;
use crate::validation::validate_name;
use record_framework::RecordEntity;
use serde::{Deserialize, Serialize};

/// Common view over supplier and commercial entries.
pub trait DirectoryEntry: RecordEntity {
    /// Label used in logs and messages ("supplier", "commercial").
    const KIND: &'static str;

    fn name(&self) -> &str;

    /// Wraps a raw identifier string.
    fn make_id(raw: String) -> Self::Id;

    /// Builds an entry with a known id, used for seed lists.
    fn seeded(id: &str, name: &str) -> Self;

    /// Wraps a name into the creation payload.
    fn create(name: impl Into<String>) -> Self::Create;
}

macro_rules! directory_entry {
    ($name:ident, $kind:literal) => {
        paste::paste! {
            #[doc = "Identifier of a " $kind " entry."]
            #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct [<$name Id>](pub String);

            impl From<&str> for [<$name Id>] {
                fn from(id: &str) -> Self {
                    Self(id.to_string())
                }
            }

            impl std::fmt::Display for [<$name Id>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            #[doc = "A named " $kind " selectable on the order form."]
            #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
            pub struct $name {
                pub id: [<$name Id>],
                pub name: String,
            }

            #[doc = "Payload for adding a " $kind "."]
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct [<$name Create>] {
                pub name: String,
            }

            impl RecordEntity for $name {
                type Id = [<$name Id>];
                type Create = [<$name Create>];
                type Error = DirectoryError;

                fn id(&self) -> &Self::Id {
                    &self.id
                }

                // Names are stored trimmed; blank names are refused.
                fn from_create_params(
                    id: Self::Id,
                    params: Self::Create,
                    _existing: &[Self],
                ) -> Result<Self, Self::Error> {
                    validate_name(&params.name)?;
                    Ok(Self {
                        id,
                        name: params.name.trim().to_string(),
                    })
                }
            }

            impl DirectoryEntry for $name {
                const KIND: &'static str = $kind;

                fn name(&self) -> &str {
                    &self.name
                }

                fn make_id(raw: String) -> Self::Id {
                    [<$name Id>](raw)
                }

                fn seeded(id: &str, name: &str) -> Self {
                    Self {
                        id: id.into(),
                        name: name.to_string(),
                    }
                }

                fn create(name: impl Into<String>) -> Self::Create {
                    [<$name Create>] { name: name.into() }
                }
            }
        }
    };
}

directory_entry!(Supplier, "supplier");
directory_entry!(Commercial, "commercial");

const SEED_SUPPLIERS: [&str; 7] = [
    "Anjo & Carpinteiro",
    "Empaco",
    "Portuense",
    "Bofil",
    "Bofitel",
    "J. Costa Carvalho (Jaime)",
    "Socorte",
];

const SEED_COMMERCIALS: [&str; 10] = [
    "Fátima",
    "Cristiana",
    "Isabel",
    "Luis",
    "Carlos",
    "Marisa",
    "João",
    "Jorge",
    "Ruben",
    "Antonio Couraceiro",
];

/// Default supplier list used when nothing usable is stored. Ids are "1".."7".
pub fn seed_suppliers() -> Vec<Supplier> {
    seed(&SEED_SUPPLIERS)
}

/// Default commercial list used when nothing usable is stored. Ids are "1".."10".
pub fn seed_commercials() -> Vec<Commercial> {
    seed(&SEED_COMMERCIALS)
}

fn seed<E: DirectoryEntry>(names: &[&str]) -> Vec<E> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| E::seeded(&(index + 1).to_string(), name))
        .collect()
}
