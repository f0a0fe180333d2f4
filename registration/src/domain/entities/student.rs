//! Student domain entity
//!
//! Represents a student registered with the school.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Sentinel id for a student that has not been assigned one yet
pub const UNSET_STUDENT_ID: i32 = 0;

/// A registered student
///
/// Equality and hashing only look at `id`, so two values with the same id
/// refer to the same student even when their other fields differ.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub zipcode: i32,
    pub city: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Student {
    /// Create a student without an email address
    pub fn new(
        id: i32,
        name: impl Into<String>,
        address: impl Into<String>,
        zipcode: i32,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            address: Some(address.into()),
            zipcode,
            city: Some(city.into()),
            email: None,
        }
    }

    /// Set or clear the email address
    pub fn with_email(mut self, email: Option<impl Into<String>>) -> Self {
        self.email = email.map(Into::into);
        self
    }

    /// Whether an id has been assigned
    pub fn has_id(&self) -> bool {
        self.id != UNSET_STUDENT_ID
    }

    /// Field-by-field comparison, unlike `==` which only compares ids
    pub fn same_fields(&self, other: &Student) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.address == other.address
            && self.zipcode == other.zipcode
            && self.city == other.city
            && self.email == other.email
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "#{} {}", self.id, name),
            None => write!(f, "#{}", self.id),
        }
    }
}
