//! Member types

use serde::{Deserialize, Serialize};

/// Identifier assigned to a member by its family. Starts at 1.
pub type MemberId = u32;

/// One family member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
}

/// Member data before an id has been assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub first_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
}

impl NewMember {
    pub fn new(first_name: impl Into<String>, age: u32, lucky_numbers: Vec<i64>) -> Self {
        Self {
            first_name: first_name.into(),
            age,
            lucky_numbers,
        }
    }

    /// Attach an id, producing the stored record
    pub fn with_id(self, id: MemberId) -> Member {
        Member {
            id,
            first_name: self.first_name,
            age: self.age,
            lucky_numbers: self.lucky_numbers,
        }
    }
}
