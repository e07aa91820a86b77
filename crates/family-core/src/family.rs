//! The family member collection
//!
//! Members are kept in insertion order, which is also id order since ids
//! come from a counter that only moves forward. Deleting a member never
//! rewinds the counter, so an id is never handed out twice.

use family_types::{Member, MemberId, NewMember};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Family {
    name: String,
    members: Vec<Member>,
    next_id: MemberId,
}

impl Family {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            next_id: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All members in insertion order
    pub fn list_all(&self) -> &[Member] {
        &self.members
    }

    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Assign the next id to `new_member` and append it
    pub fn add(&mut self, new_member: NewMember) -> Member {
        let id = self.next_id;
        self.next_id += 1;

        let member = new_member.with_id(id);
        debug!("Family {}: added member {}", self.name, id);
        self.members.push(member.clone());
        member
    }

    /// Remove the member with `id`. Returns false if there was none.
    pub fn delete(&mut self, id: MemberId) -> bool {
        match self.members.iter().position(|m| m.id == id) {
            Some(index) => {
                self.members.remove(index);
                debug!("Family {}: deleted member {}", self.name, id);
                true
            }
            None => false,
        }
    }
}
