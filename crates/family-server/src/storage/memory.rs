//! In-memory member store

use async_trait::async_trait;
use family_core::{Family, Member, MemberId, MemberStore, NewMember, Result};
use tokio::sync::RwLock;

/// One family held behind a lock so handlers on any runtime thread can
/// share it. Mutations take the write lock for their whole duration.
pub struct MemoryStore {
    family: RwLock<Family>,
}

impl MemoryStore {
    pub fn new(family_name: impl Into<String>) -> Self {
        Self {
            family: RwLock::new(Family::new(family_name)),
        }
    }
}

#[async_trait]
impl MemberStore for MemoryStore {
    async fn family_name(&self) -> Result<String> {
        Ok(self.family.read().await.name().to_string())
    }

    async fn member_count(&self) -> Result<usize> {
        Ok(self.family.read().await.len())
    }

    async fn list_members(&self) -> Result<Vec<Member>> {
        Ok(self.family.read().await.list_all().to_vec())
    }

    async fn get_member(&self, id: MemberId) -> Result<Option<Member>> {
        Ok(self.family.read().await.get(id).cloned())
    }

    async fn add_member(&self, member: NewMember) -> Result<Member> {
        Ok(self.family.write().await.add(member))
    }

    async fn delete_member(&self, id: MemberId) -> Result<bool> {
        Ok(self.family.write().await.delete(id))
    }
}
