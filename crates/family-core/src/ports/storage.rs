//! Storage trait for family members

use crate::Result;
use async_trait::async_trait;
use family_types::{Member, MemberId, NewMember};

/// Member store
///
/// `Ok(None)` / `Ok(false)` mean the member does not exist. `Err` is
/// reserved for backend faults.
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn family_name(&self) -> Result<String>;
    async fn member_count(&self) -> Result<usize>;
    async fn list_members(&self) -> Result<Vec<Member>>;
    async fn get_member(&self, id: MemberId) -> Result<Option<Member>>;
    async fn add_member(&self, member: NewMember) -> Result<Member>;
    async fn delete_member(&self, id: MemberId) -> Result<bool>;
}
