//! Family member service

use anyhow::{Context, Result};
use family_core::{Member, MemberId, MemberStore, NewMember};
use std::sync::Arc;
use tracing::{debug, info};

pub struct FamilyManager {
    store: Arc<dyn MemberStore>,
}

impl FamilyManager {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    pub async fn family_name(&self) -> Result<String> {
        self.store
            .family_name()
            .await
            .context("Failed to read family name")
    }

    pub async fn member_count(&self) -> Result<usize> {
        self.store
            .member_count()
            .await
            .context("Failed to count members")
    }

    pub async fn list_members(&self) -> Result<Vec<Member>> {
        let members = self
            .store
            .list_members()
            .await
            .context("Failed to list members")?;
        debug!("Listed {} members", members.len());
        Ok(members)
    }

    pub async fn get_member(&self, id: MemberId) -> Result<Option<Member>> {
        debug!("Looking up member {}", id);
        self.store
            .get_member(id)
            .await
            .with_context(|| format!("Failed to get member {}", id))
    }

    pub async fn add_member(&self, new_member: NewMember) -> Result<Member> {
        info!(
            "Adding member: first_name={}, age={}",
            new_member.first_name, new_member.age
        );

        let member = self
            .store
            .add_member(new_member)
            .await
            .context("Failed to add member")?;

        info!("Member added with id {}", member.id);
        Ok(member)
    }

    pub async fn delete_member(&self, id: MemberId) -> Result<bool> {
        info!("Deleting member: {}", id);

        let deleted = self
            .store
            .delete_member(id)
            .await
            .with_context(|| format!("Failed to delete member {}", id))?;

        if !deleted {
            debug!("Member {} not found, nothing deleted", id);
        }
        Ok(deleted)
    }
}
