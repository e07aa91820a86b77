//! Member handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use family_core::{Member, MemberId, NewMember};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Body of `POST /members`, checked field by field before reaching the store
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    first_name: Option<Value>,
    age: Option<Value>,
    lucky_numbers: Option<Value>,
}

impl AddMemberRequest {
    /// Accept only a JSON object; anything else counts as missing info
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        if !body.is_object() {
            return Err(ApiError::MissingInfo);
        }
        serde_json::from_value(body).map_err(|_| ApiError::MissingInfo)
    }

    pub fn validate(self) -> Result<NewMember, ApiError> {
        // Presence of every field is checked before any type check
        let first_name = required(self.first_name)?;
        let age = required(self.age)?;
        let lucky_numbers = required(self.lucky_numbers)?;

        let age = age
            .as_u64()
            .filter(|age| *age > 0)
            .and_then(|age| u32::try_from(age).ok())
            .ok_or(ApiError::InvalidAge)?;

        let first_name = match first_name {
            Value::String(name) => name,
            _ => return Err(ApiError::MissingInfo),
        };

        let lucky_numbers: Vec<i64> =
            serde_json::from_value(lucky_numbers).map_err(|_| ApiError::MissingInfo)?;

        Ok(NewMember::new(first_name, age, lucky_numbers))
    }
}

/// A field counts as missing when absent, `null`, or the empty string
fn required(field: Option<Value>) -> Result<Value, ApiError> {
    match field {
        Some(Value::String(s)) if s.is_empty() => Err(ApiError::MissingInfo),
        Some(value) => Ok(value),
        None => Err(ApiError::MissingInfo),
    }
}

/// Parse an `:id` path segment. Non-numeric ids match no member; id 0 is
/// treated as missing info.
fn parse_member_id(raw: &str) -> Result<MemberId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound);
    }
    match raw.parse::<MemberId>() {
        Ok(0) => Err(ApiError::MissingInfo),
        Ok(id) => Ok(id),
        Err(_) => Err(ApiError::NotFound),
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    done: bool,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Member>>, ApiError> {
    let members = state.family.list_members().await?;
    if members.is_empty() {
        return Err(ApiError::NoMembers);
    }
    Ok(Json(members))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Member>, ApiError> {
    let id = parse_member_id(&id)?;

    match state.family.get_member(id).await? {
        Some(member) => Ok(Json(member)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Member>, ApiError> {
    let Json(body) = body.map_err(|e| {
        debug!("Rejected member body: {}", e);
        ApiError::MissingInfo
    })?;

    let new_member = AddMemberRequest::from_body(body)?.validate()?;
    let member = state.family.add_member(new_member).await?;
    Ok(Json(member))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_member_id(&id)?;

    if state.family.delete_member(id).await? {
        Ok(Json(DeleteResponse { done: true }))
    } else {
        Err(ApiError::NotFound)
    }
}
