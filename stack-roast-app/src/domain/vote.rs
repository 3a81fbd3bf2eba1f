use super::field;
use serde::{Deserialize, Serialize};
use stack_roast_errors::AppError;
use std::fmt;
use std::str::FromStr;

/// Voter identity used when a request carries no forwarding headers.
pub const UNKNOWN_VOTER: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(AppError::validation("Missing or invalid fields")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: uuid::Uuid,
    pub roast_id: uuid::Uuid,
    pub voter_ip: String,
    pub vote_type: VoteType,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteSubmission {
    pub roast_id: Option<String>,
    pub vote_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVote {
    pub roast_id: uuid::Uuid,
    pub vote_type: VoteType,
    pub voter_ip: String,
}

impl VoteSubmission {
    pub fn validate(self, voter_ip: impl Into<String>) -> Result<NewVote, AppError> {
        let roast_id = field::uuid(self.roast_id, "roast_id")?;
        let vote_type = self
            .vote_type
            .ok_or_else(|| AppError::validation("Missing or invalid fields"))?
            .parse::<VoteType>()?;
        let voter_ip = voter_ip.into();
        let voter_ip = if voter_ip.trim().is_empty() {
            UNKNOWN_VOTER.to_string()
        } else {
            voter_ip
        };

        Ok(NewVote {
            roast_id,
            vote_type,
            voter_ip,
        })
    }
}

/// Roast tallies after a vote was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResult {
    pub upvotes: i32,
    pub downvotes: i32,
}
