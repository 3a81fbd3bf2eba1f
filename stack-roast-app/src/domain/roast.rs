use super::field;
use serde::{Deserialize, Serialize};
use stack_roast_errors::AppError;
use std::fmt;
use std::str::FromStr;

pub const MAX_ROAST_LEN: usize = 2000;
pub const MAX_AUTHOR_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastType {
    #[default]
    Brutal,
    Constructive,
    Meme,
}

impl RoastType {
    pub const ALL: [RoastType; 3] = [RoastType::Brutal, RoastType::Constructive, RoastType::Meme];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brutal => "brutal",
            Self::Constructive => "constructive",
            Self::Meme => "meme",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Brutal => "Brutal",
            Self::Constructive => "Constructive",
            Self::Meme => "Meme",
        }
    }
}

impl fmt::Display for RoastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoastType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "brutal" => Ok(Self::Brutal),
            "constructive" => Ok(Self::Constructive),
            "meme" => Ok(Self::Meme),
            other => Err(AppError::validation(format!(
                "Invalid roast_type: {other} (expected brutal, constructive or meme)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roast {
    pub id: uuid::Uuid,
    pub stack_id: uuid::Uuid,
    pub content: String,
    pub roast_type: RoastType,
    pub author_name: Option<String>,
    pub upvotes: i32,
    pub downvotes: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Roast {
    pub fn score(&self) -> i32 {
        self.upvotes - self.downvotes
    }

    pub fn display_author(&self) -> &str {
        self.author_name.as_deref().unwrap_or("Anonymous")
    }
}

/// Raw roast submission. Field names follow the JSON API (`stack_id`, `roast_type`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoastSubmission {
    pub stack_id: Option<String>,
    pub content: Option<String>,
    pub roast_type: Option<String>,
    pub author_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRoast {
    pub stack_id: uuid::Uuid,
    pub content: String,
    pub roast_type: RoastType,
    pub author_name: Option<String>,
}

impl RoastSubmission {
    pub fn validate(self) -> Result<NewRoast, AppError> {
        let stack_id = field::uuid(self.stack_id, "stack_id")?;
        let content = field::required(self.content, "content", MAX_ROAST_LEN)?;
        let roast_type = field::required(self.roast_type, "roast_type", 32)?.parse::<RoastType>()?;
        let author_name = field::optional(self.author_name, "author_name", MAX_AUTHOR_LEN)?;

        Ok(NewRoast {
            stack_id,
            content,
            roast_type,
            author_name,
        })
    }
}
