use super::field;
use super::Roast;
use serde::{Deserialize, Serialize};
use stack_roast_errors::AppError;
use std::str::FromStr;

pub const MAX_SHORT_FIELD_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 2000;
pub const MAX_OTHER_TOOLS: usize = 20;
pub const MAX_TOOL_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub id: uuid::Uuid,
    pub title: String,
    pub frontend: String,
    pub backend: String,
    pub database: String,
    pub hosting: String,
    pub other_tools: Vec<String>,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub is_anonymous: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub roast_count: i32,
}

impl Stack {
    pub fn display_author(&self) -> &str {
        match (&self.author_name, self.is_anonymous) {
            (Some(name), false) => name,
            _ => "Anonymous",
        }
    }
}

/// A stack together with its roasts, newest roast first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackWithRoasts {
    pub stack: Stack,
    pub roasts: Vec<Roast>,
}

/// Raw stack submission as received from a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackSubmission {
    pub title: Option<String>,
    pub frontend: Option<String>,
    pub backend: Option<String>,
    pub database: Option<String>,
    pub hosting: Option<String>,
    pub other_tools: Option<Vec<String>>,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub is_anonymous: Option<bool>,
}

/// A validated stack, ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStack {
    pub title: String,
    pub frontend: String,
    pub backend: String,
    pub database: String,
    pub hosting: String,
    pub other_tools: Vec<String>,
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub is_anonymous: bool,
}

impl StackSubmission {
    pub fn validate(self) -> Result<NewStack, AppError> {
        let title = field::required(self.title, "title", MAX_SHORT_FIELD_LEN)?;
        let frontend = field::required(self.frontend, "frontend", MAX_SHORT_FIELD_LEN)?;
        let backend = field::required(self.backend, "backend", MAX_SHORT_FIELD_LEN)?;
        let database = field::required(self.database, "database", MAX_SHORT_FIELD_LEN)?;
        let hosting = field::required(self.hosting, "hosting", MAX_SHORT_FIELD_LEN)?;

        let other_tools: Vec<String> = self
            .other_tools
            .unwrap_or_default()
            .into_iter()
            .map(|tool| tool.trim().to_string())
            .filter(|tool| !tool.is_empty())
            .collect();
        if other_tools.len() > MAX_OTHER_TOOLS {
            return Err(AppError::validation(format!(
                "otherTools cannot have more than {MAX_OTHER_TOOLS} entries"
            )));
        }
        if other_tools.iter().any(|t| t.chars().count() > MAX_TOOL_LEN) {
            return Err(AppError::validation(format!(
                "otherTools entries cannot exceed {MAX_TOOL_LEN} characters"
            )));
        }

        Ok(NewStack {
            title,
            frontend,
            backend,
            database,
            hosting,
            other_tools,
            description: field::optional(self.description, "description", MAX_DESCRIPTION_LEN)?,
            author_name: field::optional(self.author_name, "authorName", MAX_SHORT_FIELD_LEN)?,
            is_anonymous: self.is_anonymous.unwrap_or(false),
        })
    }

    /// Splits a comma-separated tool list as typed into a form field.
    pub fn parse_tool_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|tool| tool.trim().to_string())
            .filter(|tool| !tool.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StackSortField {
    #[default]
    CreatedAt,
    RoastCount,
    Title,
}

impl FromStr for StackSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "created_at" | "createdAt" | "recent" => Ok(Self::CreatedAt),
            "roast_count" | "roastCount" | "most_roasted" => Ok(Self::RoastCount),
            "title" => Ok(Self::Title),
            other => Err(AppError::validation(format!("Unsupported sort field: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than `asc` sorts descending.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> StackSubmission {
        StackSubmission {
            title: Some("X".into()),
            frontend: Some("React".into()),
            backend: Some("Node".into()),
            database: Some("Postgres".into()),
            hosting: Some("Vercel".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let stack = submission().validate().unwrap();
        assert!(stack.other_tools.is_empty());
        assert_eq!(stack.description, None);
        assert_eq!(stack.author_name, None);
        assert!(!stack.is_anonymous);
    }

    #[test]
    fn test_missing_hosting_is_rejected() {
        let mut s = submission();
        s.hosting = None;
        let err = s.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("hosting")));
    }

    #[test]
    fn test_whitespace_only_title_is_rejected() {
        let mut s = submission();
        s.title = Some("   ".into());
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut s = submission();
        s.title = Some("  My Stack  ".into());
        s.description = Some("  because  ".into());
        s.author_name = Some("   ".into());
        s.other_tools = Some(vec![" Docker ".into(), "".into(), "Redis".into()]);
        let stack = s.validate().unwrap();
        assert_eq!(stack.title, "My Stack");
        assert_eq!(stack.description.as_deref(), Some("because"));
        assert_eq!(stack.author_name, None);
        assert_eq!(stack.other_tools, vec!["Docker", "Redis"]);
    }

    #[test]
    fn test_too_many_tools() {
        let mut s = submission();
        s.other_tools = Some((0..=MAX_OTHER_TOOLS).map(|i| format!("tool{i}")).collect());
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_camel_case_payload() {
        let json = r#"{"title":"X","frontend":"React","backend":"Node","database":"Postgres",
            "hosting":"Vercel","otherTools":["Docker"],"authorName":"Ann","isAnonymous":true}"#;
        let s: StackSubmission = serde_json::from_str(json).unwrap();
        let stack = s.validate().unwrap();
        assert_eq!(stack.other_tools, vec!["Docker"]);
        assert_eq!(stack.author_name.as_deref(), Some("Ann"));
        assert!(stack.is_anonymous);
    }

    #[test]
    fn test_parse_tool_list() {
        assert_eq!(
            StackSubmission::parse_tool_list("Docker, Redis,, GraphQL "),
            vec!["Docker", "Redis", "GraphQL"]
        );
        assert!(StackSubmission::parse_tool_list("  ").is_empty());
    }

    #[test]
    fn test_sort_field_aliases() {
        assert_eq!("createdAt".parse::<StackSortField>().unwrap(), StackSortField::CreatedAt);
        assert_eq!("roast_count".parse::<StackSortField>().unwrap(), StackSortField::RoastCount);
        assert_eq!("title".parse::<StackSortField>().unwrap(), StackSortField::Title);
        assert!("password".parse::<StackSortField>().is_err());
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(SortOrder::parse("ASC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Desc);
    }

    #[test]
    fn test_display_author() {
        let mut stack = Stack {
            id: uuid::Uuid::new_v4(),
            title: "X".into(),
            frontend: "React".into(),
            backend: "Node".into(),
            database: "Postgres".into(),
            hosting: "Vercel".into(),
            other_tools: vec![],
            description: None,
            author_name: Some("Ann".into()),
            is_anonymous: false,
            created_at: chrono::Utc::now(),
            roast_count: 0,
        };
        assert_eq!(stack.display_author(), "Ann");
        stack.is_anonymous = true;
        assert_eq!(stack.display_author(), "Anonymous");
        stack.is_anonymous = false;
        stack.author_name = None;
        assert_eq!(stack.display_author(), "Anonymous");
    }
}
