use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered tool names, stored as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ToolList(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stacks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub frontend: String,
    pub backend: String,
    pub database: String,
    pub hosting: String,
    #[sea_orm(column_type = "Json")]
    pub other_tools: ToolList,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub author_name: Option<String>,
    pub is_anonymous: bool,
    pub created_at: DateTimeUtc,
    pub roast_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::roast::Entity")]
    Roasts,
}

impl Related<super::roast::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roasts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Stack {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            frontend: m.frontend,
            backend: m.backend,
            database: m.database,
            hosting: m.hosting,
            other_tools: m.other_tools.0,
            description: m.description,
            author_name: m.author_name,
            is_anonymous: m.is_anonymous,
            created_at: m.created_at,
            roast_count: m.roast_count,
        }
    }
}
