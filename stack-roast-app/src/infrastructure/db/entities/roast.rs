use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "roasts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub stack_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub roast_type: String,
    pub author_name: Option<String>,
    pub upvotes: i32,
    pub downvotes: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stack::Entity",
        from = "Column::StackId",
        to = "super::stack::Column::Id",
        on_delete = "Cascade"
    )]
    Stack,
    #[sea_orm(has_many = "super::vote::Entity")]
    Votes,
}

impl Related<super::stack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stack.def()
    }
}

impl Related<super::vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Votes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for crate::domain::Roast {
    type Error = stack_roast_errors::AppError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let roast_type = m.roast_type.parse::<crate::domain::RoastType>().map_err(|_| {
            stack_roast_errors::AppError::Internal(format!(
                "roast {} has unknown roast_type {:?}",
                m.id, m.roast_type
            ))
        })?;
        Ok(Self {
            id: m.id,
            stack_id: m.stack_id,
            content: m.content,
            roast_type,
            author_name: m.author_name,
            upvotes: m.upvotes,
            downvotes: m.downvotes,
            created_at: m.created_at,
        })
    }
}
