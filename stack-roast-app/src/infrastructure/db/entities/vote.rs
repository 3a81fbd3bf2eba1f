use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "votes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub roast_id: Uuid,
    pub voter_ip: String,
    pub vote_type: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::roast::Entity",
        from = "Column::RoastId",
        to = "super::roast::Column::Id",
        on_delete = "Cascade"
    )]
    Roast,
}

impl Related<super::roast::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roast.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for crate::domain::Vote {
    type Error = stack_roast_errors::AppError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let vote_type = m.vote_type.parse::<crate::domain::VoteType>().map_err(|_| {
            stack_roast_errors::AppError::Internal(format!(
                "vote {} has unknown vote_type {:?}",
                m.id, m.vote_type
            ))
        })?;
        Ok(Self {
            id: m.id,
            roast_id: m.roast_id,
            voter_ip: m.voter_ip,
            vote_type,
            created_at: m.created_at,
        })
    }
}
