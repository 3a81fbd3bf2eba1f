use super::entities::{roast, Roast};
use crate::domain::{NewRoast, VoteType};
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, query::*, ConnectionTrait, DatabaseConnection, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct RoastRepository {
    db: DatabaseConnection,
}

impl RoastRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_roast: &NewRoast) -> Result<roast::Model, DbErr> {
        let active = roast::ActiveModel {
            id: Set(Uuid::new_v4()),
            stack_id: Set(new_roast.stack_id),
            content: Set(new_roast.content.clone()),
            roast_type: Set(new_roast.roast_type.as_str().to_string()),
            author_name: Set(new_roast.author_name.clone()),
            upvotes: Set(0),
            downvotes: Set(0),
            created_at: Set(chrono::Utc::now()),
        };
        active.insert(&self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<roast::Model>, DbErr> {
        Roast::find_by_id(id).one(&self.db).await
    }

    /// All roasts of a stack, newest first.
    pub async fn list_for_stack(&self, stack_id: Uuid) -> Result<Vec<roast::Model>, DbErr> {
        Roast::find()
            .filter(roast::Column::StackId.eq(stack_id))
            .order_by_desc(roast::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Adds one to the up- or downvote column of a roast in a single statement.
    /// Takes the connection explicitly so it can run inside a vote transaction.
    pub async fn increment_votes<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        vote_type: VoteType,
    ) -> Result<roast::Model, DbErr> {
        let column = match vote_type {
            VoteType::Up => roast::Column::Upvotes,
            VoteType::Down => roast::Column::Downvotes,
        };

        let result = Roast::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(roast::Column::Id.eq(id))
            .exec(conn)
            .await?;
        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("Roast {id} not found")));
        }

        Roast::find_by_id(id)
            .one(conn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Roast {id} not found")))
    }
}
