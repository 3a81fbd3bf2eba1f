use super::entities::{stack, Stack};
use crate::domain::{NewStack, SortOrder, StackSortField};
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct StackRepository {
    db: DatabaseConnection,
}

impl StackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_stack: &NewStack) -> Result<stack::Model, DbErr> {
        let active = stack::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(new_stack.title.clone()),
            frontend: Set(new_stack.frontend.clone()),
            backend: Set(new_stack.backend.clone()),
            database: Set(new_stack.database.clone()),
            hosting: Set(new_stack.hosting.clone()),
            other_tools: Set(stack::ToolList(new_stack.other_tools.clone())),
            description: Set(new_stack.description.clone()),
            author_name: Set(new_stack.author_name.clone()),
            is_anonymous: Set(new_stack.is_anonymous),
            created_at: Set(chrono::Utc::now()),
            roast_count: Set(0),
        };
        active.insert(&self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<stack::Model>, DbErr> {
        Stack::find_by_id(id).one(&self.db).await
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = Stack::find()
            .filter(stack::Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn list(
        &self,
        sort: StackSortField,
        order: SortOrder,
    ) -> Result<Vec<stack::Model>, DbErr> {
        let column = match sort {
            StackSortField::CreatedAt => stack::Column::CreatedAt,
            StackSortField::RoastCount => stack::Column::RoastCount,
            StackSortField::Title => stack::Column::Title,
        };
        let order = match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let mut query = Stack::find().order_by(column, order);
        if sort != StackSortField::CreatedAt {
            query = query.order_by_desc(stack::Column::CreatedAt);
        }
        query.all(&self.db).await
    }

    /// Bumps the cached roast count in a single `UPDATE`, so concurrent roasts
    /// cannot overwrite each other's increment.
    pub async fn increment_roast_count(&self, id: Uuid) -> Result<(), DbErr> {
        let result = Stack::update_many()
            .col_expr(
                stack::Column::RoastCount,
                Expr::col(stack::Column::RoastCount).add(1),
            )
            .filter(stack::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("Stack {id} not found")));
        }
        Ok(())
    }
}
