use crate::domain::{NewRoast, Roast, RoastSubmission};
use crate::infrastructure::db::{db_error, RoastRepository, StackRepository};
use stack_roast_errors::AppError;
use uuid::Uuid;

#[derive(Clone)]
pub struct RoastService {
    stacks: StackRepository,
    roasts: RoastRepository,
}

impl RoastService {
    pub fn new(stacks: StackRepository, roasts: RoastRepository) -> Self {
        Self { stacks, roasts }
    }

    pub async fn create_roast(&self, submission: RoastSubmission) -> Result<Roast, AppError> {
        let new_roast = submission.validate()?;
        self.create(new_roast).await
    }

    /// Stores an already validated roast and bumps the stack's roast count.
    pub async fn create(&self, new_roast: NewRoast) -> Result<Roast, AppError> {
        if !self
            .stacks
            .exists(new_roast.stack_id)
            .await
            .map_err(db_error)?
        {
            return Err(AppError::not_found("Stack not found"));
        }

        let model = self.roasts.create(&new_roast).await.map_err(db_error)?;

        // The roast is already stored; a failed count update must not fail the request.
        if let Err(e) = self.stacks.increment_roast_count(new_roast.stack_id).await {
            tracing::warn!(stack_id = %new_roast.stack_id, "Failed to update roast count: {}", e);
        }

        tracing::info!(roast_id = %model.id, stack_id = %model.stack_id, "Roast created");
        Roast::try_from(model)
    }

    pub async fn get_roast(&self, id: Uuid) -> Result<Roast, AppError> {
        self.roasts
            .find_by_id(id)
            .await
            .map_err(db_error)?
            .ok_or_else(|| AppError::not_found("Roast not found"))
            .and_then(Roast::try_from)
    }

    pub async fn list_roasts(&self, stack_id: Option<&str>) -> Result<Vec<Roast>, AppError> {
        let raw = stack_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::validation("Missing stack_id"))?;
        let stack_id = Uuid::parse_str(raw)
            .map_err(|_| AppError::validation(format!("Invalid stack_id: {raw}")))?;

        self.roasts
            .list_for_stack(stack_id)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(Roast::try_from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewStack, RoastType};
    use crate::infrastructure::db::test_connection;

    async fn setup() -> (RoastService, StackRepository, Uuid) {
        let db = test_connection().await;
        let stacks = StackRepository::new(db.clone());
        let stack = stacks
            .create(&NewStack {
                title: "X".into(),
                frontend: "React".into(),
                backend: "Node".into(),
                database: "Postgres".into(),
                hosting: "Vercel".into(),
                other_tools: vec![],
                description: None,
                author_name: None,
                is_anonymous: true,
            })
            .await
            .unwrap();
        let service = RoastService::new(stacks.clone(), RoastRepository::new(db));
        (service, stacks, stack.id)
    }

    fn submission(stack_id: impl ToString) -> RoastSubmission {
        RoastSubmission {
            stack_id: Some(stack_id.to_string()),
            content: Some("lol".into()),
            roast_type: Some("meme".into()),
            author_name: None,
        }
    }

    #[tokio::test]
    async fn test_create_roast_increments_count() {
        let (service, stacks, stack_id) = setup().await;
        let roast = service.create_roast(submission(stack_id)).await.unwrap();
        assert_eq!(roast.roast_type, RoastType::Meme);
        assert_eq!((roast.upvotes, roast.downvotes), (0, 0));

        let stack = stacks.find_by_id(stack_id).await.unwrap().unwrap();
        assert_eq!(stack.roast_count, 1);

        let fetched = service.get_roast(roast.id).await.unwrap();
        assert_eq!(fetched.stack_id, stack_id);
        assert!(matches!(
            service.get_roast(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_roasts_all_counted() {
        let (service, stacks, stack_id) = setup().await;
        let tasks: Vec<_> = (0..5)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.create_roast(submission(stack_id)).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stack = stacks.find_by_id(stack_id).await.unwrap().unwrap();
        assert_eq!(stack.roast_count, 5);
        assert_eq!(service.list_roasts(Some(&stack_id.to_string())).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_failed_count_update_keeps_roast() {
        use sea_orm::ConnectionTrait;

        let db = test_connection().await;
        let stacks = StackRepository::new(db.clone());
        let stack = stacks
            .create(&NewStack {
                title: "X".into(),
                frontend: "React".into(),
                backend: "Node".into(),
                database: "Postgres".into(),
                hosting: "Vercel".into(),
                other_tools: vec![],
                description: None,
                author_name: None,
                is_anonymous: true,
            })
            .await
            .unwrap();
        db.execute_unprepared(
            "CREATE TRIGGER stacks_read_only BEFORE UPDATE ON stacks \
             BEGIN SELECT RAISE(ABORT, 'stacks are read-only'); END;",
        )
        .await
        .unwrap();

        let service = RoastService::new(stacks.clone(), RoastRepository::new(db));
        let roast = service.create_roast(submission(stack.id)).await.unwrap();

        let listed = service.list_roasts(Some(&stack.id.to_string())).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, roast.id);
        let stack = stacks.find_by_id(stack.id).await.unwrap().unwrap();
        assert_eq!(stack.roast_count, 0);
    }

    #[tokio::test]
    async fn test_create_roast_unknown_stack() {
        let (service, _, _) = setup().await;
        let err = service.create_roast(submission(Uuid::new_v4())).await.unwrap_err();
        assert_eq!(err, AppError::NotFound("Stack not found".into()));
    }

    #[tokio::test]
    async fn test_create_roast_invalid_type() {
        let (service, _, stack_id) = setup().await;
        let mut bad = submission(stack_id);
        bad.roast_type = Some("gentle".into());
        assert!(matches!(service.create_roast(bad).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_roasts_requires_stack_id() {
        let (service, _, _) = setup().await;
        assert!(matches!(service.list_roasts(None).await, Err(AppError::Validation(_))));
        assert!(matches!(
            service.list_roasts(Some("abc")).await,
            Err(AppError::Validation(_))
        ));
    }
}
