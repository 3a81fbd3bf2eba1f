use crate::domain::{
    Roast, SortOrder, Stack, StackSortField, StackSubmission, StackWithRoasts,
};
use crate::infrastructure::db::{db_error, RoastRepository, StackRepository};
use stack_roast_errors::AppError;
use uuid::Uuid;

#[derive(Clone)]
pub struct StackService {
    stacks: StackRepository,
    roasts: RoastRepository,
}

impl StackService {
    pub fn new(stacks: StackRepository, roasts: RoastRepository) -> Self {
        Self { stacks, roasts }
    }

    pub async fn create_stack(&self, submission: StackSubmission) -> Result<Stack, AppError> {
        let new_stack = submission.validate()?;
        let model = self.stacks.create(&new_stack).await.map_err(db_error)?;
        tracing::info!(stack_id = %model.id, "Stack submitted: {}", model.title);
        Ok(model.into())
    }

    /// Lists stacks, newest first unless another sort field or order is given.
    pub async fn list_stacks(
        &self,
        sort: Option<&str>,
        order: Option<&str>,
    ) -> Result<Vec<Stack>, AppError> {
        let sort = match sort.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse::<StackSortField>()?,
            None => StackSortField::default(),
        };
        let order = order.map(SortOrder::parse).unwrap_or_default();

        let models = self.stacks.list(sort, order).await.map_err(db_error)?;
        Ok(models.into_iter().map(Stack::from).collect())
    }

    pub async fn get_stack(&self, id: &str) -> Result<Stack, AppError> {
        let id = parse_stack_id(id)?;
        self.stacks
            .find_by_id(id)
            .await
            .map_err(db_error)?
            .map(Stack::from)
            .ok_or_else(stack_not_found)
    }

    pub async fn get_stack_with_roasts(&self, id: &str) -> Result<StackWithRoasts, AppError> {
        let stack = self.get_stack(id).await?;
        let roasts = self
            .roasts
            .list_for_stack(stack.id)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(Roast::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StackWithRoasts { stack, roasts })
    }
}

// A malformed id cannot match any stack.
fn parse_stack_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| stack_not_found())
}

fn stack_not_found() -> AppError {
    AppError::not_found("Stack not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::test_connection;

    fn submission(title: &str) -> StackSubmission {
        StackSubmission {
            title: Some(title.into()),
            frontend: Some("React".into()),
            backend: Some("Node".into()),
            database: Some("Postgres".into()),
            hosting: Some("Vercel".into()),
            ..Default::default()
        }
    }

    async fn service() -> StackService {
        let db = test_connection().await;
        StackService::new(StackRepository::new(db.clone()), RoastRepository::new(db))
    }

    #[tokio::test]
    async fn test_create_stack() {
        let service = service().await;
        let stack = service.create_stack(submission("X")).await.unwrap();
        assert_eq!(stack.title, "X");
        assert_eq!(stack.roast_count, 0);
        assert!(!stack.is_anonymous);
        assert!(stack.other_tools.is_empty());
    }

    #[tokio::test]
    async fn test_create_stack_missing_hosting() {
        let service = service().await;
        let mut bad = submission("X");
        bad.hosting = None;
        let err = service.create_stack(bad).await.unwrap_err();
        assert_eq!(err, AppError::Validation("Missing required field: hosting".into()));
        assert!(service.list_stacks(None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_stacks_sorting() {
        let service = service().await;
        service.create_stack(submission("Bravo")).await.unwrap();
        service.create_stack(submission("Alpha")).await.unwrap();

        let titles = |stacks: Vec<Stack>| stacks.into_iter().map(|s| s.title).collect::<Vec<_>>();
        assert_eq!(
            titles(service.list_stacks(Some("title"), Some("asc")).await.unwrap()),
            vec!["Alpha", "Bravo"]
        );
        assert_eq!(
            titles(service.list_stacks(Some("title"), None).await.unwrap()),
            vec!["Bravo", "Alpha"]
        );
        assert!(matches!(
            service.list_stacks(Some("popularity"), None).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_get_stack_not_found() {
        let service = service().await;
        let missing = Uuid::new_v4().to_string();
        assert_eq!(
            service.get_stack_with_roasts(&missing).await.unwrap_err(),
            AppError::NotFound("Stack not found".into())
        );
        assert!(matches!(
            service.get_stack_with_roasts("not-a-uuid").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_stack_with_roasts_empty() {
        let service = service().await;
        let stack = service.create_stack(submission("X")).await.unwrap();
        let detail = service.get_stack_with_roasts(&stack.id.to_string()).await.unwrap();
        assert_eq!(detail.stack.id, stack.id);
        assert!(detail.roasts.is_empty());
    }
}
