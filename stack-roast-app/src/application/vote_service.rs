use crate::domain::{VoteResult, VoteSubmission, UNKNOWN_VOTER};
use crate::infrastructure::db::{db_error, is_unique_violation, RoastRepository, VoteRepository};
use stack_roast_errors::AppError;

#[derive(Clone)]
pub struct VoteService {
    roasts: RoastRepository,
    votes: VoteRepository,
}

impl VoteService {
    pub fn new(roasts: RoastRepository, votes: VoteRepository) -> Self {
        Self { roasts, votes }
    }

    /// Records one vote per (roast, voter) and returns the updated tallies.
    pub async fn cast_vote(
        &self,
        submission: VoteSubmission,
        voter_ip: &str,
    ) -> Result<VoteResult, AppError> {
        let new_vote = submission.validate(voter_ip)?;
        if new_vote.voter_ip == UNKNOWN_VOTER {
            tracing::debug!(roast_id = %new_vote.roast_id, "Vote without a client address");
        }

        if self
            .roasts
            .find_by_id(new_vote.roast_id)
            .await
            .map_err(db_error)?
            .is_none()
        {
            return Err(AppError::not_found("Roast not found"));
        }

        if self
            .votes
            .exists(new_vote.roast_id, &new_vote.voter_ip)
            .await
            .map_err(db_error)?
        {
            return Err(AppError::DuplicateVote);
        }

        match self.votes.record(&new_vote).await {
            Ok(result) => Ok(result),
            // Lost a race with a concurrent vote from the same voter.
            Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateVote),
            Err(e) => Err(db_error(e)),
        }
    }

    #[cfg(test)]
    pub(crate) async fn list_votes(
        &self,
        roast_id: uuid::Uuid,
    ) -> Result<Vec<crate::domain::Vote>, AppError> {
        self.votes
            .list_for_roast(roast_id)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(crate::domain::Vote::try_from)
            .collect()
    }
}
