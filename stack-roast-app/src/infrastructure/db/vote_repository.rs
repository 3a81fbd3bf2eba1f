use super::entities::{vote, Vote};
use super::RoastRepository;
use crate::domain::{NewVote, VoteResult};
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr, TransactionTrait};
use uuid::Uuid;

#[derive(Clone)]
pub struct VoteRepository {
    db: DatabaseConnection,
}

impl VoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn exists(&self, roast_id: Uuid, voter_ip: &str) -> Result<bool, DbErr> {
        let vote = Vote::find()
            .filter(vote::Column::RoastId.eq(roast_id))
            .filter(vote::Column::VoterIp.eq(voter_ip))
            .one(&self.db)
            .await?;
        Ok(vote.is_some())
    }

    #[cfg(test)]
    pub(crate) async fn list_for_roast(&self, roast_id: Uuid) -> Result<Vec<vote::Model>, DbErr> {
        Vote::find()
            .filter(vote::Column::RoastId.eq(roast_id))
            .order_by_asc(vote::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Inserts the vote and bumps the matching roast counter in one transaction.
    /// A second vote for the same (roast, voter) fails on the unique index.
    pub async fn record(&self, new_vote: &NewVote) -> Result<VoteResult, DbErr> {
        let txn = self.db.begin().await?;

        let active = vote::ActiveModel {
            id: Set(Uuid::new_v4()),
            roast_id: Set(new_vote.roast_id),
            voter_ip: Set(new_vote.voter_ip.clone()),
            vote_type: Set(new_vote.vote_type.as_str().to_string()),
            created_at: Set(chrono::Utc::now()),
        };
        active.insert(&txn).await?;

        let roast =
            RoastRepository::increment_votes(&txn, new_vote.roast_id, new_vote.vote_type).await?;
        txn.commit().await?;

        Ok(VoteResult {
            upvotes: roast.upvotes,
            downvotes: roast.downvotes,
        })
    }
}
