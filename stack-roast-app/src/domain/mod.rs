mod field;
mod roast;
mod stack;
mod vote;

pub use roast::{NewRoast, Roast, RoastSubmission, RoastType, MAX_AUTHOR_LEN, MAX_ROAST_LEN};
pub use stack::{
    NewStack, SortOrder, Stack, StackSortField, StackSubmission, StackWithRoasts,
    MAX_DESCRIPTION_LEN, MAX_OTHER_TOOLS, MAX_SHORT_FIELD_LEN, MAX_TOOL_LEN,
};
pub use vote::{NewVote, Vote, VoteResult, VoteSubmission, VoteType, UNKNOWN_VOTER};
