mod generate_roast;
mod roast_service;
mod stack_service;
mod vote_service;

pub use generate_roast::{GenerateRoast, LlmBackend, AI_AUTHOR_NAME};
pub use roast_service::RoastService;
pub use stack_service::StackService;
pub use vote_service::VoteService;
