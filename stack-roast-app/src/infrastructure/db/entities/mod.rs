pub mod roast;
pub mod stack;
pub mod vote;

pub use roast::Entity as Roast;
pub use stack::Entity as Stack;
pub use vote::Entity as Vote;
