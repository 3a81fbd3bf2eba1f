mod home;
mod stack;
mod submit;

pub use home::{list_stacks, HomePage, ListStacksFn};
pub use stack::{get_stack, GetStackFn, StackPage};
pub use submit::SubmitPage;
