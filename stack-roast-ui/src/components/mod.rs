mod error_display;
mod loading_spinner;
mod roast_card;
mod roast_form;
mod stack_card;

pub use error_display::{server_error_message, ErrorDisplay};
pub use loading_spinner::LoadingSpinner;
pub use roast_card::RoastCard;
pub use roast_form::{AiRoastForm, RoastForm};
pub use stack_card::{StackCard, TechFields};
