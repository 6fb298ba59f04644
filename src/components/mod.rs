//! Reusable UI components

pub mod credential_form;
pub mod header;
pub mod loading;
pub mod result_card;
pub mod search_box;
pub mod settings_toggle;

pub use credential_form::{CredentialForm, FormKind};
pub use header::Header;
pub use loading::LoadingSpinner;
pub use result_card::ResultCard;
pub use search_box::SearchBox;
pub use settings_toggle::SettingsToggle;
