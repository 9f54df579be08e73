//! Folio core: pure preview-resolution state machine and view-model helpers.
mod contact;
mod effect;
mod link;
mod msg;
mod providers;
mod state;
mod update;
mod view_model;

pub use contact::{compose_url, mailto_url, webmail_compose_url, MailRoute};
pub use effect::Effect;
pub use link::{domain_of, normalize_href};
pub use msg::Msg;
pub use providers::{ProviderChain, ScreenshotProvider, UrlEncoding};
pub use state::{AppState, CardId, PreviewPhase, ProjectRef};
pub use update::update;
pub use view_model::{AppViewModel, CardView, PlaceholderView};
