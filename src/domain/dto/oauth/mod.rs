pub mod request;
pub mod response;

pub use request::{OAuthCallbackQuery, UnlinkRequest};
pub use response::OAuthLoginResponse;
