pub mod request;
pub mod response;

pub use request::RefreshRequest;
pub use response::ApiResponse;
