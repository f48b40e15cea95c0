//! Request extractors: validated JSON bodies and path segments, the User-Agent header and the session cookie.

pub mod cookie;
pub mod headers;
pub mod json;
pub mod path;

pub use cookie::{SessionToken, SESSION_TOKEN_COOKIE};
pub use headers::UserAgent;
pub use json::JsonBody;
pub use path::PathParam;
