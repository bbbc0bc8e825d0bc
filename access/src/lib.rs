//! Route access model shared by the `gigboard` server and the `client` UI.
//!
//! This crate owns the session-snapshot shape, the route authorization
//! resolver, the path-to-category route table, and the session-cookie codec.
//! Nothing here performs I/O: callers hand in a snapshot and act on the
//! returned [`Verdict`].

pub mod cookie;
pub mod resolve;
pub mod role;
pub mod routes;
pub mod session;

pub use cookie::{
    CookieError, SESSION_COOKIE_MAX_AGE_SECS, SESSION_COOKIE_NAME, SessionData, build_session_data,
    decode_session_data, encode_session_data,
};
pub use resolve::{Destination, RouteCategory, Verdict, resolve, role_based_home};
pub use role::Role;
pub use routes::classify;
pub use session::{SessionUser, Snapshot};
