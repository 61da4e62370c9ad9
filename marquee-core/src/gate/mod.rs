//! Request-time route gate: classify the path, read the session flag only
//! when the outcome depends on it, and decide allow or redirect.

pub mod decision;
pub mod routes;
pub mod session;

pub use decision::{GateDecision, RouteGate};
pub use routes::{RouteClass, RouteTable, RouteTableError};
pub use session::{CookieSession, SessionProvider, StaticSession};
