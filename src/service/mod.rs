//! Request-facing service layer: lookup orchestration and the HTTP surface.

mod http;
mod lookup;

pub use http::{router, AppState};
pub use lookup::LookupService;
