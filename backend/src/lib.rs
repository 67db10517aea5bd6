//! Vehicle pricing and catalogue service.
//!
//! - [`domain`]: entities, ports and the catalogue service.
//! - [`inbound::http`]: actix-web handlers.
//! - [`outbound`]: Diesel and in-memory repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
