//! Wire types shared by the status service and the status viewer.
//!
//! Every payload here is assembled fresh per request and carries no identity;
//! the service serializes them and the viewer (or a test) decodes them.

pub mod timestamp;
pub mod types;

pub use types::{
    DatabaseState, GEO_FEATURES, GeoInfo, HealthResponse, ReadyResponse, SERVICE_NAME,
    SERVICE_VERSION, StatusReport,
};
