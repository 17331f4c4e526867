mod config;
pub mod constants;
mod context;
mod handler;
mod header_list;
mod headers;
mod options;
mod origin;
mod policy;
mod result;

pub use config::{CorsConfig, MaxAgeConfig, OriginConfig};
pub use context::{CorsRequest, RequestContext};
pub use handler::{CorsHandler, cors};
pub use header_list::HeaderList;
pub use headers::{Header, Headers, ResponseHeaders};
pub use options::CorsOptions;
pub use origin::{BoxError, Origin, OriginDecision, OriginPredicateFn};
pub use policy::CorsPolicy;
pub use result::{CorsDecision, CorsError, CorsOutcome, PreflightResponse};
