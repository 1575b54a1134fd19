pub mod metrics;
pub mod partner;
pub mod query;
pub mod response;

pub use metrics::*;
pub use partner::*;
pub use query::*;
pub use response::*;
