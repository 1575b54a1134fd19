pub mod clients;
pub mod dto;
pub mod error;
pub mod traits;

pub use clients::YDaemonClient;
pub use error::MasterApiError;
pub use traits::PartnersSource;

pub use dto::*;
