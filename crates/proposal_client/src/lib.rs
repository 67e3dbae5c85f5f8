pub mod backend_trait;
pub mod error;
pub mod http;

pub use backend_trait::ProposalBackend;
pub use error::{ClientError, Result};
pub use http::HttpProposalBackend;
