pub mod errors;
pub mod handler;
pub mod policy;

pub use errors::IssueError;
pub use errors::VerifyError;
pub use handler::TokenSigner;
pub use handler::VerifiedToken;
pub use policy::ValidityWindow;
