pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::AuthError;
pub use errors::DirectoryError;
pub use models::AuthenticatedIdentity;
pub use models::User;
pub use models::UserId;
pub use models::Username;
pub use ports::AuthServicePort;
pub use ports::UserDirectory;
pub use service::AuthService;
