pub mod config;
pub mod domain;
pub mod outbound;

pub use domain::auth;
pub use outbound::directory;
