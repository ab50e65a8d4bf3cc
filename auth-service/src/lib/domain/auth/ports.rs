use async_trait::async_trait;

use crate::auth::errors::AuthError;
use crate::auth::errors::DirectoryError;
use crate::auth::models::AuthenticatedIdentity;
use crate::auth::models::User;
use crate::auth::models::Username;

/// Port for the external user directory consulted during validation.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Look up a user by name.
    ///
    /// # Arguments
    /// * `name` - Username to search for
    /// * `include_disabled` - When false, disabled accounts resolve to None
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `DirectoryError` - Directory could not be reached
    async fn find_by_name(
        &self,
        name: &str,
        include_disabled: bool,
    ) -> Result<Option<User>, DirectoryError>;

    /// Record the current time as the user's last login.
    ///
    /// Best-effort: a username that matches no record is not an error.
    ///
    /// # Errors
    /// * `DirectoryError` - Directory could not be reached
    async fn update_login_time(&self, name: &str) -> Result<(), DirectoryError>;
}

/// Port for authentication token operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Issue a signed token for an already-authenticated user.
    ///
    /// # Returns
    /// Opaque URL-safe token string
    ///
    /// # Errors
    /// * `Issue` - Username violates the token format limits
    async fn issue_token(&self, username: &Username) -> Result<String, AuthError>;

    /// Validate a presented token and resolve the identity it names.
    ///
    /// # Returns
    /// `Some(identity)` on full success; `None` for every malformed, forged,
    /// expired, or unknown-user token, with no distinction exposed
    ///
    /// # Errors
    /// * `DirectoryUnavailable` - Directory lookup failed; not a verdict on
    ///   the token itself
    async fn validate_token(
        &self,
        token: &str,
    ) -> Result<Option<AuthenticatedIdentity>, AuthError>;

    /// Record a successful interactive (username/password) login.
    ///
    /// # Errors
    /// * `DirectoryUnavailable` - Directory update failed
    async fn record_interactive_login(&self, username: &Username) -> Result<(), AuthError>;
}
