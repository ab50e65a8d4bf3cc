use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use token::TokenSigner;

use crate::auth::errors::AuthError;
use crate::auth::models::AuthenticatedIdentity;
use crate::auth::models::Username;
use crate::auth::ports::AuthServicePort;
use crate::auth::ports::UserDirectory;

/// Domain service implementation for stateless token authentication.
///
/// Concrete implementation of AuthServicePort with dependency injection:
/// the signer owns the process secret key and random source, the directory
/// is the only external collaborator. No per-token state is held anywhere,
/// and verification results are never cached.
pub struct AuthService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    signer: TokenSigner,
}

impl<D> AuthService<D>
where
    D: UserDirectory,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - User directory implementation
    /// * `signer` - Token signer holding the process key material
    pub fn new(directory: Arc<D>, signer: TokenSigner) -> Self {
        Self { directory, signer }
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: UserDirectory,
{
    async fn issue_token(&self, username: &Username) -> Result<String, AuthError> {
        let encoded = self.signer.issue(username.as_str())?;
        Ok(encoded)
    }

    async fn validate_token(
        &self,
        token: &str,
    ) -> Result<Option<AuthenticatedIdentity>, AuthError> {
        // Stage 1-3: decode, recompute digest, check the validity window.
        // Every failure mode collapses into the same unauthenticated outcome;
        // the stage is only visible in low-verbosity internal logs.
        let verified = match self.signer.verify(token) {
            Ok(verified) => verified,
            Err(e) => {
                tracing::debug!(error = %e, "Token failed verification");
                return Ok(None);
            }
        };

        // Stage 4: the token is genuine, mark the user as logged in. A
        // directory hiccup here must not turn a valid token into an auth
        // failure, so it only surfaces on the operational channel.
        if let Err(e) = self.directory.update_login_time(&verified.username).await {
            tracing::error!(
                username = %verified.username,
                error = %e,
                "Failed to record login time for verified token"
            );
        }

        let user = self
            .directory
            .find_by_name(&verified.username, false)
            .await?;

        let Some(user) = user else {
            tracing::info!(
                username = %verified.username,
                "Verified token names a user that no longer resolves"
            );
            return Ok(None);
        };

        // Issue time is bounded near the present by the validity window, so
        // it always converts.
        let issued_at = DateTime::from_timestamp_millis(verified.issued_at_ms)
            .unwrap_or_else(Utc::now);

        Ok(Some(AuthenticatedIdentity {
            user,
            issued_at,
            verified_at: Utc::now(),
        }))
    }

    async fn record_interactive_login(&self, username: &Username) -> Result<(), AuthError> {
        self.directory.update_login_time(username.as_str()).await?;
        Ok(())
    }
}
