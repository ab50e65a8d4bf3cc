use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use auth_service::auth::DirectoryError;
use auth_service::auth::User;
use auth_service::auth::UserDirectory;
use auth_service::auth::UserId;
use auth_service::auth::Username;
use chrono::Utc;

/// In-memory user directory standing in for the Postgres adapter.
///
/// Honors the same contract: lookups can exclude disabled accounts,
/// login-time updates are best-effort, and the whole directory can be
/// switched into an "outage" mode that fails every call.
pub struct InMemoryUserDirectory {
    users: Mutex<HashMap<String, User>>,
    offline: AtomicBool,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            offline: AtomicBool::new(false),
        }
    }

    pub fn insert(&self, name: &str, enabled: bool) {
        let user = User {
            id: UserId::new(),
            username: Username::new(name.to_string()).expect("valid test username"),
            email: format!("{name}@example.com"),
            enabled,
            created_at: Utc::now(),
            last_login_at: None,
        };
        self.users
            .lock()
            .expect("directory lock")
            .insert(name.to_string(), user);
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn last_login_of(&self, name: &str) -> Option<chrono::DateTime<Utc>> {
        self.users
            .lock()
            .expect("directory lock")
            .get(name)
            .and_then(|user| user.last_login_at)
    }

    fn check_online(&self) -> Result<(), DirectoryError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(DirectoryError::Unavailable("directory offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_name(
        &self,
        name: &str,
        include_disabled: bool,
    ) -> Result<Option<User>, DirectoryError> {
        self.check_online()?;
        let users = self.users.lock().expect("directory lock");
        Ok(users
            .get(name)
            .filter(|user| user.enabled || include_disabled)
            .cloned())
    }

    async fn update_login_time(&self, name: &str) -> Result<(), DirectoryError> {
        self.check_online()?;
        let mut users = self.users.lock().expect("directory lock");
        if let Some(user) = users.get_mut(name) {
            user.last_login_at = Some(Utc::now());
        }
        Ok(())
    }
}
