//! RegisterUser - Command handler for creating user profiles.

use std::sync::Arc;

use crate::domain::profile::UserProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Command to register a new user by display name.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub name: String,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub profile: UserProfile,
    pub greeting: String,
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    store: Arc<dyn ProfileStore>,
}

impl RegisterUserHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RegisterUserCommand,
    ) -> Result<RegisterUserResult, ProfileStoreError> {
        let profile = self.store.create_profile(&cmd.name).await?;

        let greeting = format!(
            "Welcome {}! I'm Remiro, your career counsellor. I'm here to help you \
             discover your ideal career path through a comprehensive 12-dimensional \
             assessment. Let's begin this journey together.",
            profile.name()
        );

        Ok(RegisterUserResult { profile, greeting })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryProfileStore;

    fn handler() -> (Arc<InMemoryProfileStore>, RegisterUserHandler) {
        let store = Arc::new(InMemoryProfileStore::new());
        (store.clone(), RegisterUserHandler::new(store))
    }

    #[tokio::test]
    async fn registers_and_greets_by_sanitized_name() {
        let (store, handler) = handler();

        let result = handler
            .handle(RegisterUserCommand {
                name: "  Afrin! ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.profile.name(), "Afrin");
        assert!(result.greeting.starts_with("Welcome Afrin!"));
        assert!(store.exists(result.profile.id()).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_name_with_no_usable_characters() {
        let (_, handler) = handler();

        let result = handler
            .handle(RegisterUserCommand {
                name: "!!!".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ProfileStoreError::Validation(_))));
    }
}
