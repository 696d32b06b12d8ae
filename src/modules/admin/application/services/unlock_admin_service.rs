use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::admin::application::ports::{
    incoming::use_cases::{UnlockAdminCommand, UnlockAdminError, UnlockAdminUseCase},
    outgoing::token_provider::TokenProvider,
};

/// Exchanges the shared admin key for a signed session token.
#[derive(Clone)]
pub struct UnlockAdminService {
    admin_key: String,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl UnlockAdminService {
    pub fn new(admin_key: String, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { admin_key, tokens }
    }
}

#[async_trait]
impl UnlockAdminUseCase for UnlockAdminService {
    async fn execute(&self, command: UnlockAdminCommand) -> Result<String, UnlockAdminError> {
        if command.key() != self.admin_key {
            warn!("Admin unlock rejected: key mismatch");
            return Err(UnlockAdminError::InvalidKey);
        }

        self.tokens
            .generate_admin_token()
            .map_err(|e| UnlockAdminError::TokenError(e.to_string()))
    }
}
