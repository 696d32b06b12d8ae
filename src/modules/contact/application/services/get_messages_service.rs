use async_trait::async_trait;

use crate::contact::application::ports::{
    incoming::use_cases::{GetMessagesError, GetMessagesUseCase},
    outgoing::{ContactMessageRecord, ContactQuery},
};

#[derive(Debug, Clone)]
pub struct GetMessagesService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetMessagesService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMessagesUseCase for GetMessagesService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactMessageRecord>, GetMessagesError> {
        self.query
            .list()
            .await
            .map_err(|e| GetMessagesError::RepositoryError(e.to_string()))
    }
}
