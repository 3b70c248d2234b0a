use async_trait::async_trait;

/// Source of bearer tokens for authorized requests. `Ok(None)` means there
/// is no signed-in session.
#[async_trait(?Send)]
pub trait TokenProvider {
    async fn token(&self) -> anyhow::Result<Option<String>>;
}

/// Never has a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

#[async_trait(?Send)]
impl TokenProvider for Anonymous {
    async fn token(&self) -> anyhow::Result<Option<String>> {
        Ok(None)
    }
}

/// Always returns the same token.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait(?Send)]
impl TokenProvider for StaticToken {
    async fn token(&self) -> anyhow::Result<Option<String>> {
        Ok(Some(self.0.clone()))
    }
}
