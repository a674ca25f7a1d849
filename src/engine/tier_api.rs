use super::Engine;

use async_trait::async_trait;

use crate::{
    api::TierAPI,
    entities::ServiceTier,
    error::{invalid_input_error, Error},
};

#[async_trait]
impl TierAPI for Engine {
    async fn list_tiers(&self) -> Result<Vec<ServiceTier>, Error> {
        Ok(self.tiers.iter().cloned().collect())
    }

    #[tracing::instrument(skip(self))]
    async fn find_tier(&self, id: &str) -> Result<ServiceTier, Error> {
        self.tiers.find(id).cloned().ok_or_else(invalid_input_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::engine::test_support::engine;
    use std::time::Duration;
    use tokio_test::block_on;

    #[test]
    fn find_tier() {
        let engine = engine(Duration::from_millis(1));

        assert_eq!(block_on(engine.find_tier("luxury")).unwrap(), ServiceTier::luxury());
        assert_eq!(block_on(engine.find_tier("jet")).unwrap_err().code, 101);
        assert_eq!(block_on(engine.list_tiers()).unwrap().len(), 3);
    }
}
