use crate::domain::money::Money;
use crate::domain::payment::PaymentPayload;
use crate::domain::ports::PaymentGateway;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Number of most recent amounts kept in the request log.
pub const MAX_RECORDED_REQUESTS: usize = 1024;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    #[default]
    Approve,
    Decline,
}

/// Offline stand-in for a card network.
///
/// Approves or declines according to its mode, declining anything above the
/// optional limit. The last [`MAX_RECORDED_REQUESTS`] amounts are kept so
/// callers can check what was sent. Clones share the request log.
#[derive(Debug, Clone, Default)]
pub struct SimulatedGateway {
    mode: GatewayMode,
    limit: Option<Money>,
    requests: Arc<RwLock<VecDeque<Money>>>,
}

impl SimulatedGateway {
    pub fn new(mode: GatewayMode, limit: Option<Money>) -> Self {
        Self {
            mode,
            limit,
            requests: Arc::default(),
        }
    }

    pub fn approving() -> Self {
        Self::new(GatewayMode::Approve, None)
    }

    pub fn declining() -> Self {
        Self::new(GatewayMode::Decline, None)
    }

    /// Most recent amounts passed to `authorize`, oldest first.
    pub async fn requests(&self) -> Vec<Money> {
        self.requests.read().await.iter().copied().collect()
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn authorize(&self, amount: Money, _payload: &PaymentPayload) -> Result<bool> {
        {
            let mut requests = self.requests.write().await;
            if requests.len() == MAX_RECORDED_REQUESTS {
                requests.pop_front();
            }
            requests.push_back(amount);
        }

        let within_limit = self.limit.is_none_or(|limit| amount <= limit);
        Ok(self.mode == GatewayMode::Approve && within_limit)
    }
}
