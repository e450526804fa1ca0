//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::Network;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The network is the only mutable piece: route queries take the read lock,
/// line closures take the write lock.
#[derive(Clone)]
pub struct AppState {
    /// The transit network and its line state
    pub network: Arc<RwLock<Network>>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
            config: Arc::new(config),
        }
    }
}
