use crate::domain::Coordinate;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The single current marker position, shared by every handler.
///
/// Readers take a snapshot; a pipeline run that is already in flight keeps
/// the position it read even if the marker moves afterwards.
#[derive(Debug, Clone)]
pub struct LocationState {
    current: Arc<RwLock<Coordinate>>,
    default: Coordinate,
}

impl LocationState {
    pub fn new(default: Coordinate) -> Self {
        Self {
            current: Arc::new(RwLock::new(default)),
            default,
        }
    }

    pub async fn snapshot(&self) -> Coordinate {
        *self.current.read().await
    }

    pub async fn set(&self, coordinate: Coordinate) {
        *self.current.write().await = coordinate;
    }

    /// Move the marker back to the configured centre and return it.
    pub async fn reset(&self) -> Coordinate {
        self.set(self.default).await;
        self.default
    }
}
