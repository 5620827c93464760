use async_trait::async_trait;
use serde_json::Value;

/// Operations understood by the upstream connection service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    TheraConnections,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::TheraConnections => "getTheraConnections",
        }
    }
}

/// Client of the third-party discovery service.
///
/// Implementations hand back the response as a loosely-typed mapping:
/// `{"connections": [...]}` on success, or a mapping carrying an `error`
/// key when the service answered with a failure.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    async fn send(&self, operation: Operation) -> anyhow::Result<Value>;
}
