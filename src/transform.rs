use crate::{Result, event::Event};
use async_trait::async_trait;

/// Turns one inbound event into one outbound event.
///
/// Implementations hold their external clients as explicit dependencies so
/// the HTTP layer can be exercised with fakes.
#[async_trait]
pub trait Transformation: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn transform(&self, event: Event) -> Result<Event>;
}
