use futures::future::LocalBoxFuture;
use futures::stream::LocalBoxStream;

use crate::error::BoxError;
use crate::topic::TopicId;

/// Something a [`Session`] can be opened on.
pub trait Backend {
    type Session: Session;

    /// Opens a new session scoped to `project_id`, using whatever
    /// credentials the environment provides.
    fn connect<'a>(&'a self, project_id: &'a str)
        -> LocalBoxFuture<'a, Result<Self::Session, BoxError>>;
}

pub trait Session {
    /// Lazily lists every topic of the session's project.
    ///
    /// The end of the stream means the listing is exhausted; an `Err` item
    /// is a failed fetch and the stream should not be polled further.
    fn topics(&self) -> LocalBoxStream<'_, Result<TopicId, BoxError>>;
}
