// ── Store subscriptions ──
//
// A view keeps one of these alive to re-render after backend mutations.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Immutable, id-ordered view of one store collection.
pub type Snapshot<T> = Arc<Vec<Arc<T>>>;

/// A live subscription to a store collection.
///
/// Usable two ways: [`latest`](Self::latest)/[`changed`](Self::changed)
/// for imperative consumers, or as a [`Stream`] of snapshots (the
/// current one first, then one per mutation) for combinator pipelines.
pub struct EntityStream<T: Send + Sync + 'static> {
    rx: watch::Receiver<Snapshot<T>>,
    yields: WatchStream<Snapshot<T>>,
}

impl<T: Send + Sync + 'static> EntityStream<T> {
    pub(crate) fn new(rx: watch::Receiver<Snapshot<T>>) -> Self {
        let yields = WatchStream::new(rx.clone());
        Self { rx, yields }
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> Snapshot<T> {
        self.rx.borrow().clone()
    }

    /// Wait for the next mutation, returning the new snapshot.
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<Snapshot<T>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

impl<T: Send + Sync + 'static> Stream for EntityStream<T> {
    type Item = Snapshot<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.yields).poll_next(cx)
    }
}
