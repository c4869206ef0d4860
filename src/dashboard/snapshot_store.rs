use std::sync::Arc;

use tokio::sync::watch;

use crate::types::Generation;

/// An immutable value tagged with the generation of the refresh that produced it.
#[derive(Debug)]
pub struct Stamped<T> {
    pub generation: Generation,
    pub value: Arc<T>
}

impl<T> Clone for Stamped<T> {
    fn clone(&self) -> Self {
        Self {
            generation: self.generation,
            value: self.value.clone()
        }
    }
}

/// Holds the latest accepted snapshot of one piece of state.
///
/// Snapshots are swapped whole, never edited in place. A publish is accepted only
/// when its generation is strictly newer than the held one, so a slow response to
/// an old refresh cannot overwrite the result of a newer refresh.
pub struct SnapshotStore<T> {
    sender: watch::Sender<Option<Stamped<T>>>
}

impl<T> SnapshotStore<T> {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Returns `true` if the snapshot was accepted.
    pub fn publish(&self, generation: Generation, value: T) -> bool {
        self.sender.send_if_modified(|current| {
            let is_newer = current.as_ref()
                .is_none_or(|held| generation > held.generation);

            if is_newer {
                *current = Some(Stamped { generation, value: Arc::new(value) });
            }

            is_newer
        })
    }

    pub fn current(&self) -> Option<Stamped<T>> {
        self.sender.borrow().clone()
    }

    pub fn generation(&self) -> Option<Generation> {
        self.sender.borrow().as_ref().map(|held| held.generation)
    }

    /// Receiver that is notified every time a newer snapshot is accepted.
    pub fn subscribe(&self) -> watch::Receiver<Option<Stamped<T>>> {
        self.sender.subscribe()
    }
}

impl<T> Default for SnapshotStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
