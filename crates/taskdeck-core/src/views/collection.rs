use std::future::Future;

use tracing::{error, info};

use crate::errors::ApiError;
use crate::notify::{Notification, Notifier};

/// Loading state of a collection view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Result of one `load()` call, for hosts that need an exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection was replaced with this many items.
    Loaded(usize),
    /// The read failed; the previous collection was kept.
    Failed,
}

/// Snapshot of one collection resource plus its loading state.
///
/// Starts in [`LoadState::Loading`]. Every `load` replaces the items with
/// the last successful response or keeps them untouched on failure; it
/// never merges.
#[derive(Debug)]
pub struct CollectionView<T> {
    resource: &'static str,
    failure_message: &'static str,
    items: Vec<T>,
    state: LoadState,
}

impl<T> CollectionView<T> {
    pub fn new(resource: &'static str, failure_message: &'static str) -> Self {
        Self {
            resource,
            failure_message,
            items: Vec::new(),
            state: LoadState::Loading,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Run one read and apply its result.
    ///
    /// On failure exactly one error notification with the view's static
    /// message is raised. The view always ends in [`LoadState::Ready`].
    pub async fn load<F, N>(&mut self, fetch: F, notifier: &N) -> LoadOutcome
    where
        F: Future<Output = Result<Vec<T>, ApiError>>,
        N: Notifier + ?Sized,
    {
        self.state = LoadState::Loading;
        info!(event = "core.view.load_started", resource = self.resource);

        let outcome = match fetch.await {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                info!(
                    event = "core.view.load_completed",
                    resource = self.resource,
                    count = count
                );
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                error!(
                    event = "core.view.load_failed",
                    resource = self.resource,
                    error = %e
                );
                notifier.notify(Notification::error(self.failure_message));
                LoadOutcome::Failed
            }
        };

        self.state = LoadState::Ready;
        outcome
    }
}
