//! Holds the single live snapshot. Completions are matched against the
//! latest issued ticket so an older response can never overwrite a newer one.

use crate::dto::PortalSnapshot;
use crate::error::FetchError;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Arc<PortalSnapshot>),
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Clone, Debug)]
pub struct SnapshotStore {
    latest: u64,
    generation: u64,
    state: LoadState,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self {
            latest: 0,
            generation: 0,
            state: LoadState::Loading,
        }
    }
}

impl SnapshotStore {
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    /// Returns false when the ticket has been superseded and the result was dropped.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<PortalSnapshot, FetchError>,
    ) -> bool {
        if ticket.0 != self.latest {
            log::debug!(
                "dropping stale snapshot response (ticket {} < {})",
                ticket.0,
                self.latest
            );
            return false;
        }
        self.state = match result {
            Ok(snapshot) => LoadState::Ready(Arc::new(snapshot)),
            Err(e) => {
                log::error!("Fetch Error: {e}");
                LoadState::Failed(e.to_string())
            }
        };
        self.generation += 1;
        true
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<Arc<PortalSnapshot>> {
        match &self.state {
            LoadState::Ready(s) => Some(Arc::clone(s)),
            _ => None,
        }
    }

    /// Bumped on every applied completion; UI regions key on it so a new
    /// snapshot rebuilds them from scratch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn skeleton_visible(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }
}
