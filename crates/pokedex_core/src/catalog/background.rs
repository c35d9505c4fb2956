//! One-shot catalog load on a worker thread.
//!
//! The UI thread polls `PendingCatalog::try_take` (or blocks in `wait`) and
//! renders an empty list until the catalog is ready. There is no cancellation;
//! dropping the handle detaches the worker and discards its result.

use super::{load_catalog, Catalog, CatalogError, CatalogResult};
use log::error;
use std::mem;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

const LOADER_THREAD_NAME: &str = "pokedex-catalog-load";

/// Snapshot of a background load.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready(Catalog),
    Failed(CatalogError),
    /// `Ready` or `Failed` was already returned by an earlier call.
    Taken,
}

/// Handle to a catalog load running off the calling thread.
#[derive(Debug)]
pub struct PendingCatalog {
    origin: String,
    slot: Slot,
}

#[derive(Debug)]
enum Slot {
    Waiting(Receiver<CatalogResult<Catalog>>),
    SpawnFailed(String),
    Taken,
}

/// Starts reading and parsing `path` on a dedicated worker thread.
pub fn spawn_load(path: impl Into<PathBuf>) -> PendingCatalog {
    let path = path.into();
    let origin = path.display().to_string();
    let (sender, receiver) = mpsc::sync_channel(1);

    let spawned = thread::Builder::new()
        .name(LOADER_THREAD_NAME.to_string())
        .spawn(move || {
            // Receiver may already be gone; the result is simply dropped then.
            let _ = sender.send(load_catalog(&path));
        });

    let slot = match spawned {
        Ok(_) => Slot::Waiting(receiver),
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error mode=background error_code=loader_unavailable error={}",
                err
            );
            Slot::SpawnFailed(format!("worker thread failed to start: {err}"))
        }
    };
    PendingCatalog { origin, slot }
}

impl PendingCatalog {
    /// Returns the current state without blocking.
    ///
    /// `Ready` and `Failed` are returned once; later calls return `Taken`.
    pub fn try_take(&mut self) -> LoadState {
        match mem::replace(&mut self.slot, Slot::Taken) {
            Slot::Waiting(receiver) => match receiver.try_recv() {
                Ok(result) => into_state(result),
                Err(TryRecvError::Empty) => {
                    self.slot = Slot::Waiting(receiver);
                    LoadState::Loading
                }
                Err(TryRecvError::Disconnected) => LoadState::Failed(self.worker_lost()),
            },
            Slot::SpawnFailed(detail) => LoadState::Failed(self.unavailable(detail)),
            Slot::Taken => LoadState::Taken,
        }
    }

    /// Blocks until the load finishes.
    ///
    /// Fails with `LoaderUnavailable` when `try_take` already handed the
    /// result off.
    pub fn wait(mut self) -> CatalogResult<Catalog> {
        match mem::replace(&mut self.slot, Slot::Taken) {
            Slot::Waiting(receiver) => receiver.recv().unwrap_or_else(|_| Err(self.worker_lost())),
            Slot::SpawnFailed(detail) => Err(self.unavailable(detail)),
            Slot::Taken => Err(self.unavailable("result already taken".to_string())),
        }
    }

    fn worker_lost(&self) -> CatalogError {
        self.unavailable("worker thread exited without a result".to_string())
    }

    fn unavailable(&self, detail: String) -> CatalogError {
        CatalogError::LoaderUnavailable {
            origin: self.origin.clone(),
            detail,
        }
    }
}

fn into_state(result: CatalogResult<Catalog>) -> LoadState {
    match result {
        Ok(catalog) => LoadState::Ready(catalog),
        Err(err) => LoadState::Failed(err),
    }
}
