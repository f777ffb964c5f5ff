//! Remote sync channel: hydrate once, replicate every committed change.
//!
//! Local state is authoritative for the session. Loads and saves run as
//! detached tasks on the UI thread's executor; a failed save only sets the
//! model's error message and is never retried. Saves are not sequenced, so
//! the write that completes last decides the stored value.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use glam::Vec3;
use log::{debug, error, info};

use crate::error::SyncError;
use crate::model::{LoadStatus, RotationParameter, TrackedObject};
use crate::record::{PersistedRecord, StoredDocument};
use crate::store::ModelStore;

/// Runs a detached task on the current thread.
pub trait Spawner {
    fn spawn_task(&self, task: LocalBoxFuture<'static, ()>);
}

impl Spawner for futures::executor::LocalSpawner {
    fn spawn_task(&self, task: LocalBoxFuture<'static, ()>) {
        if let Err(e) = LocalSpawnExt::spawn_local(self, task) {
            error!("[sync] executor rejected task: {e}");
        }
    }
}

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// Wall clock from `std`. Not usable on `wasm32-unknown-unknown`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually advanced clock for deterministic timestamps.
#[derive(Debug, Default)]
pub struct FixedClock(Cell<u64>);

impl FixedClock {
    pub fn new(now_ms: u64) -> Self {
        Self(Cell::new(now_ms))
    }

    pub fn advance(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

#[derive(Clone)]
pub struct SyncChannel {
    store: Rc<dyn ModelStore>,
    spawner: Rc<dyn Spawner>,
    clock: Rc<dyn Clock>,
}

impl SyncChannel {
    pub fn new(store: Rc<dyn ModelStore>, spawner: Rc<dyn Spawner>, clock: Rc<dyn Clock>) -> Self {
        Self {
            store,
            spawner,
            clock,
        }
    }

    /// Read the stored document for `id`; `Ok(None)` when there is none.
    /// A document with an unusable field is a load failure.
    pub async fn load(&self, id: &str) -> Result<Option<StoredDocument>, SyncError> {
        let doc = self.store.get(id).await.and_then(|doc| {
            if let Some(doc) = &doc {
                doc.validate()?;
            }
            Ok(doc)
        });
        doc.map_err(|source| SyncError::LoadFailure {
            id: id.to_string(),
            source,
        })
    }

    /// Overwrite the stored document for `id` with a complete snapshot.
    pub async fn save(
        &self,
        id: &str,
        position: Vec3,
        rotation: RotationParameter,
    ) -> Result<PersistedRecord, SyncError> {
        let record = PersistedRecord::new(position, rotation, self.clock.now_ms());
        self.store
            .put(id, &record)
            .await
            .map_err(|source| SyncError::SaveFailure {
                id: id.to_string(),
                source,
            })?;
        Ok(record)
    }

    /// Start the one-time load for a model. The result is applied when the
    /// task completes, or dropped if the model has been released by then.
    pub fn hydrate(&self, target: &Rc<RefCell<TrackedObject>>) {
        let id = {
            let mut object = target.borrow_mut();
            object.load = LoadStatus::Pending;
            object.error = None;
            object.id.clone()
        };
        let weak = Rc::downgrade(target);
        let channel = self.clone();
        self.spawner.spawn_task(Box::pin(async move {
            let result = channel.load(&id).await;
            let Some(target) = weak.upgrade() else {
                debug!("[sync] model {id} released before load finished");
                return;
            };
            let mut object = target.borrow_mut();
            match result {
                Ok(Some(doc)) => {
                    if let Some(position) = doc.position() {
                        object.drag.set_committed(position);
                    }
                    if let Some(rotation) = doc.rotation() {
                        object.rotation = rotation;
                    }
                    info!(
                        "[sync] hydrated {id} at {:?} rotation {}",
                        object.drag.committed(),
                        object.rotation.value()
                    );
                }
                Ok(None) => info!("[sync] no stored record for {id}, keeping defaults"),
                Err(e) => {
                    error!("[sync] {e}: {}", source_message(&e));
                    object.error = Some(e.to_string());
                }
            }
            object.load = LoadStatus::Loaded;
        }));
    }

    /// Persist the model's committed position and current rotation.
    /// Fire-and-forget: local state is never rolled back on failure.
    pub fn replicate(&self, target: &Rc<RefCell<TrackedObject>>) {
        let (id, position, rotation) = {
            let object = target.borrow();
            (object.id.clone(), object.drag.committed(), object.rotation)
        };
        let weak = Rc::downgrade(target);
        let channel = self.clone();
        self.spawner.spawn_task(Box::pin(async move {
            match channel.save(&id, position, rotation).await {
                Ok(record) => debug!("[sync] saved {id} at {}", record.updated_at),
                Err(e) => {
                    error!("[sync] {e}: {}", source_message(&e));
                    match weak.upgrade() {
                        Some(target) => target.borrow_mut().error = Some(e.to_string()),
                        None => debug!("[sync] model {id} released before save failed"),
                    }
                }
            }
        }));
    }
}

fn source_message(e: &SyncError) -> String {
    std::error::Error::source(e)
        .map(ToString::to_string)
        .unwrap_or_default()
}
