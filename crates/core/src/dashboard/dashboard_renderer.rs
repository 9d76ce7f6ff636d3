//! Rendering port for dashboard snapshots.

use std::sync::{Arc, Mutex};

use super::DashboardSnapshot;

/// Receives a fresh snapshot after every trade mutation, rate refresh and
/// theme change.
///
/// `render()` must be fast and non-blocking; a renderer that cannot keep up
/// drops snapshots rather than stalling the caller.
pub trait DashboardRenderer: Send + Sync {
    fn render(&self, snapshot: &DashboardSnapshot);
}

/// Discards snapshots. Used headless and in tests.
#[derive(Clone, Default)]
pub struct NoOpDashboardRenderer;

impl DashboardRenderer for NoOpDashboardRenderer {
    fn render(&self, _snapshot: &DashboardSnapshot) {}
}

/// Collects rendered snapshots for assertions.
#[derive(Clone, Default)]
pub struct MockDashboardRenderer {
    snapshots: Arc<Mutex<Vec<DashboardSnapshot>>>,
}

impl MockDashboardRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<DashboardSnapshot> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<DashboardSnapshot> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DashboardSnapshot>> {
        self.snapshots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DashboardRenderer for MockDashboardRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) {
        self.lock().push(snapshot.clone());
    }
}
