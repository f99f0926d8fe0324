use std::sync::RwLock;

use shared::dto::IssueId;

/// One previously scored issue, kept for density lookups only.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub id: Option<IssueId>,
    pub issue_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub score: f32,
}

/// In-process, append-only roster of scored issues.
///
/// This is a best-effort density signal, not a consistency-critical
/// structure: concurrent appends are safe, and a density read racing an
/// append may see a slightly stale count, which is fine. Process-lifetime
/// only; losing it on restart is acceptable.
#[derive(Default)]
pub struct IssueRoster {
    entries: RwLock<Vec<RosterEntry>>,
}

impl IssueRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, entry: RosterEntry) {
        self.entries
            .write()
            .expect("roster lock poisoned")
            .push(entry);
    }

    /// Count entries within `radius` of `(lat, lon)`, plain Euclidean in
    /// degree-space (the radius is tuned for that, ~1km at mid-latitudes).
    pub fn count_near(&self, lat: f64, lon: f64, radius: f64) -> usize {
        self.entries
            .read()
            .expect("roster lock poisoned")
            .iter()
            .filter(|e| {
                let d = ((e.latitude - lat).powi(2) + (e.longitude - lon).powi(2)).sqrt();
                d <= radius
            })
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("roster lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
