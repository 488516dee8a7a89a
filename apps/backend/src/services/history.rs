//! Recent analyses, newest first.

use std::collections::VecDeque;

use tokio::sync::RwLock;

use crate::models::AnalysisRecord;

#[derive(Debug)]
pub struct HistoryStore {
    limit: usize,
    records: RwLock<VecDeque<AnalysisRecord>>,
}

impl HistoryStore {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            records: RwLock::new(VecDeque::new()),
        }
    }

    /// Record an analysis, evicting the oldest past the limit.
    pub async fn push(&self, record: AnalysisRecord) {
        let mut records = self.records.write().await;
        records.push_front(record);
        records.truncate(self.limit);
    }

    pub async fn list(&self) -> Vec<AnalysisRecord> {
        self.records.read().await.iter().cloned().collect()
    }

    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}
