use crate::core::{SpeakerId, SpeakerRecord, SpeakerStore};
use crate::utils::error::Result;

/// Speaker store backed by a vec. Ids are 1-based and sequential; nothing
/// survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<SpeakerRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: SpeakerId) -> Option<&SpeakerRecord> {
        id.0.checked_sub(1)
            .and_then(|index| self.records.get(index as usize))
    }
}

impl SpeakerStore for InMemoryStore {
    fn save_speaker(&mut self, record: &SpeakerRecord) -> Result<SpeakerId> {
        self.records.push(record.clone());
        Ok(SpeakerId(self.records.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Speaker;

    fn record(first_name: &str) -> SpeakerRecord {
        let speaker = Speaker {
            first_name: first_name.to_string(),
            ..Default::default()
        };
        SpeakerRecord::new(speaker, vec![], 0)
    }

    #[test]
    fn test_sequential_ids() {
        let mut store = InMemoryStore::new();

        let first = store.save_speaker(&record("Ada")).unwrap();
        let second = store.save_speaker(&record("Grace")).unwrap();

        assert_eq!(first, SpeakerId(1));
        assert_eq!(second, SpeakerId(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = InMemoryStore::new();
        let id = store.save_speaker(&record("Ada")).unwrap();

        assert_eq!(store.get(id).unwrap().first_name, "Ada");
        assert!(store.get(SpeakerId(0)).is_none());
        assert!(store.get(SpeakerId(99)).is_none());
    }
}
