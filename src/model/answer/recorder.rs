use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::model::{
    answer::AnswerRecord,
    common::{AnswerId, ChoiceId, QuestionId},
};

/// Append-only log of graded answers, shared between requests.
///
/// All writes go through a single exclusive lock, so a reader sees each record
/// either completely or not at all.
#[derive(Debug)]
pub struct AnswerRecorder {
    log: RwLock<AnswerLog>,
}

#[derive(Debug)]
struct AnswerLog {
    records: Vec<AnswerRecord>,
    next_id: AnswerId,
}

impl Default for AnswerRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerRecorder {
    pub fn new() -> Self {
        Self {
            log: RwLock::new(AnswerLog {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Record a graded answer, returning the stored record.
    pub fn append(
        &self,
        question_id: QuestionId,
        selected_choice_ids: Vec<ChoiceId>,
        is_correct: bool,
    ) -> Result<AnswerRecord> {
        let mut log = self.log.write()?;
        let id = log.next_id;
        log.next_id = id
            .checked_add(1)
            .ok_or_else(|| Error::Storage("no answer IDs left".to_string()))?;
        let record = AnswerRecord {
            id,
            question_id,
            selected_choice_ids,
            is_correct,
        };
        log.records.push(record.clone());
        Ok(record)
    }

    /// Delete every record, returning how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let mut log = self.log.write()?;
        let removed = log.records.len();
        log.records.clear();
        Ok(removed)
    }

    /// Run `f` against a consistent view of all records.
    pub fn with_records<R>(&self, f: impl FnOnce(&[AnswerRecord]) -> R) -> Result<R> {
        let log = self.log.read()?;
        Ok(f(&log.records))
    }

    /// A copy of all records, oldest first.
    pub fn records(&self) -> Result<Vec<AnswerRecord>> {
        self.with_records(<[AnswerRecord]>::to_vec)
    }

    /// Panic while holding the write lock, leaving it poisoned.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::panic::catch_unwind(|| {
            let _log = self.log.write();
            panic!("poisoning answer log");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_selection_as_given() {
        let recorder = AnswerRecorder::new();
        let record = recorder.append(4, vec![15, 13, 13], false).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.question_id, 4);
        assert_eq!(record.selected_choice_ids, vec![15, 13, 13]);
        assert_eq!(recorder.records().unwrap(), vec![record]);
    }

    #[test]
    fn ids_keep_increasing_after_clear() {
        let recorder = AnswerRecorder::new();
        recorder.append(1, vec![1], true).unwrap();
        recorder.append(1, vec![2], false).unwrap();

        assert_eq!(recorder.clear().unwrap(), 2);
        assert!(recorder.records().unwrap().is_empty());

        let record = recorder.append(1, vec![1], true).unwrap();
        assert_eq!(record.id, 3);
    }

    #[test]
    fn clear_is_idempotent() {
        let recorder = AnswerRecorder::new();
        assert_eq!(recorder.clear().unwrap(), 0);
        assert_eq!(recorder.clear().unwrap(), 0);
    }

    #[test]
    fn poisoned_log_is_a_storage_failure() {
        let recorder = AnswerRecorder::new();
        recorder.poison();
        assert!(matches!(recorder.append(1, vec![1], true), Err(Error::Storage(_))));
        assert!(matches!(recorder.records(), Err(Error::Storage(_))));
        assert!(matches!(recorder.clear(), Err(Error::Storage(_))));
    }
}
