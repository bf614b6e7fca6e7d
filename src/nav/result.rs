//! Answer routing between screens.
//!
//! When a screen navigates somewhere expecting an answer, the awaiting
//! record's key and the agreed result key go into this table. A later pop
//! that carries a result delivers it here; the awaiting screen takes it
//! out once it is active again.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::screen::PopResult;

/// Routing table from record identity to expected and delivered answers.
#[derive(Debug, Default)]
pub struct ResultHandler {
    /// Record key → result key it expects.
    expecting: HashMap<Uuid, String>,
    /// Record key → (result key, answer) delivered but not yet taken.
    delivered: HashMap<Uuid, (String, Box<dyn PopResult>)>,
}

impl ResultHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `record_key` as awaiting an answer under `result_key`.
    /// Replaces an earlier registration and drops an untaken answer.
    pub fn prepare(&mut self, record_key: Uuid, result_key: &str) {
        self.delivered.remove(&record_key);
        self.expecting.insert(record_key, result_key.to_string());
    }

    /// Whether `record_key` awaits an answer.
    pub fn expecting(&self, record_key: Uuid) -> bool {
        self.expecting.contains_key(&record_key)
    }

    /// Deliver `result` to `record_key` if it is expecting one, replacing
    /// an answer that was never taken. Returns false (dropping the result)
    /// when nothing was registered.
    pub fn deliver(&mut self, record_key: Uuid, result: Box<dyn PopResult>) -> bool {
        match self.expecting.get(&record_key) {
            Some(result_key) => {
                self.delivered
                    .insert(record_key, (result_key.clone(), result));
                true
            }
            None => {
                debug!(%record_key, "result dropped: record expects none");
                false
            }
        }
    }

    /// Take the answer delivered to `record_key` under `result_key`,
    /// clearing the registration.
    pub fn take(&mut self, record_key: Uuid, result_key: &str) -> Option<Box<dyn PopResult>> {
        match self.delivered.get(&record_key) {
            Some((key, _)) if key == result_key => {
                self.expecting.remove(&record_key);
                self.delivered
                    .remove(&record_key)
                    .map(|(_, result)| result)
            }
            _ => None,
        }
    }

    /// Drop all state for a record that no longer exists.
    pub fn forget(&mut self, record_key: Uuid) {
        self.expecting.remove(&record_key);
        self.delivered.remove(&record_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Answer(u8);
    impl PopResult for Answer {}

    #[test]
    fn deliver_requires_registration() {
        let mut handler = ResultHandler::new();
        let key = Uuid::new_v4();
        assert!(!handler.deliver(key, Box::new(Answer(1))));

        handler.prepare(key, "pick");
        assert!(handler.expecting(key));
        assert!(handler.deliver(key, Box::new(Answer(2))));
    }

    #[test]
    fn take_matches_result_key() {
        let mut handler = ResultHandler::new();
        let key = Uuid::new_v4();
        handler.prepare(key, "pick");
        handler.deliver(key, Box::new(Answer(3)));

        assert!(handler.take(key, "other").is_none());
        let taken = handler.take(key, "pick").unwrap();
        assert_eq!(taken.downcast_ref::<Answer>(), Some(&Answer(3)));
        // Consumed: a second take yields nothing and the registration is gone.
        assert!(handler.take(key, "pick").is_none());
        assert!(!handler.expecting(key));
    }

    #[test]
    fn redelivery_replaces_untaken_answer() {
        let mut handler = ResultHandler::new();
        let key = Uuid::new_v4();
        handler.prepare(key, "pick");
        handler.deliver(key, Box::new(Answer(1)));
        handler.deliver(key, Box::new(Answer(2)));

        let taken = handler.take(key, "pick").unwrap();
        assert_eq!(taken.downcast_ref::<Answer>(), Some(&Answer(2)));
    }

    #[test]
    fn forget_clears_everything() {
        let mut handler = ResultHandler::new();
        let key = Uuid::new_v4();
        handler.prepare(key, "pick");
        handler.deliver(key, Box::new(Answer(1)));
        handler.forget(key);
        assert!(!handler.expecting(key));
        assert!(handler.take(key, "pick").is_none());
    }
}
