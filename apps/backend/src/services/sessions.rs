//! In-memory quiz sessions keyed by id.

use std::collections::HashMap;

use lingolens_core::{QuizSession, QuizStep};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Active quiz sessions. Finished or abandoned sessions are dropped.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: QuizSession) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, session);
        tracing::info!("Started quiz session {}", id);
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<QuizSession> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Apply an answer and return the updated session.
    pub async fn answer(&self, id: Uuid, choice: &str) -> Option<QuizSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.remove(&id)?.submit_answer(choice);
        sessions.insert(id, session.clone());
        Some(session)
    }

    /// Advance a session, dropping it once it finishes.
    pub async fn advance(&self, id: Uuid) -> Option<QuizStep> {
        let mut sessions = self.sessions.write().await;
        let step = sessions.remove(&id)?.advance();
        match &step {
            QuizStep::InProgress(session) => {
                sessions.insert(id, session.clone());
            }
            QuizStep::Finished(outcome) => {
                tracing::info!(
                    "Finished quiz session {} with {}/{}",
                    id,
                    outcome.score,
                    outcome.total
                );
            }
        }
        Some(step)
    }

    /// Abandon a session. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            tracing::info!("Abandoned quiz session {}", id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingolens_core::QuizQuestion;

    fn session() -> QuizSession {
        QuizSession::start(vec![QuizQuestion {
            prompt: "What is the translation for \"cat\"?".to_string(),
            choices: vec!["gato".to_string(), "perro".to_string()],
            correct_answer: "gato".to_string(),
            source_label: "cat".to_string(),
        }])
        .unwrap()
    }

    #[tokio::test]
    async fn answer_is_persisted() {
        let store = SessionStore::new();
        let id = store.insert(session()).await;
        store.answer(id, "gato").await.unwrap();
        assert_eq!(store.get(id).await.unwrap().score(), 1);
    }

    #[tokio::test]
    async fn finishing_drops_the_session() {
        let store = SessionStore::new();
        let id = store.insert(session()).await;
        let step = store.advance(id).await.unwrap();
        assert!(step.is_finished());
        assert!(store.get(id).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let store = SessionStore::new();
        assert!(store.answer(Uuid::new_v4(), "gato").await.is_none());
        assert!(store.advance(Uuid::new_v4()).await.is_none());
        assert!(!store.remove(Uuid::new_v4()).await);
    }
}
