use std::sync::Arc;

use super::MutationOutcome;
use crate::domain::session::{Session, SessionPatch};

/// Holds the authenticated session, if any. Identity issuance and token
/// refresh happen upstream; this store only tracks the result.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Arc<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, session: Session) {
        self.current = Some(Arc::new(session));
    }

    /// Merge a partial update into the current session; `NotFound` when
    /// signed out.
    pub fn update(&mut self, patch: SessionPatch) -> MutationOutcome {
        match self.current.as_mut() {
            Some(slot) => {
                let mut next = (**slot).clone();
                next.apply(patch);
                *slot = Arc::new(next);
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        }
    }

    pub fn sign_out(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Arc<Session>> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}
