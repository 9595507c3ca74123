//! Per-session UI state shared between views.

use std::cell::Cell;
use std::rc::Rc;

/// Remembers whether the listing splash has been shown in this session.
///
/// Created once by the application shell and passed to the listing as a
/// prop. Clones refer to the same session.
#[derive(Debug, Clone, Default)]
pub struct SplashSession {
    shown: Rc<Cell<bool>>,
}

impl SplashSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` only for the first caller of the session.
    pub fn claim_first_show(&self) -> bool {
        !self.shown.replace(true)
    }
}

impl PartialEq for SplashSession {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shown, &other.shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_is_claimed_once_per_session() {
        let session = SplashSession::new();
        let view = session.clone();
        assert!(view.claim_first_show());
        assert!(!session.claim_first_show());
        assert!(!view.claim_first_show());
    }

    #[test]
    fn sessions_are_independent() {
        let first = SplashSession::new();
        let second = SplashSession::new();
        assert!(first.claim_first_show());
        assert!(second.claim_first_show());
        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }
}
