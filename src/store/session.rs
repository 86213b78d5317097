// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session marker: the currently authenticated username.

/// Process-scoped session store.
///
/// An absent marker means "not authenticated". The marker is never
/// persisted; a restart always starts logged out.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<String>,
}

impl Session {
    /// The authenticated username, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn set(&mut self, username: impl Into<String>) {
        self.current = Some(username.into());
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let mut session = Session::default();
        assert_eq!(session.current(), None);

        session.set("curmove");
        assert_eq!(session.current(), Some("curmove"));

        session.clear();
        assert_eq!(session.current(), None);
    }
}
