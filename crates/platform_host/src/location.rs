//! Address-bar (URL hash) host-service contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service over the document location hash and session history.
///
/// Implementations must never trigger a page reload or a `hashchange` notification when
/// pushing entries.
pub trait LocationService {
    /// Returns the current hash including its leading `#`, or an empty string.
    fn current_hash(&self) -> String;

    /// Pushes a history entry carrying `hash`, or an entry without any hash when `None`.
    fn push_hash(&self, hash: Option<&str>);
}

#[derive(Debug, Clone, Copy, Default)]
/// Location adapter for targets without a document; reads are empty and writes are dropped.
pub struct NoopLocationService;

impl LocationService for NoopLocationService {
    fn current_hash(&self) -> String {
        String::new()
    }

    fn push_hash(&self, _hash: Option<&str>) {}
}

#[derive(Debug, Clone, Default)]
/// In-memory location adapter that records every pushed history entry.
pub struct MemoryLocationService {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryLocationService {
    /// Creates a location whose initial hash is `hash`.
    pub fn with_hash(hash: impl Into<String>) -> Self {
        let service = Self::default();
        service.history.borrow_mut().push(hash.into());
        service
    }

    /// Returns every history entry pushed so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl LocationService for MemoryLocationService {
    fn current_hash(&self) -> String {
        self.history.borrow().last().cloned().unwrap_or_default()
    }

    fn push_hash(&self, hash: Option<&str>) {
        self.history
            .borrow_mut()
            .push(hash.map(str::to_string).unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_location_tracks_pushes_and_clears() {
        let location = MemoryLocationService::with_hash("#our-kennel");
        let service: &dyn LocationService = &location;
        assert_eq!(service.current_hash(), "#our-kennel");

        service.push_hash(Some("#our-dogs"));
        assert_eq!(service.current_hash(), "#our-dogs");

        service.push_hash(None);
        assert_eq!(service.current_hash(), "");
        assert_eq!(location.history(), vec!["#our-kennel", "#our-dogs", ""]);
    }
}
