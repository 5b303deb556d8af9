//! Dog profile lookup service contracts and in-memory adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use thiserror::Error;

use super::model::DogProfile;

/// Object-safe boxed future used by [`DogProfileService`].
pub type DogProfileFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Failure modes of a dog profile lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DogProfileError {
    /// The host answered with a non-success status.
    #[error("Dog profile not found")]
    NotFound,
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not a valid profile record.
    #[error("invalid dog profile: {0}")]
    Decode(String),
}

/// Host service resolving a dog slug to its profile record.
pub trait DogProfileService {
    /// Loads the profile stored under `slug`.
    fn load_profile<'a>(
        &'a self,
        slug: &'a str,
    ) -> DogProfileFuture<'a, Result<DogProfile, DogProfileError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Lookup adapter for targets without a document host; every slug is missing.
pub struct NoopDogProfileService;

impl DogProfileService for NoopDogProfileService {
    fn load_profile<'a>(
        &'a self,
        _slug: &'a str,
    ) -> DogProfileFuture<'a, Result<DogProfile, DogProfileError>> {
        Box::pin(async { Err(DogProfileError::NotFound) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory profile table keyed by slug.
pub struct MemoryDogProfileService {
    inner: Rc<RefCell<HashMap<String, DogProfile>>>,
}

impl MemoryDogProfileService {
    /// Stores `profile` under `slug`, replacing any previous record.
    pub fn insert(&self, slug: impl Into<String>, profile: DogProfile) {
        self.inner.borrow_mut().insert(slug.into(), profile);
    }
}

impl DogProfileService for MemoryDogProfileService {
    fn load_profile<'a>(
        &'a self,
        slug: &'a str,
    ) -> DogProfileFuture<'a, Result<DogProfile, DogProfileError>> {
        Box::pin(async move {
            self.inner
                .borrow()
                .get(slug)
                .cloned()
                .ok_or(DogProfileError::NotFound)
        })
    }
}

/// Decodes a profile document body.
///
/// # Errors
///
/// Returns [`DogProfileError::Decode`] when `raw` is not a valid profile record.
pub fn decode_dog_profile(raw: &str) -> Result<DogProfile, DogProfileError> {
    serde_json::from_str(raw).map_err(|err| DogProfileError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample(name: &str) -> DogProfile {
        DogProfile {
            name: name.to_string(),
            breed: "Border Collie".to_string(),
            date_of_birth: "2020-01-01".to_string(),
            registration: "KC-1".to_string(),
            description: None,
            color: "Merle".to_string(),
            weight: 18.0,
            height: 51.0,
            health_tests: Vec::new(),
            vaccinations_up_to_date: true,
            show_results: Vec::new(),
            dna_tests: Vec::new(),
            breeding: None,
        }
    }

    #[test]
    fn memory_service_returns_stored_profile_and_not_found_otherwise() {
        let service = MemoryDogProfileService::default();
        service.insert("example", sample("Example"));
        let service_obj: &dyn DogProfileService = &service;

        assert_eq!(
            block_on(service_obj.load_profile("example")).expect("stored").name,
            "Example"
        );
        assert_eq!(
            block_on(service_obj.load_profile("dogB")),
            Err(DogProfileError::NotFound)
        );
    }

    #[test]
    fn not_found_message_matches_inline_error_text() {
        assert_eq!(DogProfileError::NotFound.to_string(), "Dog profile not found");
        assert_eq!(
            block_on(NoopDogProfileService.load_profile("anything")),
            Err(DogProfileError::NotFound)
        );
    }

    #[test]
    fn decode_reports_malformed_documents() {
        let err = decode_dog_profile("{\"name\": 3}").expect_err("malformed");
        assert!(matches!(err, DogProfileError::Decode(_)));
    }
}
