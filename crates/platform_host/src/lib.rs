//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services: the dog-profile document lookup
//! and the location hash/history surface. Concrete browser adapters live in
//! `platform_host_web`; the in-memory adapters here back headless builds and tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dogs;
pub mod host;
pub mod location;

pub use dogs::{
    decode_dog_profile, dog_profile_url, BreedingInfo, DogProfile, DogProfileError,
    DogProfileFuture, DogProfileService, MemoryDogProfileService, NoopDogProfileService,
    ShowResult,
};
pub use host::{HostServices, HostStrategy};
pub use location::{LocationService, MemoryLocationService, NoopLocationService};
