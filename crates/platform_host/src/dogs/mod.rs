//! Dog-profile domain contracts and lightweight test adapters.

mod model;
mod service;

pub use model::{dog_profile_url, BreedingInfo, DogProfile, ShowResult};
pub use service::{
    decode_dog_profile, DogProfileError, DogProfileFuture, DogProfileService,
    MemoryDogProfileService, NoopDogProfileService,
};
