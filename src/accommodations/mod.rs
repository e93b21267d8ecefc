mod accommodations_model;
mod accommodations_repository;
mod accommodations_traits;

pub use accommodations_model::{AccommodationStay, NewAccommodationStay};
pub use accommodations_repository::AccommodationRepository;
pub use accommodations_traits::AccommodationRepositoryTrait;
