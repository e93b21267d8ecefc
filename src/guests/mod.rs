mod guests_model;
mod guests_repository;
mod guests_traits;

pub use guests_model::{Guest, NewGuest};
pub use guests_repository::GuestRepository;
pub use guests_traits::GuestRepositoryTrait;
