mod transport_model;
mod transport_repository;
mod transport_traits;

pub use transport_model::{LegType, NewTransportLeg, TransportLeg};
pub use transport_repository::TransportRepository;
pub use transport_traits::TransportRepositoryTrait;
