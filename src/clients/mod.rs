mod clients_model;
mod clients_repository;
mod clients_traits;

pub use clients_model::{Client, NewClient};
pub use clients_repository::ClientRepository;
pub use clients_traits::ClientRepositoryTrait;
