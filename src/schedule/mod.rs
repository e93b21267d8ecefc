mod schedule_model;
mod schedule_repository;
mod schedule_traits;

pub use schedule_model::{NewScheduleEntry, ScheduleEntry, ScheduleMetadata, SourceModule};
pub use schedule_repository::ScheduleRepository;
pub use schedule_traits::ScheduleRepositoryTrait;
