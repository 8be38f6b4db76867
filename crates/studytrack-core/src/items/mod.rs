mod model;
mod seed;
mod store;

pub use model::{ItemStatus, ItemType, StudyItem};
pub use seed::{study_seed, weekly_seed};
pub use store::ItemStore;
