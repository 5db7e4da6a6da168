pub mod agent;
pub mod campaign_creator;
pub mod media;
pub mod report;
pub mod section_creator;
pub mod subscriber_import;

pub use crate::domain::ports::{AssetStorage, Demo, EmsService};
pub use crate::utils::error::Result;
