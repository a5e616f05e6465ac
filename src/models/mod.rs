//! Data models for mediaharvest.

mod credential;
mod media;
mod record;

pub use credential::Credential;
pub use media::ResolvedMedia;
pub use record::{PageRequest, PageResult, Record};
