// Content API handlers - fixture and database backed read endpoints.
pub mod categories;
pub mod knowledge;
pub mod media;
pub mod publishing;
pub mod stats;
pub mod team_calls;

pub use categories::categories_get;
pub use knowledge::{knowledge_get, knowledge_post};
pub use media::{media_get, media_post};
pub use publishing::{publishing_get, publishing_post};
pub use stats::stats_get;
pub use team_calls::{agents_get, tags_get};
