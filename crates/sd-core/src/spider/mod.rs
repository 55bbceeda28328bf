//! Spider domain: records, list queries, import drafts and file listings.

mod file;
mod import;
mod model;
mod query;

pub use file::{SpiderFile, SpiderTypeCount};
pub use import::{ImportForm, ImportSource};
pub use model::Spider;
pub use query::{SpiderFilter, SpiderListQuery};
