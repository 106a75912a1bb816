//! Small helpers shared across modules.

mod path;
mod plural;

pub use path::normalize_path;
pub use plural::plural_count;
