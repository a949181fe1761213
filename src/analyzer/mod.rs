mod criteria;
mod matcher;
pub mod modifier;
pub mod sockets;

pub use criteria::FilterCriteria;
pub use matcher::ItemMatcher;
pub use modifier::{combined_mods, ModQuery, ModRequirement};
pub use sockets::{LinkHistogram, MAX_LINK_GROUPS};
