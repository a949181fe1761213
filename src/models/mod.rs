pub mod item;
pub mod match_result;
pub mod stash;

pub use item::{
    Item,
    Property,
    Socket,
};

pub use match_result::{
    MatchResult,
    SocketSummary,
};

pub use stash::{
    StashFeed,
    StashTab,
};
