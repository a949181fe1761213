mod stash_api;

pub use stash_api::{
    FetchConfig,
    StashApiClient,
    DEFAULT_FEED_URL,
    DEFAULT_TIMEOUT_SECS,
};
