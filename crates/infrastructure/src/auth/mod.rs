//! Authentication adapters.

mod refresher;

pub use refresher::HttpTokenRefresher;
