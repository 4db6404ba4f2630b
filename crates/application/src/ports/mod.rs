//! Ports implemented by the infrastructure layer.

mod clock;
mod credential_store;
mod refresher;
mod transport;

pub use clock::Clock;
pub use credential_store::{CredentialStore, CredentialStoreError};
pub use refresher::TokenRefresher;
pub use transport::{ApiResponse, ApiTransport, ProgressFn};
