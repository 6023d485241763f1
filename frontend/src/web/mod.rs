//! Browser-side implementations of the core seams, plus the History-based router.

mod dialog;
mod http;
pub mod router;
mod storage;

pub use dialog::confirm;
pub use http::FetchHttpClient;
pub use storage::{BrowserTokenStore, on_storage_change};
