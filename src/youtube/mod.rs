pub mod utils;

// Re-export commonly used functions
pub use utils::{build_watch_url, resolve};
