//! Remote content retrievers.

mod github;
mod memory;
pub mod payload;

pub use github::{DEFAULT_TIMEOUT, GithubRetriever};
pub use memory::MemoryRetriever;
pub use payload::PayloadParser;
