pub mod client;
pub mod parse;
pub mod retry;
pub mod words;

pub use client::FreeDictionaryClient;
pub use retry::RetryingLookup;
pub use words::COMMON_WORDS;
