pub mod error;
pub mod lookup;
pub mod preprocess;
pub mod selector;
pub mod session;
pub mod stats;
pub mod store;
pub mod study;
pub mod verdict;
pub mod weight;

pub use error::{LookupError, SelectError, StoreError};
pub use lookup::WordLookup;
pub use selector::WordSelector;
pub use store::WordStore;
