mod store;

pub use store::{ModelStore, StoreError, Target};
