mod types;

pub use types::{ContactCard, ShareLinks};
