// Adapters layer: concrete patent record sources (live registry, saved responses).

pub mod file;
pub mod http;
pub mod pair;

pub use file::JsonFileSource;
pub use http::{PairClient, DEFAULT_PAIR_ENDPOINT};
