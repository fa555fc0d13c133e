#![allow(non_snake_case)]

// Core modules
pub mod error;
pub mod primes;
pub mod params;
pub mod filter;

// Line-oriented command adapter (set/add/search/print over a text stream)
pub mod script;

// Convenience re-exports
pub use error::FilterError;
pub use filter::BloomFilter;
pub use params::{compute_params, FilterParams};
pub use primes::PrimeSeq;
pub use script::Session;
