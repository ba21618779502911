pub mod fixture;
pub mod idx;

pub use fixture::Fixture;
