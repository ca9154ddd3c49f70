pub mod cache;
pub mod candidate;
pub mod chain;
pub mod error;
mod fetch;
pub mod normalize;
pub mod service;
pub mod sources;

pub use cache::DrawCache;
pub use candidate::RawDrawCandidate;
pub use chain::SourceChain;
pub use error::FetchError;
pub use normalize::normalize_candidate;
pub use service::{DrawOrigin, DrawService, FetchedDraw};
pub use sources::{DrawSource, SampleDraw};
