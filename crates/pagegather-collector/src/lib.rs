pub mod client;
pub mod collect;
pub mod error;
pub mod export;
pub mod extract;
mod retry;

pub use client::ListingClient;
pub use collect::{CollectReport, Harvest, PageFailure};
pub use error::CollectError;
pub use export::write_csv;
pub use extract::Selectors;
