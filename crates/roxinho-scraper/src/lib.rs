pub mod cascade;
pub mod classify;
pub mod client;
pub mod error;
pub mod extract;
pub mod marketplaces;
pub mod normalize;
pub mod platform;
pub mod price;
pub mod types;

pub use classify::classify;
pub use client::MarketplaceClient;
pub use error::{FailureKind, ScraperError};
pub use extract::{ExtractedProduct, ProductExtractor};
pub use normalize::normalize_product;
pub use platform::detect_platform;
pub use price::parse_price;
