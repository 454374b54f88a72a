//! HTTP client SDK for the Uber API.
//!
//! This crate provides a typed client for the Uber REST endpoints. Calls
//! return an [`UberResponse`] envelope: `data` holds the decoded resource
//! on success, `error` holds the remote error when the API rejected the
//! call. `Err` is reserved for local failures (transport, decoding,
//! configuration).
//!
//! # Example
//!
//! ```no_run
//! use uber_client::{Credential, UberClient};
//!
//! # async fn example() -> uber_client::Result<()> {
//! // Server-token client for public resources
//! let client = UberClient::new(Credential::server("server-token"))?;
//!
//! // Products available in Sydney
//! let response = client.products().list(-33.8670522, 151.1957362).await?;
//! if let Some(collection) = response.data {
//!     for product in collection.products {
//!         println!("{}: {}", product.display_name, product.description);
//!     }
//! }
//!
//! // Price estimates for a trip
//! let response = client
//!     .estimates()
//!     .price(-33.8670522, 151.1957362, -33.8841366, 151.2149428)
//!     .await?;
//! if let Some(error) = response.error {
//!     eprintln!("estimate failed: {}", error);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Products**: Ride products available at a location
//! - **Estimates**: Price ranges and pickup times
//! - **Promotions**: Signup promotions for a trip
//! - **User**: Profile and trip history of the authenticated user
//! - **Requests**: Create, inspect, and cancel trip requests
//! - **Sandbox**: The same surface against the sandbox host, plus forced
//!   request status transitions

pub mod api;
pub mod client;
pub mod credential;
pub mod error;
pub mod response;
pub mod sandbox;
pub mod types;

pub use client::{ClientBuilder, UberClient, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use credential::{Credential, CredentialKind};
pub use error::{Error, Result};
pub use response::{UberError, UberResponse};
pub use sandbox::UberSandboxClient;
pub use types::*;

// Re-export API parameter types that are commonly constructed by callers
pub use api::{RequestParams, TimeEstimateOptions};
