//! Client for the Runn project-management REST API.
//!
//! - **transport**: the [`Transport`] seam and its reqwest implementation
//! - **client**: [`RunnClient`], request + lazy pagination + lookups
//! - **page**: the tagged [`Page`] response shape and [`StopRule`]
//! - **models**: small typed projections (projects, people)

mod client;
mod credential;
mod error;
mod models;
mod page;
mod transport;

#[cfg(test)]
pub(crate) mod testing;


pub use client::{Collection, DEFAULT_PAGE_SIZE, RunnClient};
pub use credential::Credential;
pub use error::{RunnError, RunnResult};
pub use models::{Person, Project, display_name};
pub use page::{Page, StopRule};
pub use transport::{ApiRequest, HttpMethod, HttpTransport, Transport, query_pairs};
