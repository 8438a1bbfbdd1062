//! Hand-authored HTTP API documentation rendered to Markdown.
//!
//! Routes are declared with a fluent builder and collected by a document
//! generator that renders them, with a table of contents, into a single
//! Markdown file.
//!
//! ## Core Types
//!
//! - [`Route`] - Everything documented about one endpoint
//! - [`ApiDocGenerator`] - Document metadata plus the ordered route list
//! - [`RestMethod`] - The HTTP verb of a route
//!
//! ## Route Details
//!
//! - [`HeaderParam`], [`QueryParam`], [`PathParam`], [`BodyParam`] - Request parameters
//! - [`Response`] - A status code with an optional JSON example
//! - [`Auth`] - The authentication scheme a route requires
//!
//! ## Timestamps
//!
//! - [`Clock`] - Source of the footer timestamp
//! - [`SystemClock`] / [`FixedClock`] - Wall-clock and pinned implementations
//!
//! ## Examples
//!
//! ```rust,no_run
//! use apidoc_lib::{ApiDocGenerator, Auth, BodyParam, Response, RestMethod, Route};
//! use serde_json::json;
//!
//! let create_user = Route::new(RestMethod::Post, "/users")
//!     .with_title("Create New User")
//!     .require_auth(Auth::default().with_description("Admin access token required"))
//!     .add_body_param(BodyParam::new("name", "string").required().with_example("John Doe"))
//!     .add_response(Response::new(201, "User Created").with_example(json!({"id": 123})));
//!
//! let written = ApiDocGenerator::new()
//!     .with_title("My Awesome API")
//!     .add_route(create_user)
//!     .generate("docs/api-documentation.md");
//! assert!(written);
//! ```

mod clock;
mod error;
mod generator;
mod markdown;
mod method;
mod params;
mod route;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{GenerateError, ParseMethodError};
pub use generator::{anchor, ApiDocGenerator, DEFAULT_OUTPUT_PATH};
pub use method::RestMethod;
pub use params::{Auth, BodyParam, HeaderParam, PathParam, QueryParam, Response};
pub use route::Route;
