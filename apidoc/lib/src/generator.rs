//! Document-level metadata, rendering, and persistence.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::GenerateError;
use crate::route::Route;

/// Output path used by [`ApiDocGenerator::generate_default`].
pub const DEFAULT_OUTPUT_PATH: &str = "api-documentation.md";

const DEFAULT_TITLE: &str = "API Documentation";
const DEFAULT_VERSION: &str = "1.0.0";

/// Footer timestamp format, e.g. `2024-01-15 10:30:00`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts heading text into an in-document link anchor.
///
/// Every maximal run of characters outside `[A-Za-z0-9]` becomes a single
/// `-` and the result is lower-cased. Leading and trailing hyphens are kept
/// and duplicate anchors are not disambiguated.
///
/// ## Examples
///
/// ```rust
/// use apidoc_lib::anchor;
///
/// assert_eq!(anchor("Get All Users"), "get-all-users");
/// assert_eq!(anchor("Create -- New User"), "create-new-user");
/// ```
pub fn anchor(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }

    slug
}

/// Builder for a complete Markdown API reference.
///
/// Holds the document metadata and an ordered list of [`Route`]s. Route
/// order drives both the table of contents and the body. The footer
/// timestamp comes from the generator's [`Clock`].
///
/// ## Examples
///
/// ```rust
/// use apidoc_lib::{ApiDocGenerator, RestMethod, Route};
///
/// let doc = ApiDocGenerator::new()
///     .with_title("My Awesome API")
///     .with_version("2.0.0")
///     .with_base_url("https://api.example.com/v2/")
///     .add_route(Route::new(RestMethod::Get, "/users").with_title("Get All Users"));
///
/// let md = doc.render();
/// assert!(md.starts_with("# My Awesome API\n\n"));
/// assert!(md.contains("**Base URL:** `https://api.example.com/v2`"));
/// assert!(md.contains("1. [Get All Users](#get-all-users)"));
/// ```
#[derive(Debug, Clone)]
pub struct ApiDocGenerator<C = SystemClock> {
    title: String,
    description: String,
    version: String,
    base_url: String,
    routes: Vec<Route>,
    clock: C,
}

impl ApiDocGenerator<SystemClock> {
    /// Creates a generator with default metadata, timestamped by the local clock.
    pub fn new() -> Self {
        Self::with_clock_source(SystemClock)
    }
}

impl Default for ApiDocGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ApiDocGenerator<C> {
    /// Creates a generator with default metadata and the given clock.
    pub fn with_clock_source(clock: C) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            version: DEFAULT_VERSION.to_string(),
            base_url: String::new(),
            routes: Vec::new(),
            clock,
        }
    }

    /// Replaces the clock, keeping all metadata and routes.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> ApiDocGenerator<C2> {
        ApiDocGenerator {
            title: self.title,
            description: self.description,
            version: self.version,
            base_url: self.base_url,
            routes: self.routes,
            clock,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the base URL with any trailing `/` characters removed.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    /// Appends a route to the end of the document.
    pub fn add_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Appends several routes, preserving their order.
    pub fn add_routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.routes.extend(routes);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the registered routes in document order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Renders the full document to a string without touching the filesystem.
    pub fn render(&self) -> String {
        debug!(routes = self.routes.len(), title = %self.title, "rendering API documentation");

        let mut md = format!("# {}\n\n", self.title);

        if !self.description.is_empty() {
            md.push_str(&format!("{}\n\n", self.description));
        }

        md.push_str(&format!("**Version:** {}\n\n", self.version));

        if !self.base_url.is_empty() {
            md.push_str(&format!("**Base URL:** `{}`\n\n", self.base_url));
        }

        md.push_str("---\n\n");

        if !self.routes.is_empty() {
            md.push_str("## Table of Contents\n\n");
            for (index, route) in self.routes.iter().enumerate() {
                let title = route.title();
                md.push_str(&format!("{}. [{}](#{})\n", index + 1, title, anchor(&title)));
            }
            md.push_str("\n---\n\n");
        }

        for route in &self.routes {
            md.push_str(&route.to_markdown());
        }

        md.push_str("\n---\n\n");
        md.push_str(&format!(
            "*Documentation generated on {}*\n",
            self.clock.now().format(TIMESTAMP_FORMAT)
        ));

        md
    }

    /// Renders the document and writes it to `output_path`.
    ///
    /// Missing parent directories are created first. An existing file is
    /// overwritten. The write is not atomic: a failure part-way may leave a
    /// truncated file behind.
    ///
    /// ## Errors
    ///
    /// Returns [`GenerateError::CreateDir`] if the parent directory cannot be
    /// created and [`GenerateError::Write`] if the file cannot be written.
    pub fn write_to(&self, output_path: impl AsRef<Path>) -> Result<PathBuf, GenerateError> {
        let path = output_path.as_ref();
        let markdown = self.render();

        ensure_parent_dir(path)?;

        fs::write(path, &markdown).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), bytes = markdown.len(), "wrote API documentation");
        Ok(path.to_path_buf())
    }

    /// Writes the document to `output_path`, reporting success as a boolean.
    ///
    /// Failures are logged at `warn` level and turned into `false`; they
    /// never panic. Use [`write_to`](Self::write_to) to inspect the error.
    pub fn generate(&self, output_path: impl AsRef<Path>) -> bool {
        match self.write_to(output_path) {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "API documentation was not written");
                false
            }
        }
    }

    /// Writes the document to [`DEFAULT_OUTPUT_PATH`] in the working directory.
    pub fn generate_default(&self) -> bool {
        self.generate(DEFAULT_OUTPUT_PATH)
    }
}

/// Creates the parent directory of `path` when it is missing.
///
/// A bare file name or a `./`-relative one has nothing to create.
fn ensure_parent_dir(path: &Path) -> Result<(), GenerateError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent == Path::new(".") || parent.is_dir() {
        return Ok(());
    }

    debug!(dir = %parent.display(), "creating output directory");
    create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn create_dir_all(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(0o755).create(dir)
}

#[cfg(not(unix))]
fn create_dir_all(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}
