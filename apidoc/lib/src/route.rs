//! Documentation builder for a single HTTP endpoint.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::error::ParseMethodError;
use crate::markdown::{cell, json_block, table_header, value_cell, yes_no};
use crate::method::RestMethod;
use crate::params::{Auth, BodyParam, HeaderParam, PathParam, QueryParam, Response};

/// Everything documented about one endpoint.
///
/// Method and path are fixed at construction. All other facts accumulate
/// through chained calls in the order they are made, and that order is the
/// rendering order. Nothing is de-duplicated: adding two headers with the
/// same name renders two rows.
///
/// ## Examples
///
/// ```rust
/// use apidoc_lib::{QueryParam, Response, RestMethod, Route};
/// use serde_json::json;
///
/// let route = Route::new(RestMethod::Get, "/users")
///     .with_title("Get All Users")
///     .add_query_param(QueryParam::new("page", "integer").with_default(1))
///     .add_response(Response::new(200, "Success").with_example(json!({"data": []})));
///
/// let md = route.to_markdown();
/// assert!(md.starts_with("## Get All Users\n"));
/// assert!(md.contains("**Endpoint:** `GET /users`"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    method: RestMethod,
    path: String,
    title: Option<String>,
    description: Option<String>,
    headers: Vec<HeaderParam>,
    query_params: Vec<QueryParam>,
    path_params: Vec<PathParam>,
    body_params: Vec<BodyParam>,
    responses: Vec<Response>,
    auth: Option<Auth>,
}

impl Route {
    /// Creates a route for `method` on `path`.
    ///
    /// The path is kept literally, including `{name}` placeholders.
    pub fn new(method: RestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            title: None,
            description: None,
            headers: Vec::new(),
            query_params: Vec::new(),
            path_params: Vec::new(),
            body_params: Vec::new(),
            responses: Vec::new(),
            auth: None,
        }
    }

    /// Creates a route from a textual verb in any letter case.
    ///
    /// ## Errors
    ///
    /// Returns [`ParseMethodError`] if `method` is not a known HTTP verb.
    pub fn parse(method: &str, path: impl Into<String>) -> Result<Self, ParseMethodError> {
        Ok(Self::new(RestMethod::from_verb(method)?, path))
    }

    /// Sets the display title, replacing any previous one.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description paragraph, replacing any previous one.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_header(mut self, header: HeaderParam) -> Self {
        self.headers.push(header);
        self
    }

    pub fn add_query_param(mut self, param: QueryParam) -> Self {
        self.query_params.push(param);
        self
    }

    pub fn add_path_param(mut self, param: PathParam) -> Self {
        self.path_params.push(param);
        self
    }

    pub fn add_body_param(mut self, param: BodyParam) -> Self {
        self.body_params.push(param);
        self
    }

    pub fn add_response(mut self, response: Response) -> Self {
        self.responses.push(response);
        self
    }

    /// Marks the route as authenticated.
    ///
    /// Calling this again replaces the earlier scheme rather than adding a
    /// second one.
    pub fn require_auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn method(&self) -> RestMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the explicit title, or `"{METHOD} {path}"` when none was set.
    pub fn title(&self) -> Cow<'_, str> {
        match &self.title {
            Some(title) => Cow::Borrowed(title),
            None => Cow::Owned(format!("{} {}", self.method, self.path)),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn headers(&self) -> &[HeaderParam] {
        &self.headers
    }

    pub fn query_params(&self) -> &[QueryParam] {
        &self.query_params
    }

    pub fn path_params(&self) -> &[PathParam] {
        &self.path_params
    }

    pub fn body_params(&self) -> &[BodyParam] {
        &self.body_params
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn auth(&self) -> Option<&Auth> {
        self.auth.as_ref()
    }

    pub fn auth_required(&self) -> bool {
        self.auth.is_some()
    }

    /// Renders this route as a self-contained Markdown section.
    ///
    /// Sections are emitted in a fixed order and only when they have
    /// content. The output depends only on the route's current state.
    pub fn to_markdown(&self) -> String {
        let mut md = format!("## {}\n\n", self.title());

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            md.push_str(&format!("{description}\n\n"));
        }

        md.push_str(&format!("**Endpoint:** `{} {}`\n\n", self.method, self.path));

        self.render_auth(&mut md);
        self.render_headers(&mut md);
        self.render_path_params(&mut md);
        self.render_query_params(&mut md);
        self.render_body(&mut md);
        self.render_responses(&mut md);

        md.push_str("---\n\n");
        md
    }

    fn render_auth(&self, md: &mut String) {
        let Some(auth) = &self.auth else {
            return;
        };

        md.push_str("### Authentication\n\n");
        md.push_str("This endpoint requires authentication.\n\n");
        md.push_str(&format!("- **Type:** {}\n", auth.kind));
        if !auth.description.is_empty() {
            md.push_str(&format!("- **Description:** {}\n", auth.description));
        }
        md.push('\n');
    }

    fn render_headers(&self, md: &mut String) {
        if self.headers.is_empty() && self.auth.is_none() {
            return;
        }

        md.push_str("### Headers\n\n");
        md.push_str(&table_header(&["Name", "Type", "Required", "Description"]));

        if let Some(auth) = &self.auth {
            md.push_str(&format!(
                "| Authorization | string | Yes | {} token |\n",
                cell(&auth.kind)
            ));
        }

        for header in &self.headers {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                cell(&header.name),
                cell(&header.ty),
                yes_no(header.required),
                cell(&header.description)
            ));
        }
        md.push('\n');
    }

    fn render_path_params(&self, md: &mut String) {
        if self.path_params.is_empty() {
            return;
        }

        md.push_str("### Path Parameters\n\n");
        md.push_str(&table_header(&["Name", "Type", "Description"]));
        for param in &self.path_params {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                cell(&param.name),
                cell(&param.ty),
                cell(&param.description)
            ));
        }
        md.push('\n');
    }

    fn render_query_params(&self, md: &mut String) {
        if self.query_params.is_empty() {
            return;
        }

        md.push_str("### Query Parameters\n\n");
        md.push_str(&table_header(&["Name", "Type", "Required", "Default", "Description"]));
        for param in &self.query_params {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                cell(&param.name),
                cell(&param.ty),
                yes_no(param.required),
                value_cell(param.default.as_ref()),
                cell(&param.description)
            ));
        }
        md.push('\n');
    }

    fn render_body(&self, md: &mut String) {
        if self.body_params.is_empty() {
            return;
        }

        md.push_str("### Request Body\n\n");
        md.push_str(&table_header(&["Name", "Type", "Required", "Description", "Example"]));
        for param in &self.body_params {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                cell(&param.name),
                cell(&param.ty),
                yes_no(param.required),
                cell(&param.description),
                value_cell(param.example.as_ref())
            ));
        }
        md.push('\n');

        md.push_str("**Example Request:**\n\n");
        md.push_str(&json_block(&self.example_body()));
    }

    /// Collects every body field that has an example into one object.
    ///
    /// A repeated name keeps its first position and takes the last value.
    fn example_body(&self) -> Value {
        let mut body = Map::new();
        for param in &self.body_params {
            if let Some(example) = &param.example {
                body.insert(param.name.clone(), example.clone());
            }
        }
        Value::Object(body)
    }

    fn render_responses(&self, md: &mut String) {
        if self.responses.is_empty() {
            return;
        }

        md.push_str("### Responses\n\n");
        for response in &self.responses {
            md.push_str(&format!(
                "#### {} - {}\n\n",
                response.status_code, response.description
            ));
            if let Some(example) = &response.example {
                md.push_str(&json_block(example));
            }
        }
    }
}
