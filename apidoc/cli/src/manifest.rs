//! YAML/JSON route manifests.
//!
//! A manifest describes the document metadata and routes declaratively and
//! is replayed through the `apidoc_lib` builders. YAML is a superset of
//! JSON, so `serde_yaml` reads both.

use std::path::Path;

use apidoc_lib::{
    ApiDocGenerator, Auth, BodyParam, HeaderParam, ParseMethodError, PathParam, QueryParam,
    Response, Route,
};
use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub base_url: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub auth: Option<AuthEntry>,
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
    #[serde(default)]
    pub path_params: Vec<PathEntry>,
    #[serde(default)]
    pub query_params: Vec<QueryEntry>,
    #[serde(default)]
    pub body_params: Vec<BodyEntry>,
    #[serde(default)]
    pub responses: Vec<ResponseEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthEntry {
    #[serde(rename = "type", default = "bearer")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "present")]
    pub default: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "present")]
    pub example: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseEntry {
    pub status: u16,
    pub description: String,
    #[serde(default, deserialize_with = "present")]
    pub example: Option<Value>,
}

fn bearer() -> String {
    "Bearer".to_string()
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl Manifest {
    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read manifest {}", path.display()))?;
        Self::parse(&text).wrap_err_with(|| format!("Invalid manifest {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Replays the manifest through the document builder.
    ///
    /// ## Errors
    ///
    /// Returns [`ParseMethodError`] for the first route with an unknown verb.
    pub fn into_generator(self) -> Result<ApiDocGenerator, ParseMethodError> {
        let mut doc = ApiDocGenerator::new();
        if let Some(title) = self.title {
            doc = doc.with_title(title);
        }
        if let Some(description) = self.description {
            doc = doc.with_description(description);
        }
        if let Some(version) = self.version {
            doc = doc.with_version(version);
        }
        if let Some(base_url) = self.base_url {
            doc = doc.with_base_url(base_url);
        }

        let routes = self
            .routes
            .into_iter()
            .map(RouteEntry::into_route)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(doc.add_routes(routes))
    }
}

impl RouteEntry {
    fn into_route(self) -> Result<Route, ParseMethodError> {
        let mut route = Route::parse(&self.method, self.path)?;

        if let Some(title) = self.title {
            route = route.with_title(title);
        }
        if let Some(description) = self.description {
            route = route.with_description(description);
        }
        if let Some(auth) = self.auth {
            route = route.require_auth(Auth::new(auth.kind).with_description(auth.description));
        }

        for h in self.headers {
            let mut header = HeaderParam::new(h.name, h.ty).with_description(h.description);
            if h.required {
                header = header.required();
            }
            route = route.add_header(header);
        }

        for p in self.path_params {
            route = route.add_path_param(PathParam::new(p.name, p.ty).with_description(p.description));
        }

        for q in self.query_params {
            let mut param = QueryParam::new(q.name, q.ty).with_description(q.description);
            if q.required {
                param = param.required();
            }
            if let Some(default) = q.default {
                param = param.with_default(default);
            }
            route = route.add_query_param(param);
        }

        for b in self.body_params {
            let mut param = BodyParam::new(b.name, b.ty).with_description(b.description);
            if b.required {
                param = param.required();
            }
            if let Some(example) = b.example {
                param = param.with_example(example);
            }
            route = route.add_body_param(param);
        }

        for r in self.responses {
            let mut response = Response::new(r.status, r.description);
            if let Some(example) = r.example {
                response = response.with_example(example);
            }
            route = route.add_response(response);
        }

        Ok(route)
    }
}
