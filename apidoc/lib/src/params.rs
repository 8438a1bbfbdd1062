//! Descriptors for the parameters, responses, and auth scheme of a route.
//!
//! Each descriptor starts from its required fields via `new` and picks up
//! optional fields through chained `with_*` calls. Examples and defaults are
//! `Option<Value>`: `None` means "not given", while `Some(Value::Null)` is a
//! genuine `null` example.

use serde_json::Value;

/// A request header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderParam {
    pub name: String,
    /// Declared type, e.g. `string`.
    pub ty: String,
    pub required: bool,
    pub description: String,
}

impl HeaderParam {
    /// Creates an optional header with an empty description.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
            description: String::new(),
        }
    }

    /// Marks the header as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A query-string parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParam {
    pub name: String,
    pub ty: String,
    pub required: bool,
    pub description: String,
    /// Value used when the client omits the parameter.
    pub default: Option<Value>,
}

impl QueryParam {
    /// Creates an optional query parameter with no default.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
            description: String::new(),
            default: None,
        }
    }

    /// Marks the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A `{name}` placeholder segment of the route path.
///
/// Path segments are always present, so there is no required flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PathParam {
    pub name: String,
    pub ty: String,
    pub description: String,
}

impl PathParam {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A top-level field of the JSON request body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyParam {
    pub name: String,
    pub ty: String,
    pub required: bool,
    pub description: String,
    /// Sample value, also collected into the example request body.
    pub example: Option<Value>,
}

impl BodyParam {
    /// Creates an optional body field with no example.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
            description: String::new(),
            example: None,
        }
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the example value. `Value::Null` is kept as an explicit `null`.
    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// One documented response of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status code. Any value is accepted, standard or not.
    pub status_code: u16,
    pub description: String,
    pub example: Option<Value>,
}

impl Response {
    /// Creates a response without an example payload.
    pub fn new(status_code: u16, description: impl Into<String>) -> Self {
        Self {
            status_code,
            description: description.into(),
            example: None,
        }
    }

    /// Sets the example payload.
    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Authentication scheme required by a route.
///
/// The default is a `Bearer` token with no description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    /// Scheme name, e.g. `Bearer` or `Basic`.
    pub kind: String,
    pub description: String,
}

impl Auth {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Default for Auth {
    fn default() -> Self {
        Self::new("Bearer")
    }
}
