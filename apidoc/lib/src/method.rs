//! HTTP method types for documented routes.

use strum::{Display, EnumIter, EnumString};

use crate::error::ParseMethodError;

/// HTTP methods a [`Route`](crate::Route) can document.
///
/// The verb always displays in upper case regardless of how it was
/// spelled when parsed.
///
/// ## Examples
///
/// ```rust
/// use apidoc_lib::RestMethod;
///
/// let parsed = RestMethod::from_verb("post").unwrap();
/// assert_eq!(parsed, RestMethod::Post);
/// assert_eq!(parsed.to_string(), "POST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
#[strum(ascii_case_insensitive)]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP PATCH - Partially update a resource.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
    /// HTTP HEAD - Retrieve headers only.
    Head,
    /// HTTP OPTIONS - Query supported methods.
    Options,
    /// HTTP TRACE - Echo the request for debugging.
    Trace,
}

impl RestMethod {
    /// Parses a verb in any letter case, ignoring surrounding whitespace.
    ///
    /// ## Errors
    ///
    /// Returns [`ParseMethodError`] when the verb is not a known HTTP method.
    pub fn from_verb(verb: &str) -> Result<Self, ParseMethodError> {
        verb.trim()
            .parse()
            .map_err(|_| ParseMethodError(verb.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Post.to_string(), "POST");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(RestMethod::from_verb("get").unwrap(), RestMethod::Get);
        assert_eq!(RestMethod::from_verb("Patch").unwrap(), RestMethod::Patch);
        assert_eq!(RestMethod::from_verb(" DELETE ").unwrap(), RestMethod::Delete);
    }

    #[test]
    fn test_parse_unknown_verb() {
        let err = RestMethod::from_verb("FETCH").unwrap_err();
        assert_eq!(err, ParseMethodError("FETCH".to_string()));
        assert_eq!(err.to_string(), "unknown HTTP method: FETCH");
    }

    #[test]
    fn test_every_variant_round_trips_through_display() {
        let methods: Vec<_> = RestMethod::iter().collect();
        assert_eq!(methods.len(), 8);

        for method in methods {
            let lower = method.to_string().to_lowercase();
            assert_eq!(RestMethod::from_verb(&lower).unwrap(), method);
        }
    }
}
