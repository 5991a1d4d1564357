//! Error types for route table construction.

use thiserror::Error;

/// Primary error type for route table construction.
///
/// Malformed configuration surfaces here, at the construction step; the
/// resolution path never fails and never panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    /// Pattern did not start with `/`.
    #[error("route pattern must be absolute")]
    RelativePattern {
        /// Offending pattern as declared.
        pattern: String,
    },
    /// Pattern contained a `:` segment with no parameter name.
    #[error("route pattern has an empty parameter name")]
    EmptyParameter {
        /// Offending pattern as declared.
        pattern: String,
    },
    /// The same path pattern was declared twice.
    #[error("duplicate route path")]
    DuplicatePath {
        /// Path declared more than once.
        path: String,
    },
    /// The same symbolic name was assigned to two routes.
    #[error("duplicate route name")]
    DuplicateName {
        /// Name assigned more than once.
        name: String,
    },
}

/// Result wrapper for route table operations.
pub type RouteTableResult<T> = Result<T, RouteTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_short_messages() {
        let err = RouteTableError::DuplicatePath {
            path: "/round".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate route path");

        let err = RouteTableError::RelativePattern {
            pattern: "round".to_string(),
        };
        assert_eq!(err.to_string(), "route pattern must be absolute");
    }
}
