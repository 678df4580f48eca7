use async_graphql::ErrorExtensions;
use thiserror::Error;

/// The books-info exchange did not complete successfully
///
/// Every variant means "remote unavailable" to callers: none of them may
/// be read as "no authors or publishers found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("Books info service unreachable: {0}")]
    Transport(String),

    #[error("Books info service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed books info response: {0}")]
    Malformed(String),

    #[error("Books info service reported errors: {}", .0.join("; "))]
    Remote(Vec<String>),
}

impl LinkError {
    pub fn kind(&self) -> &'static str {
        match self {
            LinkError::Transport(_) => "TRANSPORT",
            LinkError::Status { .. } => "STATUS",
            LinkError::Malformed(_) => "MALFORMED",
            LinkError::Remote(_) => "REMOTE",
        }
    }
}

impl ErrorExtensions for LinkError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", "REMOTE_UNAVAILABLE");
            e.set("kind", self.kind());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_errors_joined_in_message() {
        let err = LinkError::Remote(vec!["first".into(), "second".into()]);
        assert_eq!(
            err.to_string(),
            "Books info service reported errors: first; second"
        );
    }

    #[test]
    fn test_status_display() {
        let err = LinkError::Status { status: 502 };
        assert_eq!(err.to_string(), "Books info service returned HTTP 502");
        assert_eq!(err.kind(), "STATUS");
    }

    #[test]
    fn test_graphql_extensions() {
        let err = LinkError::Transport("connection refused".into()).extend();
        let extensions = err.extensions.expect("extensions set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("REMOTE_UNAVAILABLE"))
        );
        assert_eq!(
            extensions.get("kind"),
            Some(&async_graphql::Value::from("TRANSPORT"))
        );
    }
}
