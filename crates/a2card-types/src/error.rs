use thiserror::Error;

/// Errors raised while reading a component graph payload.
///
/// Conversion itself never fails; these only cover getting a graph out of
/// raw text in the first place.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid component graph JSON: {0}")]
    InvalidJson(String),

    #[error("component graph payload is empty")]
    Empty,
}

/// Errors related to loading an explicitly named config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse config '{path}': {reason}")]
    Parse { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_display() {
        let err = GraphError::InvalidJson("expected value at line 1 column 1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid component graph JSON: expected value at line 1 column 1"
        );
        assert_eq!(GraphError::Empty.to_string(), "component graph payload is empty");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            path: "/tmp/config.toml".to_string(),
            reason: "bad key".to_string(),
        };
        assert!(err.to_string().contains("/tmp/config.toml"));
        assert!(err.to_string().contains("bad key"));
    }
}
