use kube::core::ErrorResponse;

/// Utility enum that covers all possible errors during a submission pass
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cluster configuration could not be resolved or the connection failed
    /// before the API server answered.
    #[error("Failed to connect to Kubernetes cluster: {source}")]
    ConnectionError { source: kube::Error },

    /// The API server answered and rejected the create request.
    #[error("Kubernetes rejected the pod ({}): {}", .source.code, .source.message)]
    ApiError { source: ErrorResponse },

    #[error("JSON render error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("YAML render error: {source}")]
    YamlError {
        #[from]
        source: serde_yaml::Error,
    },
}
