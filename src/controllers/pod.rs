use k8s_openapi::api::core::v1::Pod;
use kube::api::PostParams;
use kube::{Api, Client};

use crate::utils::error::Error;

/// Submits pod manifests to the cluster. Holds the single client used for the
/// one create call a run performs; dropping the controller releases the
/// connection on every exit path.
pub struct PodController {
    client: Client,
}

impl PodController {
    /// Resolves cluster configuration via the standard discovery rules of the
    /// `kube` crate (kubeconfig file, in-cluster service account, environment
    /// overrides) and connects a client with it.
    pub async fn try_default() -> Result<Self, Error> {
        let client = Client::try_default()
            .await
            .map_err(|source| Error::ConnectionError { source })?;

        Ok(PodController { client })
    }

    /// Namespace the pod will be created in.
    ///
    /// # Arguments:
    /// - `namespace` - Explicit override; when `None` the current-context
    /// namespace of the connected client is used.
    pub fn resolve_namespace(&self, namespace: Option<&str>) -> String {
        match namespace {
            Some(namespace) => namespace.to_string(),
            None => self.client.default_namespace().to_string(),
        }
    }

    /// Issues exactly one create call for the pod against the given namespace.
    /// Nothing is retried; the server's answer is final.
    ///
    /// # Arguments:
    /// - `pod` - The manifest to create. Existence is not checked beforehand,
    /// a name conflict surfaces as an API rejection.
    /// - `namespace` - Namespace to create the pod in.
    pub async fn create_pod(&self, pod: &Pod, namespace: &str) -> Result<Pod, Error> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);

        api.create(&PostParams::default(), pod).await.map_err(classify)
    }
}

/// Splits `kube::Error` into rejections answered by the API server and
/// everything that failed before an answer arrived.
fn classify(error: kube::Error) -> Error {
    match error {
        kube::Error::Api(source) => Error::ApiError { source },
        source => Error::ConnectionError { source },
    }
}
