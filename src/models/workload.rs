use k8s_openapi::api::core::v1::{Container, EnvVar, Pod, PodSpec};
use kube::api::ObjectMeta;

pub const POD_NAME: &str = "test-pod";
pub const CONTAINER_NAME: &str = "test-container";
pub const CONTAINER_IMAGE: &str = "nginx";

/// Builds the pod manifest for the test workload: one `nginx` container with
/// the deployment environment injected as the `ENV` variable.
///
/// # Arguments:
/// - `environment` - Deployment environment label. Stored verbatim as the value
/// of `ENV`; no validation is performed, the empty string is accepted.
pub fn build_pod(environment: &str) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(POD_NAME.to_string()),
            ..ObjectMeta::default()
        },
        spec: Some(PodSpec {
            containers: vec![Container {
                name: CONTAINER_NAME.to_string(),
                image: Some(CONTAINER_IMAGE.to_string()),
                env: Some(vec![EnvVar {
                    name: "ENV".to_string(),
                    value: Some(environment.to_string()),
                    ..EnvVar::default()
                }]),
                ..Container::default()
            }],
            ..PodSpec::default()
        }),
        ..Pod::default()
    }
}
