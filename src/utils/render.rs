use k8s_openapi::api::core::v1::Pod;

use crate::utils::error::Error;

/// Wire format for the printed pod manifest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    /// Maps the optional format argument to a format. Only the literal `yaml`
    /// selects YAML; any other value, or none at all, falls back to JSON.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("yaml") => OutputFormat::Yaml,
            _ => OutputFormat::Json,
        }
    }
}

/// Renders the pod manifest in the requested format. Takes the pod by shared
/// reference; rendering never mutates it.
pub fn render(pod: &Pod, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(pod)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(pod)?),
    }
}
