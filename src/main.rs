use clap::Parser;

mod controllers;
mod models;
mod utils;

use controllers::pod::PodController;
use models::workload;
use utils::error::Error;
use utils::render::{render, OutputFormat};

/// Builds the `test-pod` manifest, prints it, and creates it on the current
/// cluster unless `--dry-run` is given.
#[derive(Parser)]
#[command(version, about = "Builds a test pod manifest and submits it to the cluster")]
struct Args {
    /// Output format for the printed manifest; the literal `yaml` selects
    /// YAML, anything else (or nothing) prints JSON
    format: Option<String>,

    /// Deployment environment, injected into the container as `ENV`
    #[arg(long, default_value = "production")]
    environment: String,

    /// Namespace to create the pod in; defaults to the current-context
    /// namespace of the resolved cluster configuration
    #[arg(long)]
    namespace: Option<String>,

    /// Build and print the manifest without contacting the cluster
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(error) = run(Args::parse()).await {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let pod = workload::build_pod(&args.environment);

    // The manifest goes to stdout before any cluster traffic; a failed
    // submission must not hide the object definition.
    let manifest = render(&pod, OutputFormat::from_arg(args.format.as_deref()))?;
    println!("{}", manifest);

    if args.dry_run {
        log::info!("dry run, skipping cluster submission");
        return Ok(());
    }

    let controller = PodController::try_default().await?;
    let namespace = controller.resolve_namespace(args.namespace.as_deref());
    log::debug!("creating pod in namespace {}", namespace);

    controller.create_pod(&pod, &namespace).await?;
    println!("Pod created!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_are_recognized_regardless_of_position() {
        let args = Args::parse_from(["podctl", "yaml", "--dry-run"]);
        assert!(args.dry_run);
        assert_eq!(args.format.as_deref(), Some("yaml"));
        assert_eq!(args.environment, "production");

        let args = Args::parse_from(["podctl", "--dry-run", "wide"]);
        assert!(args.dry_run);
        assert_eq!(args.format.as_deref(), Some("wide"));

        let args = Args::parse_from(["podctl"]);
        assert!(!args.dry_run);
        assert_eq!(args.format, None);
        assert_eq!(args.namespace, None);
    }

    #[test]
    fn dry_run_completes_without_a_cluster() {
        let args = Args::parse_from(["podctl", "yaml", "--dry-run", "--environment", "staging"]);

        // Returns before any client is built, so no cluster is needed.
        tokio_test::block_on(run(args)).unwrap();
    }
}
