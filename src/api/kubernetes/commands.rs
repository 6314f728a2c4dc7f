//! Kubernetes command handlers

use log::debug;

use super::models::CreateKubernetesRequest;
use crate::api::SanntiClient;
use crate::cli::{Cli, CreateClusterArgs, DeleteArgs, KubernetesAction};
use crate::error::Result;
use crate::output::kubernetes::{cluster_row, version_row, CLUSTER_HEADERS, VERSION_HEADERS};
use crate::output::{self, Items};
use crate::ui::{confirm_action, print_info, print_success, with_spinner};

/// Run a `k8s` subcommand
pub async fn run_kubernetes_command(
    client: &SanntiClient,
    cli: &Cli,
    action: &KubernetesAction,
) -> Result<()> {
    let format = cli.output_format()?;
    let region = client.effective_region(cli.region.as_deref());

    match action {
        KubernetesAction::Versions => {
            let versions = with_spinner(
                "Fetching Kubernetes versions...",
                cli.batch,
                client.list_kubernetes_versions(region.as_deref()),
            )
            .await
            .map_err(|e| e.context("failed to list Kubernetes versions"))?;

            if versions.is_empty() {
                print_info("No Kubernetes versions found");
                return Ok(());
            }

            output::print(Items::Many(&versions), format, VERSION_HEADERS, version_row)
        }
        KubernetesAction::List => {
            let clusters = with_spinner(
                "Fetching Kubernetes clusters...",
                cli.batch,
                client.list_kubernetes_clusters(),
            )
            .await
            .map_err(|e| e.context("failed to list Kubernetes clusters"))?;
            debug!("Found {} clusters", clusters.len());

            if clusters.is_empty() {
                print_info("No Kubernetes clusters found");
                return Ok(());
            }

            output::print(Items::Many(&clusters), format, CLUSTER_HEADERS, cluster_row)
        }
        KubernetesAction::Get { uuid } => {
            let cluster = with_spinner(
                "Fetching Kubernetes cluster...",
                cli.batch,
                client.get_kubernetes_cluster(uuid),
            )
            .await
            .map_err(|e| e.context("failed to get Kubernetes cluster"))?;

            output::print(Items::One(&cluster), format, CLUSTER_HEADERS, cluster_row)
        }
        KubernetesAction::Create(args) => {
            create_cluster(client, cli, args, region.as_deref().unwrap_or_default()).await
        }
        KubernetesAction::Delete(args) => delete_cluster(client, cli, args).await,
    }
}

async fn create_cluster(
    client: &SanntiClient,
    cli: &Cli,
    args: &CreateClusterArgs,
    region: &str,
) -> Result<()> {
    let request = CreateKubernetesRequest {
        name: args.name.clone(),
        description: args.description.clone(),
        region: region.to_string(),
        kubernetes_version_uuid: args.kubernetes_version.clone(),
        compute_offering_uuid: args.size.clone(),
        network_uuid: args.network.clone(),
        size: args.nodes,
        control_nodes: args.control_nodes,
        ha_enabled: args.ha,
        ssh_key_name: args.ssh_key.clone(),
        node_root_disk_size: args.disk_size,
        ..Default::default()
    };

    if !region.is_empty() {
        print_info(&format!(
            "Creating Kubernetes cluster '{}' in region '{}'...",
            args.name, region
        ));
    }

    let cluster = with_spinner(
        "Creating Kubernetes cluster...",
        cli.batch,
        client.create_kubernetes_cluster(request),
    )
    .await
    .map_err(|e| e.context("failed to create Kubernetes cluster"))?;

    print_success(&format!(
        "Cluster created: {} (UUID: {})",
        cluster.name, cluster.uuid
    ));
    Ok(())
}

async fn delete_cluster(client: &SanntiClient, cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let prompt = format!(
        "Delete Kubernetes cluster {}? This cannot be undone.",
        args.uuid
    );
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        print_info("Aborted");
        return Ok(());
    }

    print_info(&format!("Deleting Kubernetes cluster {}...", args.uuid));
    with_spinner(
        "Deleting Kubernetes cluster...",
        cli.batch,
        client.delete_kubernetes_cluster(&args.uuid),
    )
    .await
    .map_err(|e| e.context("failed to delete Kubernetes cluster"))?;
    print_success(&format!("Cluster {} deleted successfully", args.uuid));
    Ok(())
}
