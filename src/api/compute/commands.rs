//! Compute command handlers

use log::debug;

use super::models::CreateInstanceRequest;
use crate::api::SanntiClient;
use crate::cli::{Cli, ComputeAction, CreateInstanceArgs, DeleteArgs, OutputFormat};
use crate::error::Result;
use crate::output::compute::{
    instance_detail_row, instance_row, offering_row, template_row, INSTANCE_DETAIL_HEADERS,
    INSTANCE_HEADERS, OFFERING_HEADERS, TEMPLATE_HEADERS,
};
use crate::output::{self, Items};
use crate::ui::{confirm_action, print_info, print_success, with_spinner};

/// Run a `compute` subcommand
pub async fn run_compute_command(
    client: &SanntiClient,
    cli: &Cli,
    action: &ComputeAction,
) -> Result<()> {
    let format = cli.output_format()?;
    let region = client.effective_region(cli.region.as_deref());
    let region = region.as_deref();

    match action {
        ComputeAction::List => list_instances(client, cli, format, region).await,
        ComputeAction::Get { uuid } => get_instance(client, cli, format, uuid, region).await,
        ComputeAction::Create(args) => create_instance(client, cli, args, region).await,
        ComputeAction::Start { uuid } => start_instance(client, cli, uuid).await,
        ComputeAction::Stop { uuid } => stop_instance(client, cli, uuid).await,
        ComputeAction::Delete(args) => delete_instance(client, cli, args).await,
        ComputeAction::Images => list_images(client, cli, format, region).await,
        ComputeAction::Sizes => list_sizes(client, cli, format, region).await,
    }
}

async fn list_instances(
    client: &SanntiClient,
    cli: &Cli,
    format: OutputFormat,
    region: Option<&str>,
) -> Result<()> {
    let instances = with_spinner(
        "Fetching compute instances...",
        cli.batch,
        client.list_instances(region),
    )
    .await
    .map_err(|e| e.context("failed to list instances"))?;
    debug!("Found {} instances", instances.len());

    if instances.is_empty() {
        print_info("No compute instances found");
        return Ok(());
    }

    output::print(Items::Many(&instances), format, INSTANCE_HEADERS, instance_row)
}

async fn get_instance(
    client: &SanntiClient,
    cli: &Cli,
    format: OutputFormat,
    uuid: &str,
    region: Option<&str>,
) -> Result<()> {
    let instance = with_spinner(
        "Fetching compute instance...",
        cli.batch,
        client.get_instance(uuid, region),
    )
    .await
    .map_err(|e| e.context("failed to get instance"))?;

    output::print(
        Items::One(&instance),
        format,
        INSTANCE_DETAIL_HEADERS,
        instance_detail_row,
    )
}

async fn create_instance(
    client: &SanntiClient,
    cli: &Cli,
    args: &CreateInstanceArgs,
    region: Option<&str>,
) -> Result<()> {
    let region = region.unwrap_or_default();
    let request = CreateInstanceRequest {
        name: args.name.clone(),
        template_uuid: args.image.clone(),
        compute_offering_uuid: args.size.clone(),
        network_uuid: args.network.clone(),
        region: region.to_string(),
        root_disk_size: args.disk_size,
        ssh_key_name: args.ssh_key.clone(),
        security_group_name: args.security_group.clone(),
        ..Default::default()
    };

    if !region.is_empty() {
        print_info(&format!(
            "Creating compute instance '{}' in region '{}'...",
            args.name, region
        ));
    }

    let instance = with_spinner(
        "Creating compute instance...",
        cli.batch,
        client.create_instance(request),
    )
    .await
    .map_err(|e| e.context("failed to create instance"))?;

    print_success(&format!(
        "Instance created: {} (UUID: {})",
        instance.name, instance.uuid
    ));
    Ok(())
}

async fn start_instance(client: &SanntiClient, cli: &Cli, uuid: &str) -> Result<()> {
    print_info(&format!("Starting instance {}...", uuid));
    with_spinner("Starting instance...", cli.batch, client.start_instance(uuid))
        .await
        .map_err(|e| e.context("failed to start instance"))?;
    print_success(&format!("Instance {} started successfully", uuid));
    Ok(())
}

async fn stop_instance(client: &SanntiClient, cli: &Cli, uuid: &str) -> Result<()> {
    print_info(&format!("Stopping instance {}...", uuid));
    with_spinner("Stopping instance...", cli.batch, client.stop_instance(uuid))
        .await
        .map_err(|e| e.context("failed to stop instance"))?;
    print_success(&format!("Instance {} stopped successfully", uuid));
    Ok(())
}

async fn delete_instance(client: &SanntiClient, cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let prompt = format!("Delete instance {}? This cannot be undone.", args.uuid);
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        print_info("Aborted");
        return Ok(());
    }

    print_info(&format!("Deleting instance {}...", args.uuid));
    with_spinner(
        "Deleting instance...",
        cli.batch,
        client.delete_instance(&args.uuid),
    )
    .await
    .map_err(|e| e.context("failed to delete instance"))?;
    print_success(&format!("Instance {} deleted successfully", args.uuid));
    Ok(())
}

async fn list_images(
    client: &SanntiClient,
    cli: &Cli,
    format: OutputFormat,
    region: Option<&str>,
) -> Result<()> {
    let templates = with_spinner("Fetching images...", cli.batch, client.list_templates(region))
        .await
        .map_err(|e| e.context("failed to list images"))?;

    if templates.is_empty() {
        print_info("No images found");
        return Ok(());
    }

    output::print(Items::Many(&templates), format, TEMPLATE_HEADERS, template_row)
}

async fn list_sizes(
    client: &SanntiClient,
    cli: &Cli,
    format: OutputFormat,
    region: Option<&str>,
) -> Result<()> {
    let offerings = with_spinner(
        "Fetching compute sizes...",
        cli.batch,
        client.list_compute_offerings(region),
    )
    .await
    .map_err(|e| e.context("failed to list compute sizes"))?;

    if offerings.is_empty() {
        print_info("No compute sizes found");
        return Ok(());
    }

    output::print(Items::Many(&offerings), format, OFFERING_HEADERS, offering_row)
}
