//! Region command handlers

use log::debug;

use crate::api::SanntiClient;
use crate::cli::{Cli, RegionAction};
use crate::error::Result;
use crate::output::regions::{region_row, REGION_HEADERS};
use crate::output::{self, Items};
use crate::ui::{print_info, with_spinner};

/// Run a `region` subcommand
pub async fn run_region_command(
    client: &SanntiClient,
    cli: &Cli,
    action: &RegionAction,
) -> Result<()> {
    let format = cli.output_format()?;

    match action {
        RegionAction::List => {
            let regions = with_spinner("Fetching regions...", cli.batch, client.list_regions())
                .await
                .map_err(|e| e.context("failed to list regions"))?;
            debug!("Found {} active regions", regions.len());

            if regions.is_empty() {
                print_info("No active regions found");
                return Ok(());
            }

            output::print(Items::Many(&regions), format, REGION_HEADERS, region_row)
        }
    }
}
