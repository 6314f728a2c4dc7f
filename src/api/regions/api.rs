//! Zone API operations and region resolution

use log::debug;

use super::models::Zone;
use crate::api::endpoint::endpoints;
use crate::api::SanntiClient;
use crate::error::{Result, SanntiError};

impl SanntiClient {
    /// Fetch the full zone list and merge its active zones into the region cache
    ///
    /// Returns every zone the API reported, active or not. On failure the cache
    /// is left as it was.
    pub async fn refresh_zones(&self) -> Result<Vec<Zone>> {
        let endpoint = endpoints::ZONES;
        let body = self.get(endpoint.path).await?;
        let zones: Vec<Zone> = endpoint.decode(&body)?;

        let stored = self.region_cache().absorb(&zones);
        debug!(
            "Zone refresh returned {} zones, {} active cached",
            zones.len(),
            stored
        );

        Ok(zones)
    }

    /// Active zones only, in API order
    pub async fn list_regions(&self) -> Result<Vec<Zone>> {
        let zones = self.refresh_zones().await?;
        Ok(zones.into_iter().filter(|z| z.is_active).collect())
    }

    /// Resolve a region display name to its zone identifier
    ///
    /// A cache hit makes no request. A miss refreshes the zone list once and
    /// checks again; concurrent misses may each refresh.
    pub async fn resolve_zone_id(&self, region: &str) -> Result<String> {
        if let Some(zone_id) = self.region_cache().lookup(region) {
            debug!("Region '{}' resolved from cache", region);
            return Ok(zone_id);
        }

        debug!("Region '{}' not cached, refreshing zones", region);
        self.refresh_zones()
            .await
            .map_err(|e| e.context("failed to fetch zones"))?;

        self.region_cache()
            .lookup(region)
            .ok_or_else(|| SanntiError::RegionNotFound {
                region: region.to_string(),
                available: self.region_cache().region_names(),
            })
    }
}
