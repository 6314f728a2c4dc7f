//! Region output projection

use crate::api::Zone;

pub const REGION_HEADERS: &[&str] = &["REGION", "COUNTRY", "STATUS"];

pub fn region_row(zone: &Zone) -> Vec<String> {
    vec![
        zone.name.clone(),
        zone.country_name.clone(),
        zone.status().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_row() {
        let zone = Zone {
            uuid: "zone-1".to_string(),
            name: "br-southeast-1".to_string(),
            country_name: "Brazil".to_string(),
            is_active: true,
        };
        assert_eq!(region_row(&zone), vec!["br-southeast-1", "Brazil", "active"]);
        assert_eq!(region_row(&zone).len(), REGION_HEADERS.len());
    }
}
