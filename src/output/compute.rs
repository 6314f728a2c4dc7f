//! Compute output projections

use super::yes_no;
use crate::api::{ComputeOffering, Instance, Template};

pub const INSTANCE_HEADERS: &[&str] = &["UUID", "NAME", "STATE", "REGION", "IP ADDRESS"];

pub const INSTANCE_DETAIL_HEADERS: &[&str] = &[
    "UUID",
    "NAME",
    "STATE",
    "VCPU",
    "MEMORY (MB)",
    "DISK (GB)",
    "NETWORK",
    "PRIVATE IP",
    "STATUS",
];

pub const TEMPLATE_HEADERS: &[&str] = &["UUID", "NAME", "OS TYPE", "REGION", "READY"];

pub const OFFERING_HEADERS: &[&str] = &["UUID", "NAME", "CPU", "MEMORY (MB)", "ACTIVE"];

pub fn instance_row(instance: &Instance) -> Vec<String> {
    vec![
        instance.uuid.clone(),
        instance.name.clone(),
        instance.state.clone(),
        instance.zone_name.clone(),
        instance.public_ip_address.clone(),
    ]
}

/// Detailed single-instance row with `-` for unknown values
pub fn instance_detail_row(instance: &Instance) -> Vec<String> {
    let vcpu = match instance.cpu_core.as_str() {
        "" | "0" => "-".to_string(),
        cores => cores.to_string(),
    };

    // volumeSize is reported in bytes
    let disk = match instance.volume_size.as_str() {
        "" | "null" => "-".to_string(),
        size => format!("{} bytes", size),
    };

    let status = if instance.status.is_empty() {
        instance.state.clone()
    } else {
        instance.status.clone()
    };

    vec![
        instance.uuid.clone(),
        instance.name.clone(),
        instance.state.clone(),
        vcpu,
        instance.memory.clone(),
        disk,
        dash_if_empty(&instance.network_name),
        dash_if_empty(&instance.instance_private_ip),
        status,
    ]
}

pub fn template_row(template: &Template) -> Vec<String> {
    vec![
        template.uuid.clone(),
        template.name.clone(),
        template.os_category_name.clone(),
        template.zone_name.clone(),
        yes_no(template.is_active),
    ]
}

pub fn offering_row(offering: &ComputeOffering) -> Vec<String> {
    vec![
        offering.uuid.clone(),
        offering.name.clone(),
        offering.number_of_cores.clone(),
        offering.memory.clone(),
        yes_no(offering.is_active),
    ]
}

fn dash_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
