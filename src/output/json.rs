use serde::Serialize;

use crate::catalog::{NONE_SELECTED, options};
use crate::client::Status;
use crate::session::SessionState;

#[derive(Debug, Serialize)]
struct ResultJson<'a> {
    name: &'a str,
    status: Option<Status>,
    explanation: &'a str,
}

#[derive(Debug, Serialize)]
struct PresetJson<'a> {
    index: usize,
    label: &'a str,
}

pub(crate) fn output_result_json(state: &SessionState) -> String {
    let value = ResultJson {
        name: &state.name,
        status: state.status,
        explanation: &state.result,
    };
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

/// Presets with their dropdown index; the sentinel is omitted
pub(crate) fn output_catalog_json() -> String {
    let presets: Vec<PresetJson<'_>> = options()
        .enumerate()
        .filter(|(_, label)| *label != NONE_SELECTED)
        .map(|(index, label)| PresetJson { index, label })
        .collect();
    serde_json::to_string_pretty(&presets).unwrap_or_else(|_| "[]".to_string())
}
