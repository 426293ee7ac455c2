//! Built-in labels, display colors, and the merge rules around them.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Labels that are always present, re-added on every label save.
pub const DEFAULT_LABELS: [&str; 3] = ["训练", "预测", "故障"];

/// Color key used by the frontend for tickets without a label.
pub const UNLABELED: &str = "未打标";

static DEFAULT_LABEL_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("训练", "#1677ff"),
        ("预测", "#52c41a"),
        ("故障", "#f5222d"),
        (UNLABELED, "#d9d9d9"),
    ])
});

/// The default label list as owned strings.
pub fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(ToString::to_string).collect()
}

/// The default label→color mapping as owned strings.
pub fn default_colors() -> HashMap<String, String> {
    DEFAULT_LABEL_COLORS
        .iter()
        .map(|(name, color)| ((*name).to_string(), (*color).to_string()))
        .collect()
}

/// Appends any missing default label, preserving the caller's order.
pub fn ensure_defaults(labels: &mut Vec<String>) {
    for default in DEFAULT_LABELS {
        if !labels.iter().any(|l| l == default) {
            labels.push(default.to_string());
        }
    }
}

/// Overwrites entries for default labels; defaults win on conflict.
pub fn apply_default_colors(colors: &mut HashMap<String, String>) {
    for (name, color) in DEFAULT_LABEL_COLORS.iter() {
        colors.insert((*name).to_string(), (*color).to_string());
    }
}

/// Appends `name` if it is not already present. Returns whether it was added.
pub fn register(labels: &mut Vec<String>, name: &str) -> bool {
    if labels.iter().any(|l| l == name) {
        return false;
    }
    labels.push(name.to_string());
    true
}

/// Trims a raw label value; empty or whitespace-only becomes `None`.
pub fn normalize(label: Option<&str>) -> Option<String> {
    label
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(ToString::to_string)
}
