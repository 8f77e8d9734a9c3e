use serde::{Deserialize, Serialize};

pub const DEFAULT_EMPTY_MESSAGE: &str = "No items found";
pub const DEFAULT_EMPTY_CLASS: &str = "empty-state text-center text-muted text-uppercase text-xs";

/// Per-render inputs of the empty-state component. Both fields are optional;
/// resolution fills in the fixed defaults.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub message: Option<String>,
    pub container_class: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedDisplay {
    pub message: String,
    pub container_class: String,
}

impl DisplayConfig {
    /// Total function: a supplied value wins outright, an absent one falls
    /// back to the default. A supplied class replaces the default entirely,
    /// it is never merged with it.
    pub fn resolve(self) -> ResolvedDisplay {
        ResolvedDisplay {
            message: self
                .message
                .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string()),
            container_class: self
                .container_class
                .unwrap_or_else(|| DEFAULT_EMPTY_CLASS.to_string()),
        }
    }
}
