use serde::Deserialize;

/// Namespace the host registers its event plugin under.
pub const DEFAULT_PLUGIN: &str = "event";

/// Remote operations of the host event plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCommand {
    Emit,
    Listen,
    Unlisten,
}

impl EventCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            EventCommand::Emit => "emit",
            EventCommand::Listen => "listen",
            EventCommand::Unlisten => "unlisten",
        }
    }
}

/// Bridge Configuration
///
/// Only the plugin namespace is configurable; everything else about the
/// transport belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Plugin namespace, `event` unless the host mounts it elsewhere.
    pub plugin: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            plugin: DEFAULT_PLUGIN.to_string(),
        }
    }
}

impl BridgeConfig {
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
        }
    }

    /// Full command name, in the host's `plugin:<namespace>|<operation>` form.
    pub fn command(&self, command: EventCommand) -> String {
        format!("plugin:{}|{}", self.plugin, command.as_str())
    }
}
