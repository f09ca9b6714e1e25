/// Error raised whenever a request over the invocation channel fails.
///
/// This is the only error kind the bridge surfaces. Every variant names the
/// command that was being invoked so callers can tell `emit`, `listen` and
/// `unlisten` failures apart.
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    /// The host received the request and rejected it
    /// (e.g. malformed event name, unknown listener).
    #[error("{command} rejected by host: {message}")]
    Rejected { command: String, message: String },

    /// The channel could not carry the request to the host.
    #[error("invocation channel unavailable for {command}")]
    Unavailable { command: String },

    /// The request arguments could not be encoded.
    #[error("failed to encode arguments for {command}: {source}")]
    Arguments {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// The host answered with a result of an unexpected shape.
    #[error("unexpected response to {command}: {source}")]
    Response {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

impl InvocationError {
    pub fn rejected(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            command: command.into(),
            message: message.into(),
        }
    }

    pub fn unavailable(command: impl Into<String>) -> Self {
        Self::Unavailable {
            command: command.into(),
        }
    }

    /// Command the failing request was issued under.
    pub fn command(&self) -> &str {
        match self {
            Self::Rejected { command, .. }
            | Self::Unavailable { command }
            | Self::Arguments { command, .. }
            | Self::Response { command, .. } => command,
        }
    }
}

pub type InvocationResult<T> = Result<T, InvocationError>;
