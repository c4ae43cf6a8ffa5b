use std::path::PathBuf;

pub mod init;
pub mod templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One of the artifacts `init` can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Manifest,
    AssetsDir,
    Icon,
    Makefile,
    BaseSource,
}

/// Outcome of a single artifact write.
///
/// Failures keep the error text rather than the source error so results stay
/// cheap to clone and the CLI layer can render them directly.
#[derive(Debug, Clone)]
pub struct ArtifactOutcome {
    pub artifact: Artifact,
    pub path: PathBuf,
    pub error: Option<String>,
}

impl ArtifactOutcome {
    pub fn ok(artifact: Artifact, path: PathBuf) -> Self {
        Self {
            artifact,
            path,
            error: None,
        }
    }

    pub fn failed(artifact: Artifact, path: PathBuf, error: impl Into<String>) -> Self {
        Self {
            artifact,
            path,
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Structured result returned by every command.
///
/// Commands never print; the binary renders `messages` and derives the exit
/// code from `succeeded()`.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcomes: Vec<ArtifactOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn succeeded(&self) -> bool {
        self.outcomes.iter().all(ArtifactOutcome::is_ok)
            && !self
                .messages
                .iter()
                .any(|m| m.level == MessageLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_succeeds() {
        assert!(CmdResult::default().succeeded());
    }

    #[test]
    fn test_failed_outcome_fails_result() {
        let mut result = CmdResult::default();
        result.outcomes.push(ArtifactOutcome::ok(
            Artifact::Manifest,
            PathBuf::from("Project.mint.json"),
        ));
        assert!(result.succeeded());

        result.outcomes.push(ArtifactOutcome::failed(
            Artifact::Icon,
            PathBuf::from("icon.png"),
            "disk full",
        ));
        assert!(!result.succeeded());
    }

    #[test]
    fn test_error_message_fails_result() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("heads up"));
        assert!(result.succeeded());

        result.add_message(CmdMessage::error("boom"));
        assert!(!result.succeeded());
    }
}
