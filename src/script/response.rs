//! Script response module
//!
//! Turns a read outcome into the status and body sent back to the client.
//! Misses get a placeholder body instead of an empty one, so
//! `curl ... | bash` prints a readable message rather than failing silently.

use super::reader::ReadOutcome;
use super::resolver::RequestKind;

/// Content type of every script and repository file response
pub const TEXT_PLAIN: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    Ok,
    NotFound,
}

impl ScriptStatus {
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotFound => 404,
        }
    }
}

/// Transport-independent response for the dynamic routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptResponse {
    pub status: ScriptStatus,
    pub body: String,
}

impl ScriptResponse {
    #[allow(clippy::unused_self)]
    pub const fn content_type(&self) -> &'static str {
        TEXT_PLAIN
    }
}

/// Build the response for `kind` from the outcome of reading its file
pub fn build(kind: &RequestKind, outcome: ReadOutcome) -> ScriptResponse {
    match outcome {
        ReadOutcome::Found(body) => ScriptResponse {
            status: ScriptStatus::Ok,
            body,
        },
        ReadOutcome::Absent => ScriptResponse {
            status: ScriptStatus::NotFound,
            body: placeholder(kind),
        },
    }
}

fn placeholder(kind: &RequestKind) -> String {
    match kind {
        RequestKind::MainSetup => "#!/bin/bash\necho 'Main setup script not found'".to_string(),
        RequestKind::NamedToolSetup(_) => format!(
            "#!/bin/bash\necho 'Setup script for {} not found'",
            single_quote_escape(kind.label())
        ),
        RequestKind::RepoFile(_) => format!("File not found: {}", kind.label()),
    }
}

/// Escape text for use inside a single-quoted shell string
fn single_quote_escape(text: &str) -> String {
    text.replace('\'', r"'\''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_passes_content_through() {
        let resp = build(
            &RequestKind::MainSetup,
            ReadOutcome::Found("echo hi".to_string()),
        );
        assert_eq!(resp.status, ScriptStatus::Ok);
        assert_eq!(resp.status.code(), 200);
        assert_eq!(resp.body, "echo hi");
        assert_eq!(resp.content_type(), "text/plain");
    }

    #[test]
    fn test_main_setup_placeholder() {
        let resp = build(&RequestKind::MainSetup, ReadOutcome::Absent);
        assert_eq!(resp.status.code(), 404);
        assert!(resp.body.starts_with("#!/bin/bash\n"));
        assert!(resp.body.contains("Main setup script not found"));
    }

    #[test]
    fn test_named_tool_placeholder_names_tool() {
        let resp = build(
            &RequestKind::NamedToolSetup("foo".to_string()),
            ReadOutcome::Absent,
        );
        assert_eq!(resp.status, ScriptStatus::NotFound);
        assert_eq!(resp.body, "#!/bin/bash\necho 'Setup script for foo not found'");
    }

    #[test]
    fn test_named_tool_placeholder_quotes_tool() {
        let resp = build(
            &RequestKind::NamedToolSetup("it's".to_string()),
            ReadOutcome::Absent,
        );
        assert_eq!(
            resp.body,
            "#!/bin/bash\necho 'Setup script for it'\\''s not found'"
        );
    }

    #[test]
    fn test_named_tool_placeholder_runs_as_one_echo() {
        let tool = "x';echo injected;'";
        let resp = build(
            &RequestKind::NamedToolSetup(tool.to_string()),
            ReadOutcome::Absent,
        );

        // Skip where bash is not installed
        let Ok(output) = std::process::Command::new("bash")
            .arg("-c")
            .arg(&resp.body)
            .output()
        else {
            return;
        };
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            format!("Setup script for {tool} not found\n")
        );
    }

    #[test]
    fn test_repo_file_placeholder_is_plain_text() {
        let resp = build(
            &RequestKind::RepoFile("missing/file.txt".to_string()),
            ReadOutcome::Absent,
        );
        assert_eq!(resp.status, ScriptStatus::NotFound);
        assert_eq!(resp.body, "File not found: missing/file.txt");
        assert_eq!(resp.content_type(), TEXT_PLAIN);
    }

    #[test]
    fn test_placeholder_never_empty() {
        for kind in [
            RequestKind::MainSetup,
            RequestKind::NamedToolSetup(String::new()),
            RequestKind::RepoFile(String::new()),
        ] {
            assert!(!build(&kind, ReadOutcome::Absent).body.is_empty());
        }
    }
}
