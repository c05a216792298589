//! Script serving module
//!
//! resolve → read → build for the setup script and repository file routes.

use crate::config::AppState;
use crate::script::{self, RequestKind, ScriptResponse};

/// Serve one script request kind from the configured roots
pub async fn serve_script(kind: &RequestKind, state: &AppState) -> ScriptResponse {
    let path = script::resolve(&state.roots, kind);
    let outcome = if state.config.site.contain_paths {
        script::reader::read_contained(&path, state.roots.root_for(kind)).await
    } else {
        script::read(&path).await
    };
    script::build(kind, outcome)
}
