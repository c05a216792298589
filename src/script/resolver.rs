//! Path resolution module
//!
//! Pure path arithmetic from a request kind to a location under the
//! scripts root or the repository root. Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

/// Logical request served by one of the dynamic routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// The generic `setup.sh`
    MainSetup,
    /// `setup-{tool}.sh`, tool taken verbatim from the URL
    NamedToolSetup(String),
    /// Any file under the repository root, path taken verbatim from the URL
    RepoFile(String),
}

impl RequestKind {
    /// Identifier echoed back in placeholder bodies
    pub fn label(&self) -> &str {
        match self {
            Self::MainSetup => "setup.sh",
            Self::NamedToolSetup(tool) => tool,
            Self::RepoFile(path) => path,
        }
    }
}

/// The two filesystem roots files are served from.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRoots {
    scripts_root: PathBuf,
    repository_root: PathBuf,
}

impl SiteRoots {
    pub fn new(scripts_root: impl Into<PathBuf>, repository_root: impl Into<PathBuf>) -> Self {
        Self {
            scripts_root: scripts_root.into(),
            repository_root: repository_root.into(),
        }
    }

    /// Derive the repository root by walking `depth` parents up from the
    /// scripts root.
    ///
    /// Walking stops at the topmost ancestor. A relative path that runs out
    /// of components resolves to the working directory.
    pub fn with_repository_depth(scripts_root: impl Into<PathBuf>, depth: usize) -> Self {
        let scripts_root = scripts_root.into();
        let ancestor = scripts_root
            .ancestors()
            .nth(depth)
            .or_else(|| scripts_root.ancestors().last())
            .unwrap_or(scripts_root.as_path());
        let repository_root = if ancestor.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            ancestor.to_path_buf()
        };
        Self {
            scripts_root,
            repository_root,
        }
    }

    pub fn scripts_root(&self) -> &Path {
        &self.scripts_root
    }

    pub fn repository_root(&self) -> &Path {
        &self.repository_root
    }

    /// Root directory a request kind resolves under
    pub fn root_for(&self, kind: &RequestKind) -> &Path {
        match kind {
            RequestKind::MainSetup | RequestKind::NamedToolSetup(_) => &self.scripts_root,
            RequestKind::RepoFile(_) => &self.repository_root,
        }
    }
}

/// Resolve a request kind to the file it names.
///
/// Tool names and repository paths are substituted as-is: `..` segments are
/// kept, so the result may point outside its root. Only a leading `/` on a
/// repository path is dropped, otherwise `Path::join` would discard the root.
pub fn resolve(roots: &SiteRoots, kind: &RequestKind) -> PathBuf {
    match kind {
        RequestKind::MainSetup => roots.scripts_root.join("setup.sh"),
        RequestKind::NamedToolSetup(tool) => roots.scripts_root.join(format!("setup-{tool}.sh")),
        RequestKind::RepoFile(path) => roots.repository_root.join(path.trim_start_matches('/')),
    }
}
