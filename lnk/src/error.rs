use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open shortcut `{}`", .path.display())]
    OpenShortcut {
        path: PathBuf,
        #[source]
        source: lnk_format::OpenError,
    },

    #[error("Cannot resolve target of `{}`", .path.display())]
    ResolveTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot serialize shortcut info")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("Targets do not exist for {}", display_paths(.shortcuts))]
    MissingTargets { shortcuts: Vec<PathBuf> },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("`{}`", path.display()))
        .collect::<Vec<_>>()
        .join(", ")
}
