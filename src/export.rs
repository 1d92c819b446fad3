use crate::{dot::to_dot, session::Session};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Where exported diagrams go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
}

impl ExportConfig {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

/// Writes `nfa.dot`, `dfa.dot` and `mindfa.dot` for `session` into the configured directory,
/// creating it when missing. Returns the written paths in that order.
pub fn export(session: &Session, config: &ExportConfig) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.out_dir)?;

    let stages = session.graphs();
    [
        ("nfa", &stages.nfa),
        ("dfa", &stages.dfa),
        ("mindfa", &stages.mindfa),
    ]
    .into_iter()
    .map(|(name, graph)| write_dot(&config.out_dir, name, &to_dot(name, graph)))
    .collect()
}

fn write_dot(dir: &Path, name: &str, dot: &str) -> io::Result<PathBuf> {
    let path = dir.join(format!("{}.dot", name));
    fs::write(&path, dot)?;
    log::debug!("wrote {}", path.display());

    Ok(path)
}
