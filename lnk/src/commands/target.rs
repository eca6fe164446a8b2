use std::path::PathBuf;

use lnk_format::LnkFile;

use crate::cli::TargetArgs;
use crate::error::{Error, Result};

fn resolve(lnk: &LnkFile) -> Result<PathBuf> {
    lnk.absolute_target_path()
        .map_err(|source| Error::ResolveTarget {
            path: lnk.file_path().to_path_buf(),
            source,
        })
}

pub fn run(args: TargetArgs) -> Result<()> {
    let mut missing = Vec::new();

    for path in &args.files {
        let lnk = super::open(path)?;
        let target = resolve(&lnk)?;
        tracing::debug!(shortcut = %path.display(), target = %target.display(), "resolved");

        if args.check && !lnk.target_exists() {
            eprintln!("{}: target `{}` does not exist", path.display(), target.display());
            missing.push(path.clone());
            continue;
        }

        println!("{}", target.display());
    }

    if !missing.is_empty() {
        return Err(Error::MissingTargets { shortcuts: missing });
    }

    Ok(())
}
