//! Saving the returned workbook.
//!
//! Bytes go to `<name>.part` first, are fsynced, then moved onto the final
//! name so a partially written spreadsheet is never left under `VTU_Results.xlsx`.
//! Without overwrite the move is a hard link, which fails if the name was taken
//! after the existence check; with overwrite it is a rename.

use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Receives the spreadsheet once per successful submission.
pub trait ResultSink {
    /// Stores `bytes` under `filename` and returns where it ended up.
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf>;
}

/// Writes results into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    overwrite: bool,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            dir: dir.into(),
            overwrite,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ResultSink for DirectorySink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let final_path = self.dir.join(filename);
        if final_path.exists() && !self.overwrite {
            return Err(already_exists(&final_path));
        }

        fs::create_dir_all(&self.dir)?;
        let tmp = temp_path(&final_path);
        let placed =
            write_synced(&tmp, bytes).and_then(|()| place(&tmp, &final_path, self.overwrite));
        if let Err(e) = placed {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        let digest = hex::encode(Sha256::digest(bytes));
        tracing::info!(
            bytes = bytes.len(),
            sha256 = %digest,
            "saved results to {}",
            final_path.display()
        );
        Ok(final_path)
    }
}

/// Moves the finished temp file onto `final_path`.
fn place(tmp: &Path, final_path: &Path, overwrite: bool) -> io::Result<()> {
    if overwrite {
        return fs::rename(tmp, final_path);
    }
    // hard_link refuses an existing target, unlike rename.
    fs::hard_link(tmp, final_path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => already_exists(final_path),
        _ => e,
    })?;
    fs::remove_file(tmp)
}

fn already_exists(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!(
            "file already exists: {} (use --overwrite to replace)",
            path.display()
        ),
    )
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}
