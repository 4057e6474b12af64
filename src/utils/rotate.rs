//! Size-bounded log file with numbered backups (`rename.log`, `rename.log.1`, ...)

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default size limit before the log file is rotated
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

/// Default number of rotated backups kept next to the live file
pub const DEFAULT_BACKUPS: usize = 3;

/// An append-only file that rolls over once it grows past `max_bytes`.
///
/// On rollover the live file becomes `<name>.1`, an existing `<name>.1`
/// becomes `<name>.2` and so on; the oldest backup beyond `backups` is
/// overwritten. With `backups == 0` the live file is simply truncated.
/// A `max_bytes` of zero disables rotation.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: File,
    written: u64,
}

impl RotatingFile {
    /// Open (or create) the log file in append mode.
    pub fn open(path: impl AsRef<Path>, max_bytes: u64, backups: usize) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = open_append(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            max_bytes,
            backups,
            file,
            written,
        })
    }

    /// Path of the `n`th backup, e.g. `rename.log.2`
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{}", n));
        PathBuf::from(name)
    }

    fn should_rotate(&self, incoming: u64) -> bool {
        self.max_bytes > 0 && self.written > 0 && self.written + incoming > self.max_bytes
    }

    /// Shift backups up by one and start a fresh live file.
    pub fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.backups == 0 {
            self.file = OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(&self.path)?;
        } else {
            for n in (1..self.backups).rev() {
                let from = self.backup_path(n);
                if from.exists() {
                    fs::rename(&from, self.backup_path(n + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
            self.file = open_append(&self.path)?;
        }

        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.should_rotate(buf.len() as u64) {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
