//! Zip extraction for downloaded exports.

use crate::error::DownloadError;

use std::fs::{self, File};
use std::io;
use std::path::Path;

use zip::ZipArchive;

/// Extract every entry of a zip archive into `dest`.
///
/// Entry paths are sanitized with `enclosed_name`; entries that would
/// escape the destination are skipped. Returns the number of files
/// written. Extraction is not atomic: a failure part-way through
/// leaves the entries written so far in place.
pub(crate) fn extract(archive_file: File, dest: &Path) -> Result<usize, DownloadError> {
    let mut archive = ZipArchive::new(archive_file)?;
    let mut written = 0;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            // Path traversal attempt in the archive
            continue;
        };
        let outpath = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&outpath)?;
            io::copy(&mut entry, &mut outfile)?;
            written += 1;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
            }
        }
    }

    Ok(written)
}
