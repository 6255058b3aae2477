//! Vendor archive download and extraction.
//!
//! Stage 1 of the icon-mill pipeline. Downloads the published icon archive
//! into the working directory, extracts it, and removes the archive file —
//! the extracted tree is scratch data the scan stage reads from and the
//! build command deletes when it finishes.
//!
//! The zip is removed even when extraction fails, so an aborted run never
//! leaves a half-downloaded archive behind to confuse the next one.

use crate::config::SourceConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("download failed: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        FetchError::Http(Box::new(err))
    }
}

/// Download and unpack the vendor archive into `work_dir`.
///
/// Returns the path to the icons root inside the extracted tree
/// (`<work_dir>/<icons_subdir>`).
pub fn fetch(work_dir: &Path, source: &SourceConfig) -> Result<PathBuf, FetchError> {
    fs::create_dir_all(work_dir)?;
    let zip_path = work_dir.join("icons.zip");

    let result = download_archive(&source.resolved_url(), &zip_path)
        .and_then(|()| extract_archive(&zip_path, work_dir));
    let _ = fs::remove_file(&zip_path);
    result?;

    Ok(work_dir.join(&source.icons_subdir))
}

/// Stream the archive at `url` to `target`.
fn download_archive(url: &str, target: &Path) -> Result<(), FetchError> {
    let response = ureq::get(url).call()?;
    let mut reader = response.into_body().into_reader();
    let mut file = fs::File::create(target)?;
    io::copy(&mut reader, &mut file)?;
    Ok(())
}

/// Unpack every entry of the zip under `target`.
///
/// Entries whose names resolve outside `target` (absolute paths, `..`
/// segments) are skipped.
fn extract_archive(zip_path: &Path, target: &Path) -> Result<(), FetchError> {
    let file = fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let Some(rel) = entry.enclosed_name() else {
            continue;
        };
        let out_path = target.join(rel);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = fs::File::create(&out_path)?;
            io::copy(&mut entry, &mut out)?;
        }
    }
    Ok(())
}
