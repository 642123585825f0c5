use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;
use zip::ZipArchive;

use crate::error::ArchiveError;
use crate::fs::dirstack::DirStack;
use crate::fs::{mkdir_p, paths};

/// What happened to a single archive entry.
///
/// An entry is only classified as a directory when writing it as a file
/// fails because the destination is a directory path; regular entries are
/// written out byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    FileWritten,
    DirectoryCreated,
}

/// Extract a zip archive into `target_dir`, mirroring the archive's internal
/// structure. Entries are processed in the archive's stored order inside a
/// `pushd(target_dir)`/`popd` scope.
///
/// Only one per-entry failure shape is recovered: a destination that turns
/// out to be a directory path is created with `mkdir_p` instead. Any other
/// failure propagates immediately, leaving the archive partially extracted
/// and the working directory still inside `target_dir`.
pub fn extract_zip(
    archive_path: &Path,
    target_dir: &Path,
    verbose: bool,
) -> Result<(), ArchiveError> {
    let target = paths::abspath(target_dir)?;

    let mut dirs = DirStack::new();
    dirs.pushd(&target)?;

    let file =
        File::open(archive_path).map_err(|source| ArchiveError::open(archive_path, source))?;
    let mut archive =
        ZipArchive::new(file).map_err(|source| ArchiveError::read(archive_path, source))?;

    if verbose {
        info!("extracting files to {}", target.display());
    }

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|source| ArchiveError::entry(index, source))?;
        let name = entry.name().to_string();
        let destination = target.join(&name);

        match extract_entry(&mut entry, &destination)? {
            EntryOutcome::FileWritten => {
                if verbose {
                    info!("  -> unpacking {name}");
                }
            }
            EntryOutcome::DirectoryCreated => {
                if verbose {
                    info!("  -> creating directory {name}");
                }
            }
        }
    }

    dirs.popd()?;
    Ok(())
}

fn extract_entry(
    entry: &mut impl io::Read,
    destination: &Path,
) -> Result<EntryOutcome, ArchiveError> {
    match File::create(destination) {
        Ok(mut out) => {
            io::copy(entry, &mut out)
                .map_err(|source| ArchiveError::write(destination, source))?;
            Ok(EntryOutcome::FileWritten)
        }
        Err(_) if is_directory_destination(destination) => {
            mkdir_p(destination)
                .map_err(|source| ArchiveError::create_dir(destination, source))?;
            Ok(EntryOutcome::DirectoryCreated)
        }
        Err(source) => Err(ArchiveError::write(destination, source)),
    }
}

/// Directory entries carry a trailing separator in their stored name; the
/// destination may also already exist as a directory.
fn is_directory_destination(destination: &Path) -> bool {
    destination.as_os_str().to_string_lossy().ends_with('/') || destination.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_archive(path: &Path, entries: &[(&str, Option<&[u8]>)]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, bytes) in entries {
            match bytes {
                Some(bytes) => {
                    writer.start_file(*name, options).unwrap();
                    writer.write_all(bytes).unwrap();
                }
                None => {
                    writer.add_directory(*name, options).unwrap();
                }
            }
        }
        writer.finish().unwrap();
    }

    #[test]
    #[serial]
    fn test_extract_zip_mirrors_archive_structure() {
        let scratch = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let archive = scratch.path().join("bundle.zip");
        write_archive(
            &archive,
            &[
                ("dir", None),
                ("dir/file.txt", Some(b"feature scaffold")),
                ("top.txt", Some(b"hello")),
            ],
        );

        let before = std::env::current_dir().unwrap();
        extract_zip(&archive, target.path(), false).unwrap();

        assert_eq!(std::env::current_dir().unwrap(), before);
        assert!(target.path().join("dir").is_dir());
        assert_eq!(
            fs::read(target.path().join("dir/file.txt")).unwrap(),
            b"feature scaffold"
        );
        assert_eq!(fs::read(target.path().join("top.txt")).unwrap(), b"hello");
    }

    #[test]
    fn test_directory_destination_detection() {
        let temp_dir = TempDir::new().unwrap();
        assert!(is_directory_destination(&temp_dir.path().join("dir/")));
        assert!(is_directory_destination(temp_dir.path()));
        assert!(!is_directory_destination(&temp_dir.path().join("file.txt")));
    }

    #[test]
    #[serial]
    fn test_extract_zip_is_idempotent_for_directories() {
        let scratch = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let archive = scratch.path().join("bundle.zip");
        write_archive(&archive, &[("dir", None), ("dir/file.txt", Some(b"x"))]);

        extract_zip(&archive, target.path(), false).unwrap();
        extract_zip(&archive, target.path(), false).unwrap();

        assert!(target.path().join("dir/file.txt").is_file());
    }

    #[test]
    #[serial]
    fn test_extract_zip_missing_archive_leaves_cwd_in_target() {
        let target = TempDir::new().unwrap();
        let before = std::env::current_dir().unwrap();

        let err = extract_zip(Path::new("/no/such/bundle.zip"), target.path(), false)
            .unwrap_err();
        assert!(err.to_string().contains("failed to open archive"));

        // The open failure happens after pushd, and nothing pops the stack
        // on the error path.
        assert_eq!(
            std::env::current_dir().unwrap().canonicalize().unwrap(),
            target.path().canonicalize().unwrap()
        );

        std::env::set_current_dir(before).unwrap();
    }

    #[test]
    #[serial]
    fn test_extract_zip_aborts_on_unwritable_entry() {
        let scratch = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let archive = scratch.path().join("bundle.zip");
        // "dir" never appears as a directory entry, so the nested file has
        // no parent to land in and the write must abort extraction.
        write_archive(&archive, &[("dir/file.txt", Some(b"x")), ("after.txt", Some(b"y"))]);

        let before = std::env::current_dir().unwrap();
        let err = extract_zip(&archive, target.path(), false).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
        assert!(!target.path().join("after.txt").exists());

        std::env::set_current_dir(before).unwrap();
    }
}
