use anyhow::{ensure, Result};
use crc::{Crc, CRC_32_BZIP2};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use super::{processed_store::DatabaseV1, Database};
use crate::commit::CommitError;

fn crc() -> Crc<u32> {
    Crc::<u32>::new(&CRC_32_BZIP2)
}

/// Returns Ok(None) if the db file doesn't exist yet
pub fn load(path: &Path) -> Result<Option<DatabaseV1>> {
    log::info!("Loading database...");
    if !path.try_exists()? {
        log::info!("Loading database...not found");
        return Ok(None);
    }

    let content_compressed = std::fs::read(path)?;
    let content = zstd::stream::decode_all(content_compressed.as_slice())?;
    let crc = crc();
    let (parsed, remaining): (Database, &[u8]) =
        postcard::take_from_bytes_crc32(&content, crc.digest())?;
    let Database::V1(database) = parsed;
    ensure!(0 == remaining.len(), "File had extra bytes");

    log::info!("Loading database...done");

    Ok(Some(database))
}

pub fn save(db: &DatabaseV1, path: &Path) -> Result<(), CommitError> {
    log::info!("Saving database...");

    let crc = crc();
    let content = postcard::to_stdvec_crc32(&Database::V1(db.clone()), crc.digest())?;
    let content_compressed = zstd::bulk::compress(&content, zstd::DEFAULT_COMPRESSION_LEVEL)
        .map_err(CommitError::Compress)?;

    // First write to temporary file so we don't lose data if writing fails halfway
    let tmppath = temp_path(path).map_err(|source| CommitError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_synced(&tmppath, &content_compressed).map_err(|source| CommitError::Write {
        path: tmppath.clone(),
        source,
    })?;

    // Ok, writing succeeded, let's now replace the real file with the tmpfile
    std::fs::rename(&tmppath, path).map_err(|source| CommitError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Saving database...done");

    Ok(())
}

fn temp_path(path: &Path) -> std::io::Result<PathBuf> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no valid utf-8 filename",
            )
        })?;
    Ok(path.with_file_name(format!("{}.tmp", filename)))
}

fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
