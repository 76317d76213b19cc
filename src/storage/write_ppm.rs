use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Error)]
pub enum WritePpmError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Binary `P6` encoding of the frame.
pub fn encode_ppm(buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
    let pixel_rect = buffer.pixel_rect();

    write!(out, "P6\n{} {}\n255\n", pixel_rect.width(), pixel_rect.height())?;
    out.write_all(buffer.buffer())
}

/// Writes the frame to `path`, creating missing parent directories.
pub fn write_ppm(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), WritePpmError> {
    let path = path.as_ref();
    let io_error = |source| WritePpmError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    encode_ppm(buffer, &mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    info!(
        path = %path.display(),
        width = buffer.pixel_rect().width(),
        height = buffer.pixel_rect().height(),
        "wrote ppm"
    );

    Ok(())
}
