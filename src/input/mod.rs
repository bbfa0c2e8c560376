pub mod loader;

use std::path::{Path, PathBuf};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("the file '{}' was not found", .0.display())]
    NotFound(PathBuf),
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("an unexpected error occurred while loading the data: {0}")]
    Io(#[from] io::Error),
}

impl LoadError {
    pub fn status(&self) -> &'static str {
        match self {
            LoadError::NotFound(_) => "not_found",
            LoadError::GzipNotEnabled(_) => "unsupported",
            LoadError::Io(_) => "io_error",
        }
    }
}

pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        #[cfg(feature = "gz")]
        {
            let decoder = flate2::read::GzDecoder::new(file);
            return Ok(Box::new(io::BufReader::new(decoder)));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(LoadError::GzipNotEnabled(path.to_path_buf()));
        }
    }
    Ok(Box::new(io::BufReader::new(file)))
}

pub fn path_display(path: &Path) -> impl fmt::Display + '_ {
    path.to_string_lossy()
}
