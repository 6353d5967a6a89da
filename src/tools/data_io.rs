use std::{fs, io, path::Path};

use log::{error, info};

use crate::error::{HuffError, Result};

/// Read the whole input file. Everything is held in memory.
pub fn read_input(path: &str) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(data) => {
            info!("Read {} bytes from {}", data.len(), path);
            Ok(data)
        }
        Err(e) => {
            error!("Cannot read from the file {}", path);
            Err(e.into())
        }
    }
}

/// Write `data` to `path`. An existing file is only replaced when `force` is set.
pub fn write_output(path: &str, data: &[u8], force: bool) -> Result<()> {
    if !force && Path::new(path).exists() {
        return Err(HuffError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", path),
        )));
    }
    fs::write(path, data)?;
    info!("Wrote {} bytes to {}", data.len(), path);
    Ok(())
}
