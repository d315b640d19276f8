use std::{io::Cursor, path::Path};

use ico::{IconDir, ResourceType};

use crate::foundation::error::{AssemblerError, AssemblerResult};

/// One entry of an ICO container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IcoEntry {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Declared bit depth.
    pub bits_per_pixel: u16,
    /// Whether the payload is PNG rather than BMP.
    pub is_png: bool,
    data: Vec<u8>,
}

impl IcoEntry {
    /// Embedded image bytes (PNG or BMP).
    pub fn payload(&self) -> &[u8] {
        &self.data
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `(width, height)` pair.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Read the entries of the ICO file at `path`.
pub fn read_ico_entries(path: &Path) -> AssemblerResult<Vec<IcoEntry>> {
    let bytes = std::fs::read(path).map_err(|e| AssemblerError::io(path, e))?;
    parse_ico_entries(&bytes)
}

/// Parse the entries of in-memory ICO bytes.
pub fn parse_ico_entries(bytes: &[u8]) -> AssemblerResult<Vec<IcoEntry>> {
    let dir = IconDir::read(Cursor::new(bytes))
        .map_err(|e| AssemblerError::container(format!("unreadable icon container: {e}")))?;
    if dir.resource_type() != ResourceType::Icon {
        return Err(AssemblerError::container(format!(
            "not an icon container ({:?})",
            dir.resource_type()
        )));
    }

    Ok(dir
        .entries()
        .iter()
        .map(|entry| IcoEntry {
            width: entry.width(),
            height: entry.height(),
            bits_per_pixel: entry.bits_per_pixel(),
            is_png: entry.is_png(),
            data: entry.data().to_vec(),
        })
        .collect())
}

#[cfg(test)]
#[path = "../tests/unit/inspect.rs"]
mod tests;
