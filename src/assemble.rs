use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use image::{
    ExtendedColorType, RgbaImage,
    codecs::ico::{IcoEncoder, IcoFrame},
    imageops::{self, FilterType},
};

use crate::{
    foundation::error::{AssemblerError, AssemblerResult},
    layout::IconLayout,
};

/// Outcome of a successful [`assemble`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Input image every entry was resampled from.
    pub base: PathBuf,
    /// Embedded `(width, height)` pairs, in container order.
    pub sizes: Vec<(u32, u32)>,
    /// Container that was written.
    pub output: PathBuf,
}

/// Build the ICO container described by `layout`.
///
/// The largest available input is decoded once and resampled to every
/// available size. When no input exists this returns
/// [`AssemblerError::NoInputs`] before anything is written.
#[tracing::instrument(skip(layout), fields(dir = %layout.assets_dir.display()))]
pub fn assemble(layout: &IconLayout) -> AssemblerResult<AssemblyReport> {
    layout.validate()?;

    let available = layout.available();
    let Some((base_size, base_path)) = available.first() else {
        return Err(AssemblerError::NoInputs {
            dir: layout.assets_dir.clone(),
            pattern: layout.input_pattern(),
        });
    };
    tracing::info!(base_size, base = %base_path.display(), "selected base image");

    let base = load_base(base_path)?;
    let sizes: Vec<u32> = available.iter().map(|(size, _)| *size).collect();
    let pairs: Vec<(u32, u32)> = sizes.iter().map(|&s| (s, s)).collect();

    println!(
        "Creating {} with sizes: {:?}",
        layout.output.display(),
        pairs
    );

    let frames = render_frames(&base, &sizes);
    let out_dir = layout.output_dir();
    if !out_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(out_dir).map_err(|e| AssemblerError::io(out_dir, e))?;
    }
    write_ico(&frames, &layout.output)?;

    println!("Saved {}", layout.output.display());

    Ok(AssemblyReport {
        base: base_path.clone(),
        sizes: pairs,
        output: layout.output.clone(),
    })
}

/// Decode `path` and normalise it to RGBA8.
pub fn load_base(path: &Path) -> AssemblerResult<RgbaImage> {
    let img = image::open(path).map_err(|e| AssemblerError::decode(path, e))?;
    let rgba = img.into_rgba8();
    tracing::debug!(
        width = rgba.width(),
        height = rgba.height(),
        "decoded base image"
    );
    Ok(rgba)
}

/// Resample `base` to a square frame per entry of `sizes`.
///
/// A size matching the base dimensions is copied as-is.
pub fn render_frames(base: &RgbaImage, sizes: &[u32]) -> Vec<RgbaImage> {
    sizes
        .iter()
        .map(|&size| {
            if base.dimensions() == (size, size) {
                base.clone()
            } else {
                tracing::debug!(size, "resampling base image");
                imageops::resize(base, size, size, FilterType::Lanczos3)
            }
        })
        .collect()
}

/// Encode `frames` as PNG entries of a single ICO container at `out`.
pub fn write_ico(frames: &[RgbaImage], out: &Path) -> AssemblerResult<()> {
    if frames.is_empty() {
        return Err(AssemblerError::config("no frames to encode"));
    }

    let entries = frames
        .iter()
        .map(|frame| {
            IcoFrame::as_png(
                frame.as_raw(),
                frame.width(),
                frame.height(),
                ExtendedColorType::Rgba8,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let file = File::create(out).map_err(|e| AssemblerError::io(out, e))?;
    let mut writer = BufWriter::new(file);
    IcoEncoder::new(&mut writer).encode_images(&entries)?;
    writer.flush().map_err(|e| AssemblerError::io(out, e))?;

    tracing::info!(out = %out.display(), entries = entries.len(), "wrote icon container");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/assemble.rs"]
mod tests;
