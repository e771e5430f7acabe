//! Directory-backed image sink writing numbered raster files.
//! PNG goes through the `image` codecs; JPEG uses the dedicated encoder
//! at maximum quality.
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use jpeg_encoder::{ColorType, Encoder};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::raster::Raster;
use crate::types::OutputEncoding;

/// Generated file name pattern: `<prefix><zero-padded counter>.<extension>`,
/// e.g. `image_00042.png` with the defaults.
#[derive(Debug, Clone)]
pub struct NamePattern {
    pub prefix: String,
    pub digits: usize,
    pub encoding: OutputEncoding,
}

impl Default for NamePattern {
    fn default() -> Self {
        Self {
            prefix: "image_".to_string(),
            digits: 5,
            encoding: OutputEncoding::Png,
        }
    }
}

impl NamePattern {
    fn file_name(&self, index: usize) -> String {
        format!(
            "{}{:0width$}.{}",
            self.prefix,
            index,
            self.encoding.extension(),
            width = self.digits
        )
    }
}

/// Saves a sequence of rasters into a target directory as numbered files.
/// Holds only the target path and a running counter; dropping the sink
/// releases nothing because no handle stays open between saves.
#[derive(Debug)]
pub struct ImageSink {
    target_dir: PathBuf,
    pattern: NamePattern,
    image_count: usize,
}

impl ImageSink {
    /// Create (or reuse) the target directory. With `overwrite` an existing
    /// directory is cleared first.
    pub fn open(target_dir: &Path, overwrite: bool, pattern: NamePattern) -> Result<Self> {
        if target_dir.exists() {
            if overwrite {
                fs::remove_dir_all(target_dir)?;
                fs::create_dir_all(target_dir)?;
                info!("Cleared existing sink directory {:?}", target_dir);
            }
        } else {
            fs::create_dir_all(target_dir)?;
        }
        Ok(Self {
            target_dir: target_dir.to_path_buf(),
            pattern,
            image_count: 0,
        })
    }

    /// Write `image` into the sink directory. With no explicit name, one is
    /// generated from the pattern and the running counter. Returns the path
    /// of the written file.
    pub fn save_image(&mut self, image: &Raster, image_name: Option<&str>) -> Result<PathBuf> {
        let name = match image_name {
            Some(name) => name.to_string(),
            None => self.pattern.file_name(self.image_count),
        };
        let path = self.target_dir.join(name);
        write_raster(&path, image)?;
        debug!("Saved {:?}", path);
        self.image_count += 1;
        Ok(path)
    }

    /// Number of images saved so far.
    pub fn image_count(&self) -> usize {
        self.image_count
    }
}

/// Write `raster` to `output`, picking the codec from the file extension:
/// `jpg`/`jpeg` uses the JPEG encoder, everything else goes through the
/// `image` crate (PNG by default).
pub fn write_raster(output: &Path, raster: &Raster) -> Result<()> {
    let extension = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => write_rgb_jpeg(
            output,
            raster.width(),
            raster.height(),
            &raster.to_raw_vec(),
        ),
        _ => {
            raster.to_dynamic().save(output)?;
            Ok(())
        }
    }
}

pub fn write_rgb_jpeg(output: &Path, cols: usize, rows: usize, rgb_data: &[u8]) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, 100);
    encoder
        .encode(rgb_data, cols as u16, rows as u16, ColorType::Rgb)
        .map_err(Error::external)?;
    Ok(())
}
