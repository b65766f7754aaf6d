//! PNG encoding and decoding.
//!
//! Encoding uses fixed compression settings so the same raster always
//! produces byte-identical files. Decoding normalizes every PNG color type
//! to 8-bit RGBA.

use std::io::Write;
use std::path::Path;

use base64::Engine;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType, Transformations};
use thiserror::Error;

use crate::color::Rgba;
use crate::raster::{Raster, RasterError};

/// Prefix of a base64 PNG data URI.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    Decoding(#[from] png::DecodingError),

    #[error("Unsupported PNG layout: {0:?} at {1:?}")]
    UnsupportedLayout(ColorType, BitDepth),

    #[error("Invalid image data: {0}")]
    Raster(#[from] RasterError),

    #[error("Invalid data URI: {0}")]
    DataUri(String),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for reproducible output.
    pub compression: Compression,
    /// Filter type. Use a fixed value for reproducible output.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Encode a raster as an RGBA PNG into any writer.
pub fn write_rgba_to_writer<W: Write>(
    raster: &Raster,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if raster.width == 0 || raster.height == 0 {
        return Err(RasterError::EmptyDimensions(raster.width, raster.height).into());
    }

    let mut encoder = Encoder::new(writer, raster.width, raster.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&raster.to_rgba8())?;

    Ok(())
}

/// Encode a raster as PNG bytes.
pub fn encode_rgba(raster: &Raster, config: &PngConfig) -> Result<Vec<u8>, PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(raster, &mut data, config)?;
    Ok(data)
}

/// Encode a raster and return the bytes with their hash.
pub fn encode_rgba_with_hash(
    raster: &Raster,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let data = encode_rgba(raster, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Write already-encoded PNG bytes to a file.
pub fn write_png_file(data: &[u8], path: &Path) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}

/// Decode PNG bytes into an RGBA raster.
pub fn decode_png(bytes: &[u8]) -> Result<Raster, PngError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut pixels = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels)?;

    if info.bit_depth != BitDepth::Eight {
        return Err(PngError::UnsupportedLayout(info.color_type, info.bit_depth));
    }
    let channels = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(PngError::UnsupportedLayout(info.color_type, info.bit_depth))
        }
    };

    let mut rgba = Vec::with_capacity(info.width as usize * info.height as usize * 4);
    for y in 0..info.height as usize {
        let start = y * info.line_size;
        let row = &pixels[start..start + info.width as usize * channels];
        for px in row.chunks_exact(channels) {
            let color = match channels {
                1 => Rgba::rgb(px[0], px[0], px[0]),
                2 => Rgba::new(px[0], px[0], px[0], px[1]),
                3 => Rgba::rgb(px[0], px[1], px[2]),
                _ => Rgba::new(px[0], px[1], px[2], px[3]),
            };
            rgba.extend_from_slice(&color.to_rgba8());
        }
    }

    Ok(Raster::from_rgba8(info.width, info.height, &rgba)?)
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Wrap PNG bytes in a `data:image/png;base64,` URI.
pub fn to_data_uri(data: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(data);
    format!("{DATA_URI_PREFIX}{encoded}")
}

/// Extract the PNG bytes from a `data:image/png;base64,` URI.
pub fn from_data_uri(uri: &str) -> Result<Vec<u8>, PngError> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| PngError::DataUri(format!("missing '{}' prefix", DATA_URI_PREFIX)))?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| PngError::DataUri(e.to_string()))
}
