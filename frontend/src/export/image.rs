//! Signature images for the exported forms.
//!
//! JPEG data is passed through with `DCTDecode`. PNGs of any colour type,
//! depth or interlacing are decoded to 8-bit samples and re-deflated, with
//! the alpha channel split out into a soft mask.

use std::io::Cursor;

use png::{BitDepth, ColorType, Transformations};

use super::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEncoding {
    Jpeg { components: u8 },
    /// Zlib-compressed 8-bit samples, one or three per pixel.
    Flate { colors: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureImage {
    pub width: u32,
    pub height: u32,
    pub encoding: ImageEncoding,
    /// The compressed stream as stored in the PDF.
    pub data: Vec<u8>,
    /// Zlib-compressed 8-bit gray mask, absent when every pixel is opaque.
    pub alpha: Option<Vec<u8>>,
}

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub fn parse(bytes: Vec<u8>) -> Result<SignatureImage, ExportError> {
    if bytes.starts_with(&[0xFF, 0xD8]) {
        parse_jpeg(bytes)
    } else if bytes.starts_with(PNG_MAGIC) {
        decode_png(&bytes)
    } else {
        Err(ExportError::UnsupportedImage("not a PNG or JPEG file"))
    }
}

fn be_u16(bytes: &[u8], at: usize) -> Option<u16> {
    Some(u16::from_be_bytes([*bytes.get(at)?, *bytes.get(at + 1)?]))
}

fn is_start_of_frame(marker: u8) -> bool {
    (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC)
}

fn parse_jpeg(bytes: Vec<u8>) -> Result<SignatureImage, ExportError> {
    let truncated = ExportError::UnsupportedImage("truncated JPEG header");
    let mut at = 2;
    loop {
        if *bytes.get(at).ok_or(truncated.clone())? != 0xFF {
            return Err(ExportError::UnsupportedImage("malformed JPEG segment"));
        }
        let marker = *bytes.get(at + 1).ok_or(truncated.clone())?;
        match marker {
            0xFF => {
                at += 1;
                continue;
            }
            0x01 | 0xD0..=0xD7 => {
                at += 2;
                continue;
            }
            0xD9 | 0xDA => return Err(ExportError::UnsupportedImage("JPEG has no frame header")),
            _ => {}
        }
        let length = be_u16(&bytes, at + 2).ok_or(truncated.clone())? as usize;
        if is_start_of_frame(marker) {
            let height = be_u16(&bytes, at + 5).ok_or(truncated.clone())?;
            let width = be_u16(&bytes, at + 7).ok_or(truncated.clone())?;
            let components = *bytes.get(at + 9).ok_or(truncated)?;
            if !matches!(components, 1 | 3) {
                return Err(ExportError::UnsupportedImage("CMYK JPEG"));
            }
            return Ok(SignatureImage {
                width: u32::from(width),
                height: u32::from(height),
                encoding: ImageEncoding::Jpeg { components },
                data: bytes,
                alpha: None,
            });
        }
        at += 2 + length;
    }
}

fn decode_error(err: png::DecodingError) -> ExportError {
    ExportError::ImageDecode(err.to_string())
}

fn deflate(samples: &[u8]) -> Vec<u8> {
    miniz_oxide::deflate::compress_to_vec_zlib(samples, 6)
}

/// Splits interleaved `colors + 1` samples into colour and alpha planes.
fn split_alpha(pixels: &[u8], colors: usize) -> (Vec<u8>, Vec<u8>) {
    let stride = colors + 1;
    let mut color = Vec::with_capacity(pixels.len() / stride * colors);
    let mut alpha = Vec::with_capacity(pixels.len() / stride);
    for pixel in pixels.chunks_exact(stride) {
        color.extend_from_slice(&pixel[..colors]);
        alpha.push(pixel[colors]);
    }
    (color, alpha)
}

fn decode_png(bytes: &[u8]) -> Result<SignatureImage, ExportError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(decode_error)?;
    let mut pixels = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut pixels).map_err(decode_error)?;
    pixels.truncate(frame.buffer_size());

    if frame.bit_depth != BitDepth::Eight {
        return Err(ExportError::UnsupportedImage("PNG did not expand to 8-bit samples"));
    }
    let (colors, has_alpha) = match frame.color_type {
        ColorType::Grayscale => (1, false),
        ColorType::Rgb => (3, false),
        ColorType::GrayscaleAlpha => (1, true),
        ColorType::Rgba => (3, true),
        ColorType::Indexed => return Err(ExportError::UnsupportedImage("PNG palette was not expanded")),
    };
    let (color, alpha) = if has_alpha {
        let (color, alpha) = split_alpha(&pixels, usize::from(colors));
        let opaque = alpha.iter().all(|&a| a == u8::MAX);
        (color, (!opaque).then(|| deflate(&alpha)))
    } else {
        (pixels, None)
    };
    Ok(SignatureImage {
        width: frame.width,
        height: frame.height,
        encoding: ImageEncoding::Flate { colors },
        data: deflate(&color),
        alpha,
    })
}

#[cfg(test)]
pub(crate) mod samples {
    use png::{BitDepth, ColorType};

    /// A JPEG header with an APP0 segment then a 64x32 RGB baseline frame.
    pub fn jpeg() -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0x00, 0x00];
        bytes.extend_from_slice(&[
            0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x20, 0x00, 0x40, 0x03, 0x01, 0x22, 0x00, 0x02,
            0x11, 0x01, 0x03, 0x11, 0x01,
        ]);
        bytes.extend_from_slice(&[0xFF, 0xD9]);
        bytes
    }

    fn encode(width: u32, height: u32, color: ColorType, palette: Option<Vec<u8>>, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(BitDepth::Eight);
            if let Some(palette) = palette {
                encoder.set_palette(palette);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        out
    }

    /// 2x1 RGB: red, blue.
    pub fn png_rgb() -> Vec<u8> {
        encode(2, 1, ColorType::Rgb, None, &[255, 0, 0, 0, 0, 255])
    }

    /// 2x1 RGBA ink stroke: opaque black, then fully transparent.
    pub fn png_rgba() -> Vec<u8> {
        encode(2, 1, ColorType::Rgba, None, &[0, 0, 0, 255, 255, 255, 255, 0])
    }

    /// 2x1 palette image: index 1 (green) then index 0 (white).
    pub fn png_palette() -> Vec<u8> {
        encode(2, 1, ColorType::Indexed, Some(vec![255, 255, 255, 0, 128, 0]), &[1, 0])
    }
}
