/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversion of common pixel layouts into packed RGBA f32.
//!
//! HDR pipelines work on 32 bit float RGBA regardless of what a
//! source image stores, integer layouts are scaled into the `[0..1]`
//! range and layouts without an alpha channel receive an opaque one.

use alloc::vec::Vec;

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

/// Convert a pixel buffer into packed RGBA f32.
///
/// `pitch` is the source row stride in bytes and may exceed the packed
/// row width. The output is always tightly packed,
/// `width * height * 4` floats.
///
/// Supported layouts are eight bit `BGRA` and `BGR` (the latter is
/// first promoted to `BGRA` with an opaque alpha), sixteen bit `Luma`,
/// `RGB` and `RGBA`, and 32 bit float `Luma`, `RGB` and `RGBA`.
/// Returns `None` for any other combination, or when the buffer is
/// too small for the described image.
pub fn convert_to_rgba_f32(
    data: &[u8], width: usize, height: usize, pitch: usize, colorspace: ColorSpace,
    depth: BitDepth
) -> Option<Vec<f32>> {
    match (colorspace, depth) {
        (ColorSpace::BGRA, BitDepth::Eight) => convert_rows(data, width, height, pitch, 4, |p| {
            [
                f32::from(p[2]) / 255.0,
                f32::from(p[1]) / 255.0,
                f32::from(p[0]) / 255.0,
                f32::from(p[3]) / 255.0
            ]
        }),
        (ColorSpace::BGR, BitDepth::Eight) => {
            // color layouts without alpha are promoted to four byte
            // BGRA first, then share the BGRA path
            let promoted = promote_bgr_to_bgra(data, width, height, pitch)?;

            convert_to_rgba_f32(
                &promoted,
                width,
                height,
                width * 4,
                ColorSpace::BGRA,
                BitDepth::Eight
            )
        }
        (ColorSpace::Luma, BitDepth::Sixteen) => convert_rows(data, width, height, pitch, 2, |p| {
            let value = f32::from(read_u16(p)) / 65535.0;

            [value, value, value, 1.0]
        }),
        (ColorSpace::RGB, BitDepth::Sixteen) => convert_rows(data, width, height, pitch, 6, |p| {
            [
                f32::from(read_u16(&p[0..])) / 65535.0,
                f32::from(read_u16(&p[2..])) / 65535.0,
                f32::from(read_u16(&p[4..])) / 65535.0,
                1.0
            ]
        }),
        (ColorSpace::RGBA, BitDepth::Sixteen) => convert_rows(data, width, height, pitch, 8, |p| {
            [
                f32::from(read_u16(&p[0..])) / 65535.0,
                f32::from(read_u16(&p[2..])) / 65535.0,
                f32::from(read_u16(&p[4..])) / 65535.0,
                f32::from(read_u16(&p[6..])) / 65535.0
            ]
        }),
        (ColorSpace::Luma, BitDepth::Float32) => {
            convert_rows(data, width, height, pitch, 4, |p| {
                let value = read_f32(p);

                [value, value, value, 1.0]
            })
        }
        (ColorSpace::RGB, BitDepth::Float32) => {
            convert_rows(data, width, height, pitch, 12, |p| {
                [read_f32(&p[0..]), read_f32(&p[4..]), read_f32(&p[8..]), 1.0]
            })
        }
        (ColorSpace::RGBA, BitDepth::Float32) => {
            // already the target layout, a conversion only drops the
            // row padding
            convert_rows(data, width, height, pitch, 16, |p| {
                [
                    read_f32(&p[0..]),
                    read_f32(&p[4..]),
                    read_f32(&p[8..]),
                    read_f32(&p[12..])
                ]
            })
        }
        _ => None
    }
}

/// Walk the source rows honoring the pitch and convert one pixel at a
/// time into four floats.
fn convert_rows(
    data: &[u8], width: usize, height: usize, pitch: usize, bytes_per_pixel: usize,
    convert: impl Fn(&[u8]) -> [f32; 4]
) -> Option<Vec<f32>> {
    if width == 0 || height == 0 {
        return Some(Vec::new());
    }

    let row_bytes = width * bytes_per_pixel;

    if pitch < row_bytes || data.len() < (height - 1) * pitch + row_bytes {
        return None;
    }

    let mut output = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        let row = &data[y * pitch..y * pitch + row_bytes];

        for pixel in row.chunks_exact(bytes_per_pixel) {
            output.extend_from_slice(&convert(pixel));
        }
    }

    Some(output)
}

fn promote_bgr_to_bgra(data: &[u8], width: usize, height: usize, pitch: usize) -> Option<Vec<u8>> {
    if width == 0 || height == 0 {
        return Some(Vec::new());
    }

    let row_bytes = width * 3;

    if pitch < row_bytes || data.len() < (height - 1) * pitch + row_bytes {
        return None;
    }

    let mut output = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        let row = &data[y * pitch..y * pitch + row_bytes];

        for pixel in row.chunks_exact(3) {
            output.extend_from_slice(pixel);
            output.push(255);
        }
    }

    Some(output)
}

fn read_u16(bytes: &[u8]) -> u16 {
    u16::from_ne_bytes([bytes[0], bytes[1]])
}

fn read_f32(bytes: &[u8]) -> f32 {
    f32::from_bits(u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
