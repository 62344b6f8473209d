//! Cross validation of the Pxr24 wire format against flate2.
//!
//! The compressed stream must be a plain zlib stream whose content is
//! the delta coded, byte transposed sample planes, so a third party
//! inflater has to reproduce exactly those planes, and plane data
//! deflated by a third party has to decode.

use std::io::prelude::*;
use std::io::Cursor;

use zune_exr::{ChannelInfo, Pxr24Codec, Region, SampleType};

/// binary16 patterns of 0.0, 1.0, 2.0 .. 15.0
const HALF_RAMP: [u16; 16] = [
    0x0000, 0x3C00, 0x4000, 0x4200, 0x4400, 0x4500, 0x4600, 0x4700, 0x4800, 0x4880, 0x4900,
    0x4980, 0x4A00, 0x4A80, 0x4B00, 0x4B80
];

fn inflate_reference(bytes: &[u8]) -> Vec<u8> {
    let mut writer = Vec::new();
    let mut deflater = flate2::read::ZlibDecoder::new(Cursor::new(bytes));

    deflater.read_to_end(&mut writer).unwrap();

    writer
}

fn deflate_reference(bytes: &[u8]) -> Vec<u8> {
    let mut deflater = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());

    deflater.write_all(bytes).unwrap();
    deflater.finish().unwrap()
}

fn one_row_codec(sample_type: SampleType, samples: i64, row_bytes: usize) -> Pxr24Codec {
    let channel = ChannelInfo {
        name: "Y".to_string(),
        sample_type,
        x_sampling: 1,
        y_sampling: 1
    };
    let window = Region {
        min_x: 0,
        min_y: 0,
        max_x: samples - 1,
        max_y: 0
    };

    Pxr24Codec::new(vec![channel], window, row_bytes, 1)
}

#[test]
fn half_planes_match_the_wire_format() {
    let mut codec = one_row_codec(SampleType::Half, 16, 32);

    let mut input = Vec::new();

    for half in HALF_RAMP {
        input.extend_from_slice(&half.to_ne_bytes());
    }

    let compressed = codec.compress(&input, 0).unwrap().to_vec();
    let planes = inflate_reference(&compressed);

    // high bytes of the consecutive bit differences, then low bytes
    let mut expected = vec![0_u8; 32];
    let mut previous = 0_u32;

    for (j, half) in HALF_RAMP.iter().enumerate() {
        let diff = u32::from(*half).wrapping_sub(previous);

        previous = u32::from(*half);
        expected[j] = (diff >> 8) as u8;
        expected[16 + j] = diff as u8;
    }

    assert_eq!(planes, expected);
}

#[test]
fn float_planes_hold_the_24_bit_pattern() {
    let mut codec = one_row_codec(SampleType::Float, 1, 4);

    let compressed = codec.compress(&1.0_f32.to_ne_bytes(), 0).unwrap().to_vec();
    let planes = inflate_reference(&compressed);

    // 1.0 quantizes to 0x3F8000 and is the first delta
    assert_eq!(planes, [0x3F, 0x80, 0x00]);
}

#[test]
fn uint_planes_hold_wrapped_deltas() {
    let mut codec = one_row_codec(SampleType::Uint, 4, 16);

    let values: [u32; 4] = [10, 7, u32::MAX, 3];
    let mut input = Vec::new();

    for value in values {
        input.extend_from_slice(&value.to_ne_bytes());
    }

    let compressed = codec.compress(&input, 0).unwrap().to_vec();
    let planes = inflate_reference(&compressed);

    let mut expected = vec![0_u8; 16];
    let mut previous = 0_u32;

    for (j, value) in values.iter().enumerate() {
        let diff = value.wrapping_sub(previous);

        previous = *value;
        expected[j] = (diff >> 24) as u8;
        expected[4 + j] = (diff >> 16) as u8;
        expected[8 + j] = (diff >> 8) as u8;
        expected[12 + j] = diff as u8;
    }

    assert_eq!(planes, expected);
}

#[test]
fn reference_deflated_planes_decode() {
    let mut codec = one_row_codec(SampleType::Uint, 4, 16);

    let values: [u32; 4] = [10, 7, u32::MAX, 3];

    let mut planes = vec![0_u8; 16];
    let mut previous = 0_u32;

    for (j, value) in values.iter().enumerate() {
        let diff = value.wrapping_sub(previous);

        previous = *value;
        planes[j] = (diff >> 24) as u8;
        planes[4 + j] = (diff >> 16) as u8;
        planes[8 + j] = (diff >> 8) as u8;
        planes[12 + j] = diff as u8;
    }

    let stream = deflate_reference(&planes);
    let decoded = codec.uncompress(&stream, 0).unwrap();

    let mut expected = Vec::new();

    for value in values {
        expected.extend_from_slice(&value.to_ne_bytes());
    }

    assert_eq!(decoded, expected);
}
