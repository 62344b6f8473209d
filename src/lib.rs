/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core compression primitives for OpenEXR images
//!
//! This crate implements the numeric heavy parts of an EXR codec,
//! leaving the container format (headers, attributes, chunk offsets)
//! to the caller.
//!
//! # Features
//! - The Pxr24 compressor and decompressor, lossless for `HALF` and
//!   `UINT` channels and lossy for `FLOAT` channels which are rounded
//!   to 24 bits before compression.
//! - A table accelerated canonical Huffman decoder for the
//!   entropy coded parts of PIZ blocks.
//! - Conversion of common pixel layouts into packed 32-bit float
//!   RGBA, the working format of most HDR pipelines.
//!
//! # Usage notes
//! The Pxr24 codec consumes pixel data arranged the way EXR scan line
//! blocks arrange it, for each row every channel's samples form one
//! contiguous run. The codec does not deinterleave pixels itself.
//!
//! The Huffman decoder is built once per compressed table and may be
//! reused for any number of payload decodes that reference it.
#![forbid(unsafe_code)]
extern crate alloc;
extern crate core;

pub extern crate zune_core;

pub use convert::convert_to_rgba_f32;
pub use errors::{HufDecodeErrors, Pxr24Errors};
pub use huffman::FastHufDecoder;
pub use pxr24::{float24_to_float32, float_to_float24};
pub use pxr24::{ChannelInfo, Pxr24Codec, Region, SampleType};

mod convert;
mod errors;
mod huffman;
mod pxr24;
