/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use zune_inflate::errors::InflateDecodeErrors;

/// Errors raised while building a Huffman table or decoding a
/// Huffman coded bit stream
pub enum HufDecodeErrors {
    /// The code book would read past the supplied byte count
    TableTruncated,
    /// A zero length run extended past the last symbol of the table
    // run end, table end
    TableOverrun(u64, u64),
    /// A symbol id fell outside the number of coded symbols while
    /// filling the decoder tables
    InvalidTable(&'static str),
    /// The payload carries fewer bits than the decoder needs to prime
    /// its registers
    InsufficientBits(usize),
    /// No code length brackets the current decode buffer
    InvalidSymbol,
    /// A run length code appeared before any literal symbol
    RleBeforeFirst,
    /// A symbol run would write past the end of the output
    // run end, output length
    RleOverrun(usize, usize),
    /// A run length of zero
    RleInvalid(u8),
    /// Compressed bits remained after the output was filled
    TrailingData(u64)
}

impl Debug for HufDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            HufDecodeErrors::TableTruncated => {
                writeln!(f, "Truncated huffman table data")
            }
            HufDecodeErrors::TableOverrun(run_end, table_end) => {
                writeln!(
                    f,
                    "Zero length run extends to symbol {run_end} but the table ends at {table_end}"
                )
            }
            HufDecodeErrors::InvalidTable(reason) => {
                writeln!(f, "Invalid huffman table, {reason}")
            }
            HufDecodeErrors::InsufficientBits(bits) => {
                writeln!(
                    f,
                    "Insufficient payload, expected at least 128 bits but found {bits}"
                )
            }
            HufDecodeErrors::InvalidSymbol => {
                writeln!(f, "Decoded an invalid symbol")
            }
            HufDecodeErrors::RleBeforeFirst => {
                writeln!(f, "Run length code with no previous symbol")
            }
            HufDecodeErrors::RleOverrun(run_end, output_len) => {
                writeln!(
                    f,
                    "Symbol run to {run_end} goes beyond the output length {output_len}"
                )
            }
            HufDecodeErrors::RleInvalid(count) => {
                writeln!(f, "Invalid run length of {count}")
            }
            HufDecodeErrors::TrailingData(bits) => {
                writeln!(
                    f,
                    "{bits} compressed bits remain after filling the output"
                )
            }
        }
    }
}

impl Display for HufDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for HufDecodeErrors {}

/// Errors raised by the Pxr24 compressor and decompressor
pub enum Pxr24Errors {
    /// The deflate backend produced a stream larger than the scratch
    /// output buffer
    // compressed size, scratch capacity
    CompressionFailure(usize, usize),
    /// The deflate backend rejected the compressed stream
    DecompressionFailure(InflateDecodeErrors),
    /// The decompressed data ended before every channel was
    /// reconstructed
    // bytes needed, bytes decompressed
    NotEnoughData(usize, usize),
    /// Decompressed data remained after every channel was
    /// reconstructed
    // bytes consumed, bytes decompressed
    TooMuchData(usize, usize)
}

impl Debug for Pxr24Errors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Pxr24Errors::CompressionFailure(size, capacity) => {
                writeln!(
                    f,
                    "Compressed stream of {size} bytes exceeds the output capacity of {capacity} bytes"
                )
            }
            Pxr24Errors::DecompressionFailure(err) => {
                writeln!(f, "Data decompression failed, {:?}", err)
            }
            Pxr24Errors::NotEnoughData(needed, found) => {
                writeln!(
                    f,
                    "Input data are shorter than expected, needed {needed} bytes but decompressed {found}"
                )
            }
            Pxr24Errors::TooMuchData(consumed, found) => {
                writeln!(
                    f,
                    "Input data are longer than expected, consumed {consumed} bytes out of {found}"
                )
            }
        }
    }
}

impl From<InflateDecodeErrors> for Pxr24Errors {
    fn from(value: InflateDecodeErrors) -> Self {
        Pxr24Errors::DecompressionFailure(value)
    }
}

impl Display for Pxr24Errors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for Pxr24Errors {}
