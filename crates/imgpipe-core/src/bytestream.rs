/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Little endian aware byte readers and writers
//!
//! Image headers store multi-byte integers in little endian, these
//! helpers read them out of an in-memory buffer and write them back.
use std::fmt::{Debug, Formatter};

/// Errors from reading past the end of a buffer
pub enum ByteIoError {
    /// requested, available
    NotEnoughBytes(usize, usize),
    SeekError(usize, usize)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteIoError::NotEnoughBytes(expected, found) => {
                write!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::SeekError(position, length) => {
                write!(
                    f,
                    "Cannot seek to position {position}, buffer length is {length}"
                )
            }
        }
    }
}

/// A reader over an in-memory buffer
pub struct ByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader starting at the first byte of `stream`
    pub const fn new(stream: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream,
            position: 0
        }
    }

    /// Total length of the underlying buffer
    pub const fn len(&self) -> usize {
        self.stream.len()
    }

    /// Number of bytes that have not been read yet
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Skip `num` bytes ahead
    pub fn skip(&mut self, num: usize) -> Result<(), ByteIoError> {
        self.set_position(self.position.saturating_add(num))
    }

    /// Move the read offset to `position`
    ///
    /// Seeking to exactly the end of the buffer is allowed
    pub fn set_position(&mut self, position: usize) -> Result<(), ByteIoError> {
        if position > self.stream.len() {
            return Err(ByteIoError::SeekError(position, self.stream.len()));
        }
        self.position = position;
        Ok(())
    }

    /// Read a single byte or error out if the buffer has been exhausted
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let [byte] = self.read_fixed_bytes_or_error::<1>()?;
        Ok(byte)
    }

    /// Read `N` bytes into an array
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Return the next `num` bytes, advancing the reader past them
    pub fn read_bytes(&mut self, num: usize) -> Result<&'a [u8], ByteIoError> {
        let end = self.position.saturating_add(num);

        match self.stream.get(self.position..end) {
            Some(bytes) => {
                self.position = end;
                Ok(bytes)
            }
            None => Err(ByteIoError::NotEnoughBytes(num, self.remaining()))
        }
    }
}

macro_rules! get_single_type {
    ($read_name:tt,$write_name:tt,$int_type:tt) => {
        impl<'a> ByteReader<'a> {
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $read_name(&mut self) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let space = self.read_fixed_bytes_or_error::<SIZE_OF_VAL>()?;

                Ok($int_type::from_le_bytes(space))
            }
        }

        impl ByteWriter {
            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[inline]
            pub fn $write_name(&mut self, value: $int_type) {
                self.buffer.extend_from_slice(&value.to_le_bytes());
            }
        }
    };
}

/// A growable byte writer
#[derive(Default)]
pub struct ByteWriter {
    buffer: Vec<u8>
}

impl ByteWriter {
    /// Create a writer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> ByteWriter {
        ByteWriter {
            buffer: Vec::with_capacity(capacity)
        }
    }

    pub fn write_all(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Number of bytes written so far
    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    /// Consume the writer returning written bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

get_single_type!(get_u16_le_err, write_u16_le, u16);
get_single_type!(get_u32_le_err, write_u32_le, u32);
get_single_type!(get_i32_le_err, write_i32_le, i32);

#[cfg(test)]
mod tests {
    use crate::bytestream::{ByteReader, ByteWriter};

    #[test]
    fn little_endian_reads() {
        let data = [0x42, 0x4D, 0x36, 0x00, 0x0C, 0x00, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut reader = ByteReader::new(&data);

        assert_eq!(reader.get_u16_le_err().unwrap(), 0x4D42);
        assert_eq!(reader.get_u32_le_err().unwrap(), 0x000C_0036);
        assert_eq!(reader.get_i32_le_err().unwrap(), -1);
        assert!(reader.get_u8_err().is_err());
    }

    #[test]
    fn writes_are_readable() {
        let mut writer = ByteWriter::with_capacity(10);
        writer.write_u16_le(19778);
        writer.write_i32_le(-300);
        writer.write_u32_le(54);

        let bytes = writer.into_inner();
        let mut reader = ByteReader::new(&bytes);

        assert_eq!(reader.get_u16_le_err().unwrap(), 19778);
        assert_eq!(reader.get_i32_le_err().unwrap(), -300);
        assert_eq!(reader.get_u32_le_err().unwrap(), 54);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn seeking_past_end_fails() {
        let data = [0; 4];
        let mut reader = ByteReader::new(&data);

        assert!(reader.set_position(4).is_ok());
        assert!(reader.set_position(5).is_err());
        assert!(reader.skip(1).is_err());
    }
}
