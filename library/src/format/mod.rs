//! Binary files written by the n-body simulator.
//!
//! Both formats start with a little-endian `u32` header followed by a dense
//! little-endian payload of `f32` or `f64` values. Files are memory-mapped
//! and their length is checked against the header before any value is read.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

use crate::error::Error;
use crate::Result;

pub mod energy;
pub mod positions;

pub use energy::{read_energy, write_energy, Energy, EnergyFile, EnergyHeader};
pub use positions::{read_positions, write_positions, PositionFile, Positions, PositionsHeader};

const WORD_LEN: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementSize {
    F32,
    F64,
}

impl ElementSize {
    pub fn from_raw(size: u32) -> Result<Self> {
        match size {
            4 => Ok(ElementSize::F32),
            8 => Ok(ElementSize::F64),
            other => Err(Error::UnsupportedElementSize(other)),
        }
    }

    pub fn bytes(self) -> usize {
        match self {
            ElementSize::F32 => 4,
            ElementSize::F64 => 8,
        }
    }
}

/// Floating point type that can appear in a payload.
pub trait Scalar: Copy + Default + Into<f64> + std::fmt::Debug + 'static {
    const ELEMENT_SIZE: ElementSize;

    /// `bytes` is exactly `ELEMENT_SIZE.bytes()` long.
    fn from_le_slice(bytes: &[u8]) -> Self;

    fn extend_le(self, out: &mut Vec<u8>);
}

impl Scalar for f32 {
    const ELEMENT_SIZE: ElementSize = ElementSize::F32;

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(bytes);
        f32::from_le_bytes(raw)
    }

    fn extend_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl Scalar for f64 {
    const ELEMENT_SIZE: ElementSize = ElementSize::F64;

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        f64::from_le_bytes(raw)
    }

    fn extend_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

pub(crate) struct MappedFile {
    path: String,
    map: Mmap,
}

impl MappedFile {
    /// Maps `path` read-only. Files shorter than `header_len` are rejected
    /// before mapping.
    pub(crate) fn open(path: &Path, header_len: usize) -> Result<Self> {
        let display = path.display().to_string();
        let file = File::open(path).map_err(|err| Error::FileOpenError(display.clone(), err))?;
        let file_len = file
            .metadata()
            .map_err(|err| Error::FileOpenError(display.clone(), err))?
            .len();
        if file_len < header_len as u64 {
            return Err(Error::TruncatedHeader(display, file_len as usize, header_len));
        }

        let map = map_read_only(&file).map_err(|err| Error::FileMapError(display.clone(), err))?;
        Ok(MappedFile { path: display, map })
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// Reads the `index`-th `u32` of the header.
    pub(crate) fn header_word(&self, index: usize) -> u32 {
        let at = index * WORD_LEN;
        let m = &self.map;
        u32::from_le_bytes([m[at], m[at + 1], m[at + 2], m[at + 3]])
    }

    /// Payload bytes after `header_len`, provided the file holds exactly
    /// `payload_len` of them.
    pub(crate) fn payload(&self, header_len: usize, payload_len: Option<u64>) -> Result<&[u8]> {
        let expected = payload_len
            .and_then(|len| len.checked_add(header_len as u64))
            .ok_or_else(|| Error::HeaderOverflow(self.path.clone()))?;
        let actual = self.map.len() as u64;
        if expected != actual {
            return Err(Error::LengthMismatch {
                path: self.path.clone(),
                expected,
                actual,
            });
        }
        Ok(&self.map[header_len..])
    }
}

#[allow(unsafe_code)]
fn map_read_only(file: &File) -> io::Result<Mmap> {
    // SAFETY: the simulator has finished writing before this tool runs and
    // nothing in this process writes to the file while the map is alive.
    unsafe { Mmap::map(file) }
}

/// Byte length of `counts` values of `element_size`, `None` on overflow.
pub(crate) fn payload_len(counts: &[u32], element_size: ElementSize) -> Option<u64> {
    counts
        .iter()
        .try_fold(element_size.bytes() as u64, |acc, &count| {
            acc.checked_mul(count as u64)
        })
}

/// Value at `index` of a payload whose length was validated against its
/// header.
pub(crate) fn value_at<T: Scalar>(payload: &[u8], index: usize) -> T {
    let width = T::ELEMENT_SIZE.bytes();
    let at = index * width;
    T::from_le_slice(&payload[at..at + width])
}

/// Header word recording the length of `axis`.
pub(crate) fn axis_word(axis: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::AxisTooLong { axis, len })
}

pub(crate) fn check_element_type<T: Scalar>(element_size: ElementSize) -> Result<()> {
    if T::ELEMENT_SIZE != element_size {
        return Err(Error::ElementTypeMismatch {
            file: element_size.bytes(),
            requested: T::ELEMENT_SIZE.bytes(),
        });
    }
    Ok(())
}

pub(crate) fn write_file<T: Scalar>(
    path: &Path,
    header: &[u32],
    values: impl Iterator<Item = T>,
) -> Result<()> {
    let mut bytes = Vec::with_capacity(header.len() * WORD_LEN);
    for word in header {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    for value in values {
        value.extend_le(&mut bytes);
    }

    fs::write(path, bytes).map_err(|err| Error::FileWriteError(path.display().to_string(), err))
}
