use std::path::Path;

use log::{debug, info};
use ndarray::{Array3, ArrayView3};

use super::{
    axis_word, check_element_type, payload_len, value_at, write_file, ElementSize, MappedFile,
    Scalar,
};
use crate::Result;

pub const DEFAULT_FILE: &str = "positions.bin";
pub const HEADER_LEN: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionsHeader {
    pub simulation_size: u32,
    pub steps: u32,
    pub element_size: ElementSize,
    pub dimensions: u32,
}

impl PositionsHeader {
    /// Shape of the decoded array: `(steps, dimensions, simulation_size)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.steps as usize,
            self.dimensions as usize,
            self.simulation_size as usize,
        )
    }

    pub fn payload_len(&self) -> Option<u64> {
        payload_len(
            &[self.steps, self.simulation_size, self.dimensions],
            self.element_size,
        )
    }
}

/// A mapped positions file whose header and length have been validated.
pub struct PositionFile {
    file: MappedFile,
    header: PositionsHeader,
}

impl PositionFile {
    pub fn open(path: impl AsRef<Path>) -> Result<PositionFile> {
        let file = MappedFile::open(path.as_ref(), HEADER_LEN)?;
        let header = PositionsHeader {
            simulation_size: file.header_word(0),
            steps: file.header_word(1),
            element_size: ElementSize::from_raw(file.header_word(2))?,
            dimensions: file.header_word(3),
        };
        debug!("{}: {:?}", file.path(), header);

        file.payload(HEADER_LEN, header.payload_len())?;
        Ok(PositionFile { file, header })
    }

    pub fn header(&self) -> &PositionsHeader {
        &self.header
    }

    /// Decodes the payload as `T`, axes `(step, dimension, body)`.
    pub fn read<T: Scalar>(&self) -> Result<Array3<T>> {
        check_element_type::<T>(self.header.element_size)?;
        let payload = self.file.payload(HEADER_LEN, self.header.payload_len())?;
        let (steps, dimensions, bodies) = self.header.shape();

        // on disk: step * bodies * dimensions + body * dimensions + dim
        Ok(Array3::from_shape_fn(
            (steps, dimensions, bodies),
            |(step, dim, body)| value_at(payload, (step * bodies + body) * dimensions + dim),
        ))
    }

    pub fn load(&self) -> Result<Positions> {
        match self.header.element_size {
            ElementSize::F32 => Ok(Positions::F32(self.read()?)),
            ElementSize::F64 => Ok(Positions::F64(self.read()?)),
        }
    }
}

/// Trajectory with shape `(steps, dimensions, simulation_size)`.
#[derive(Clone, Debug, PartialEq)]
pub enum Positions {
    F32(Array3<f32>),
    F64(Array3<f64>),
}

impl Positions {
    pub fn shape(&self) -> &[usize] {
        match self {
            Positions::F32(data) => data.shape(),
            Positions::F64(data) => data.shape(),
        }
    }

    pub fn element_size(&self) -> ElementSize {
        match self {
            Positions::F32(_) => ElementSize::F32,
            Positions::F64(_) => ElementSize::F64,
        }
    }
}

pub fn read_positions(path: impl AsRef<Path>) -> Result<Positions> {
    let path = path.as_ref();
    info!("Reading {}...", path.display());

    let positions = PositionFile::open(path)?.load()?;

    info!("Loaded {:?}", positions.shape());
    Ok(positions)
}

/// Writes `data`, shaped `(steps, dimensions, simulation_size)`, in the
/// simulator's on-disk layout.
pub fn write_positions<T: Scalar>(path: impl AsRef<Path>, data: ArrayView3<T>) -> Result<()> {
    let (steps, dimensions, bodies) = data.dim();
    let header = [
        axis_word("bodies", bodies)?,
        axis_word("steps", steps)?,
        T::ELEMENT_SIZE.bytes() as u32,
        axis_word("dimensions", dimensions)?,
    ];
    let on_disk = data.permuted_axes([0, 2, 1]);
    write_file(path.as_ref(), &header, on_disk.iter().copied())
}
