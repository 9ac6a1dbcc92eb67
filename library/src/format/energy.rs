use std::path::Path;

use log::{debug, info};
use ndarray::{Array2, ArrayView2};

use super::{
    axis_word, check_element_type, payload_len, value_at, write_file, ElementSize, MappedFile,
    Scalar,
};
use crate::error::Error;
use crate::Result;

pub const DEFAULT_FILE: &str = "energy.bin";
pub const HEADER_LEN: usize = 8;
pub const COMPONENTS: usize = 2;

pub const KINETIC: usize = 0;
pub const GRAVITATIONAL: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnergyHeader {
    pub steps: u32,
    pub element_size: ElementSize,
}

impl EnergyHeader {
    pub fn payload_len(&self) -> Option<u64> {
        payload_len(&[self.steps, COMPONENTS as u32], self.element_size)
    }
}

pub struct EnergyFile {
    file: MappedFile,
    header: EnergyHeader,
}

impl EnergyFile {
    pub fn open(path: impl AsRef<Path>) -> Result<EnergyFile> {
        let file = MappedFile::open(path.as_ref(), HEADER_LEN)?;
        let header = EnergyHeader {
            steps: file.header_word(0),
            element_size: ElementSize::from_raw(file.header_word(1))?,
        };
        debug!("{}: {:?}", file.path(), header);

        file.payload(HEADER_LEN, header.payload_len())?;
        Ok(EnergyFile { file, header })
    }

    pub fn header(&self) -> &EnergyHeader {
        &self.header
    }

    /// Decodes the payload as `T`, axes `(component, step)`.
    pub fn read<T: Scalar>(&self) -> Result<Array2<T>> {
        check_element_type::<T>(self.header.element_size)?;
        let payload = self.file.payload(HEADER_LEN, self.header.payload_len())?;

        // on disk: one (kinetic, gravitational) pair per step
        Ok(Array2::from_shape_fn(
            (COMPONENTS, self.header.steps as usize),
            |(component, step)| value_at(payload, step * COMPONENTS + component),
        ))
    }

    pub fn load(&self) -> Result<Energy> {
        match self.header.element_size {
            ElementSize::F32 => Ok(Energy::F32(self.read()?)),
            ElementSize::F64 => Ok(Energy::F64(self.read()?)),
        }
    }
}

/// Energy per step with shape `(2, steps)`: row 0 kinetic, row 1 gravitational.
#[derive(Clone, Debug, PartialEq)]
pub enum Energy {
    F32(Array2<f32>),
    F64(Array2<f64>),
}

impl Energy {
    pub fn shape(&self) -> &[usize] {
        match self {
            Energy::F32(data) => data.shape(),
            Energy::F64(data) => data.shape(),
        }
    }
}

pub fn read_energy(path: impl AsRef<Path>) -> Result<Energy> {
    let path = path.as_ref();
    info!("Reading {}...", path.display());

    let energy = EnergyFile::open(path)?.load()?;

    info!("Loaded {:?}", energy.shape());
    Ok(energy)
}

/// Writes `data`, shaped `(2, steps)`, in the simulator's on-disk layout.
pub fn write_energy<T: Scalar>(path: impl AsRef<Path>, data: ArrayView2<T>) -> Result<()> {
    let (components, steps) = data.dim();
    if components != COMPONENTS {
        return Err(Error::ShapeError(ndarray::ShapeError::from_kind(
            ndarray::ErrorKind::IncompatibleShape,
        )));
    }
    let header = [axis_word("steps", steps)?, T::ELEMENT_SIZE.bytes() as u32];
    write_file(path.as_ref(), &header, data.t().iter().copied())
}
