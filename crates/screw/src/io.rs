//! Binary interchange layout.
//!
//! Eight little-endian `f32` values in index order (`real.x, real.y, real.z,
//! real.w, dual.x, dual.y, dual.z, dual.w`), no padding, no length prefix.

use std::io::{Read, Write};

use screw_math::Quat;
use tracing::debug;

use crate::dual_quat::{DualQuat, COMPONENTS};
use crate::error::Result;

/// Size of one encoded dual quaternion.
pub const ENCODED_LEN: usize = COMPONENTS * 4;

impl DualQuat<f32> {
    /// Encode into the fixed 32-byte layout.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut out = [0u8; ENCODED_LEN];
        for (chunk, v) in out.chunks_exact_mut(4).zip(self.to_array()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
        out
    }

    /// Decode the fixed 32-byte layout. Components are stored verbatim.
    pub fn from_bytes(bytes: &[u8; ENCODED_LEN]) -> Self {
        let mut values = [0f32; COMPONENTS];
        for (v, chunk) in values.iter_mut().zip(bytes.chunks_exact(4)) {
            *v = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        DualQuat::from_parts(
            Quat::new(values[0], values[1], values[2], values[3]),
            Quat::new(values[4], values[5], values[6], values[7]),
        )
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        debug!(bytes = ENCODED_LEN, "wrote dual quaternion");
        Ok(())
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; ENCODED_LEN];
        reader.read_exact(&mut buf)?;
        debug!(bytes = ENCODED_LEN, "read dual quaternion");
        Ok(Self::from_bytes(&buf))
    }
}
