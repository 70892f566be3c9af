use std::io::{Read, Seek, Write};

use crate::container::WavStore;
use crate::error::{WavError, WavResult};

pub fn multiply_volume<S: Read + Write + Seek>(
	store: &mut WavStore<S>,
	factor: f32,
) -> WavResult<()> {
	if !(0.0..=2.0).contains(&factor) {
		return Err(WavError::invalid_argument("multiply factor must be in range from 0 to 2"));
	}
	if factor == 1.0 {
		return Ok(());
	}

	let frames = store.frames_per_channel();
	let left = scale_samples(&store.read_channel(0, frames), factor);
	let right = scale_samples(&store.read_channel(1, frames), factor);
	store.write_channel(0, &left);
	store.write_channel(1, &right);
	Ok(())
}

fn scale_samples(bytes: &[u8], factor: f32) -> Vec<u8> {
	let mut out = Vec::with_capacity(bytes.len());
	for chunk in bytes.chunks_exact(2) {
		let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
		// Truncates toward zero and wraps past the i16 range, never saturates.
		let scaled = (f32::from(sample) * factor) as i32 as i16;
		out.extend_from_slice(&scaled.to_le_bytes());
	}
	out
}
