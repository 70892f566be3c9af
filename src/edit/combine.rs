use std::io::{Read, Seek, Write};

use crate::container::WavStore;
use crate::error::WavResult;

// The input with the larger payload drives the result header; ties keep the
// first input.
fn select_primary<'a, S>(
	first: &'a mut WavStore<S>,
	second: &'a mut WavStore<S>,
) -> (&'a mut WavStore<S>, &'a mut WavStore<S>) {
	if second.header().data_size > first.header().data_size {
		(second, first)
	} else {
		(first, second)
	}
}

pub fn combine<S: Read + Write + Seek>(
	first: &mut WavStore<S>,
	second: &mut WavStore<S>,
	result: &mut WavStore<S>,
) -> WavResult<()> {
	let (primary, secondary) = select_primary(first, second);
	let primary_header = *primary.header();

	let header = result.header_mut();
	header.channels = 2;
	header.sample_rate = primary_header.sample_rate;
	header.bits_per_sample = primary_header.bits_per_sample;
	// The mono size fields are doubled as-is, chunk overhead included, wrapping
	// on overflow; byte rate and block alignment keep whatever the destination
	// already had.
	header.riff_size = primary_header.riff_size.wrapping_mul(2);
	header.data_size = primary_header.data_size.wrapping_mul(2);
	result.save_header()?;

	let primary_frames = primary.frames_per_channel();
	let secondary_frames = secondary.frames_per_channel();
	let left = primary.read_channel(0, primary_frames);
	let right = secondary.read_channel(0, secondary_frames);
	result.write_channel(0, &left);
	result.write_channel(1, &right);
	Ok(())
}
