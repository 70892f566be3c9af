// Hand-built fixtures, independent of the store under test. The data size
// field follows the container convention of counting the data chunk marker
// and size fields, so it reads payload + 8.

pub fn ramp_samples(frames: usize) -> Vec<i16> {
	let mut data = Vec::with_capacity(frames);
	for i in 0..frames {
		data.push((((i * 7) % 20000) as i32 - 10000) as i16);
	}
	data
}

pub fn as_bytes(samples: &[i16]) -> Vec<u8> {
	let mut bytes = Vec::with_capacity(samples.len() * 2);
	for sample in samples {
		bytes.extend_from_slice(&sample.to_le_bytes());
	}
	bytes
}

pub fn mono_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
	let payload_len = (samples.len() * 2) as u32;

	let mut wav = Vec::new();

	wav.extend_from_slice(b"RIFF");
	wav.extend_from_slice(&(36 + payload_len).to_le_bytes());
	wav.extend_from_slice(b"WAVE");

	wav.extend_from_slice(b"fmt ");
	wav.extend_from_slice(&16u32.to_le_bytes());
	wav.extend_from_slice(&1u16.to_le_bytes());
	wav.extend_from_slice(&1u16.to_le_bytes());
	wav.extend_from_slice(&sample_rate.to_le_bytes());
	wav.extend_from_slice(&(sample_rate * 2).to_le_bytes());
	wav.extend_from_slice(&2u16.to_le_bytes());
	wav.extend_from_slice(&16u16.to_le_bytes());

	wav.extend_from_slice(b"data");
	wav.extend_from_slice(&(payload_len + 8).to_le_bytes());

	for sample in samples {
		wav.extend_from_slice(&sample.to_le_bytes());
	}

	wav
}

pub fn stereo_wav(left: &[i16], right: &[i16], sample_rate: u32) -> Vec<u8> {
	let frames = left.len().min(right.len());
	let payload_len = (frames * 4) as u32;

	let mut wav = Vec::new();

	wav.extend_from_slice(b"RIFF");
	wav.extend_from_slice(&(36 + payload_len).to_le_bytes());
	wav.extend_from_slice(b"WAVE");

	wav.extend_from_slice(b"fmt ");
	wav.extend_from_slice(&16u32.to_le_bytes());
	wav.extend_from_slice(&1u16.to_le_bytes());
	wav.extend_from_slice(&2u16.to_le_bytes());
	wav.extend_from_slice(&sample_rate.to_le_bytes());
	wav.extend_from_slice(&(sample_rate * 4).to_le_bytes());
	wav.extend_from_slice(&4u16.to_le_bytes());
	wav.extend_from_slice(&16u16.to_le_bytes());

	wav.extend_from_slice(b"data");
	wav.extend_from_slice(&(payload_len + 8).to_le_bytes());

	for i in 0..frames {
		wav.extend_from_slice(&left[i].to_le_bytes());
		wav.extend_from_slice(&right[i].to_le_bytes());
	}

	wav
}
