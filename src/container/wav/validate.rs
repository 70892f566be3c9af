use std::fmt::Display;

use super::header::{RIFF_MAGIC, WAVE_MAGIC, fourcc};
use super::store::WavStore;
use crate::error::{WavError, WavResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmProfile {
	pub audio_format: u16,
	pub channels: u16,
	pub sample_rate: u32,
	pub bits_per_sample: u16,
}

// The one encoding this tool accepts: mono 8 kHz 16-bit linear PCM.
pub const MONO_8K_16BIT: PcmProfile =
	PcmProfile { audio_format: 1, channels: 1, sample_rate: 8000, bits_per_sample: 16 };

pub struct WavValidator {
	profile: PcmProfile,
}

impl WavValidator {
	pub fn new(profile: PcmProfile) -> Self {
		Self { profile }
	}

	// Checks the container magics and the profile fields in a fixed order; the
	// first mismatch wins. Sub-chunk markers, sizes, byte rate and block
	// alignment stay unchecked.
	pub fn validate<S>(&self, store: &WavStore<S>) -> WavResult<()> {
		let header = store.header();
		let profile = self.profile;
		let path = match store.path() {
			Some(path) => path.display().to_string(),
			None => String::from("<memory>"),
		};

		check_field(&path, "RIFF", fourcc(header.riff), fourcc(RIFF_MAGIC))?;
		check_field(&path, "RIFF type", fourcc(header.riff_type), fourcc(WAVE_MAGIC))?;
		check_field(&path, "WAVE type", header.audio_format, profile.audio_format)?;
		check_field(&path, "channels count", header.channels, profile.channels)?;
		check_field(&path, "sample rate", header.sample_rate, profile.sample_rate)?;
		check_field(&path, "bits per sample", header.bits_per_sample, profile.bits_per_sample)?;
		Ok(())
	}
}

impl Default for WavValidator {
	fn default() -> Self {
		Self::new(MONO_8K_16BIT)
	}
}

fn check_field<T: PartialEq + Display>(
	path: &str,
	field: &'static str,
	actual: T,
	expected: T,
) -> WavResult<()> {
	if actual != expected {
		return Err(WavError::format_mismatch(path, field, expected, actual));
	}
	Ok(())
}
