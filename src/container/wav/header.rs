pub const HEADER_LEN: usize = 44;

pub const RIFF_MAGIC: [u8; 4] = *b"RIFF";
pub const WAVE_MAGIC: [u8; 4] = *b"WAVE";
pub const FMT_MAGIC: [u8; 4] = *b"fmt ";
pub const DATA_MAGIC: [u8; 4] = *b"data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
	pub riff: [u8; 4],
	pub riff_size: u32,
	pub riff_type: [u8; 4],
	pub fmt_marker: [u8; 4],
	pub fmt_size: u32,
	pub audio_format: u16,
	pub channels: u16,
	pub sample_rate: u32,
	pub byte_rate: u32,
	pub block_align: u16,
	pub bits_per_sample: u16,
	pub data_marker: [u8; 4],
	// Counts the data chunk's own marker and size fields, so an empty payload reads 8.
	pub data_size: u32,
}

impl Default for WavHeader {
	fn default() -> Self {
		Self {
			riff: RIFF_MAGIC,
			riff_size: 36,
			riff_type: WAVE_MAGIC,
			fmt_marker: FMT_MAGIC,
			fmt_size: 16,
			audio_format: 1,
			channels: 1,
			sample_rate: 8000,
			byte_rate: 16000,
			block_align: 2,
			bits_per_sample: 16,
			data_marker: DATA_MAGIC,
			data_size: 8,
		}
	}
}

impl WavHeader {
	pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
		let mut bytes = [0u8; HEADER_LEN];
		bytes[0..4].copy_from_slice(&self.riff);
		bytes[4..8].copy_from_slice(&self.riff_size.to_le_bytes());
		bytes[8..12].copy_from_slice(&self.riff_type);
		bytes[12..16].copy_from_slice(&self.fmt_marker);
		bytes[16..20].copy_from_slice(&self.fmt_size.to_le_bytes());
		bytes[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
		bytes[22..24].copy_from_slice(&self.channels.to_le_bytes());
		bytes[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
		bytes[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
		bytes[32..34].copy_from_slice(&self.block_align.to_le_bytes());
		bytes[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
		bytes[36..40].copy_from_slice(&self.data_marker);
		bytes[40..44].copy_from_slice(&self.data_size.to_le_bytes());
		bytes
	}

	pub fn from_bytes(bytes: &[u8; HEADER_LEN]) -> Self {
		Self {
			riff: [bytes[0], bytes[1], bytes[2], bytes[3]],
			riff_size: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
			riff_type: [bytes[8], bytes[9], bytes[10], bytes[11]],
			fmt_marker: [bytes[12], bytes[13], bytes[14], bytes[15]],
			fmt_size: u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]),
			audio_format: u16::from_le_bytes([bytes[20], bytes[21]]),
			channels: u16::from_le_bytes([bytes[22], bytes[23]]),
			sample_rate: u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
			byte_rate: u32::from_le_bytes([bytes[28], bytes[29], bytes[30], bytes[31]]),
			block_align: u16::from_le_bytes([bytes[32], bytes[33]]),
			bits_per_sample: u16::from_le_bytes([bytes[34], bytes[35]]),
			data_marker: [bytes[36], bytes[37], bytes[38], bytes[39]],
			data_size: u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]),
		}
	}
}

pub fn fourcc(tag: [u8; 4]) -> String {
	String::from_utf8_lossy(&tag).into_owned()
}
