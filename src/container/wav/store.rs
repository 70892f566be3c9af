use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::header::{HEADER_LEN, WavHeader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
	Fresh,
	Loaded,
}

#[derive(Debug)]
pub struct WavStore<S> {
	stream: S,
	header: WavHeader,
	path: Option<PathBuf>,
	state: StoreState,
}

impl WavStore<File> {
	// Opens an existing container, or creates one holding the default header.
	pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
		let path = path.as_ref();
		match OpenOptions::new().read(true).write(true).open(path) {
			Ok(file) => {
				let mut store = Self::new(file)?;
				store.path = Some(path.to_path_buf());
				Ok(store)
			}
			Err(e) if e.kind() == io::ErrorKind::NotFound => {
				let file = OpenOptions::new().read(true).write(true).create(true).open(path)?;
				let mut store = Self::create(file)?;
				store.path = Some(path.to_path_buf());
				Ok(store)
			}
			Err(e) => Err(e),
		}
	}
}

impl<S> WavStore<S> {
	pub fn header(&self) -> &WavHeader {
		&self.header
	}

	pub fn header_mut(&mut self) -> &mut WavHeader {
		&mut self.header
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	pub fn state(&self) -> StoreState {
		self.state
	}

	pub fn into_inner(self) -> S {
		self.stream
	}

	pub fn bytes_per_sample(&self) -> u16 {
		self.header.bits_per_sample / 8
	}

	pub fn frames_per_channel(&self) -> u32 {
		let frame_size = u32::from(self.header.channels) * u32::from(self.bytes_per_sample());
		if frame_size == 0 {
			return 0;
		}
		// data_size counts the data chunk marker and size fields on top of the payload.
		self.header.data_size.saturating_sub(8) / frame_size
	}

	pub fn duration_seconds(&self) -> u32 {
		if self.header.sample_rate == 0 {
			return 0;
		}
		self.frames_per_channel() / self.header.sample_rate
	}

	fn sample_offset(&self, channel: u16, frame: u32) -> u64 {
		let bps = u64::from(self.bytes_per_sample());
		let channels = u64::from(self.header.channels);
		HEADER_LEN as u64 + bps * u64::from(channel) + bps * u64::from(frame) * channels
	}
}

impl<S: Read + Write + Seek> WavStore<S> {
	// Reads the header of an already populated stream.
	pub fn new(mut stream: S) -> io::Result<Self> {
		stream.seek(SeekFrom::Start(0))?;
		let mut bytes = [0u8; HEADER_LEN];
		stream.read_exact(&mut bytes)?;
		let header = WavHeader::from_bytes(&bytes);
		Ok(Self { stream, header, path: None, state: StoreState::Loaded })
	}

	// Writes the default header into an empty stream.
	pub fn create(stream: S) -> io::Result<Self> {
		let header = WavHeader::default();
		let mut store = Self { stream, header, path: None, state: StoreState::Fresh };
		store.save_header()?;
		Ok(store)
	}

	// The loop stops at the first stream fault and returns the bytes gathered so
	// far, so a truncated file yields a truncated result. The frame count comes
	// straight from a header field, so the buffer grows only as bytes arrive.
	pub fn read_channel(&mut self, channel: u16, frames: u32) -> Vec<u8> {
		let bps = usize::from(self.bytes_per_sample());
		let mut out = Vec::new();
		let mut sample = vec![0u8; bps];
		for frame in 0..frames {
			let offset = self.sample_offset(channel, frame);
			if self.stream.seek(SeekFrom::Start(offset)).is_err() {
				break;
			}
			if self.stream.read_exact(&mut sample).is_err() {
				break;
			}
			out.extend_from_slice(&sample);
		}
		out
	}

	// Trailing bytes that do not fill a whole sample are ignored; a stream fault
	// stops the loop silently, mirroring the read side.
	pub fn write_channel(&mut self, channel: u16, bytes: &[u8]) {
		let bps = usize::from(self.bytes_per_sample());
		if bps == 0 {
			return;
		}
		let frames = bytes.len() / bps;
		for frame in 0..frames {
			let offset = self.sample_offset(channel, frame as u32);
			if self.stream.seek(SeekFrom::Start(offset)).is_err() {
				break;
			}
			if self.stream.write_all(&bytes[frame * bps..(frame + 1) * bps]).is_err() {
				break;
			}
		}
	}

	pub fn clear_channel(&mut self, channel: u16) {
		let frames = self.frames_per_channel();
		let zeros = vec![0u8; usize::from(self.bytes_per_sample())];
		for frame in 0..frames {
			let offset = self.sample_offset(channel, frame);
			if self.stream.seek(SeekFrom::Start(offset)).is_err() {
				break;
			}
			if self.stream.write_all(&zeros).is_err() {
				break;
			}
		}
	}

	pub fn clear_all_channels(&mut self) {
		for channel in 0..self.header.channels {
			self.clear_channel(channel);
		}
	}

	// In-memory header edits are not visible in the stream until saved.
	pub fn save_header(&mut self) -> io::Result<()> {
		self.stream.seek(SeekFrom::Start(0))?;
		self.stream.write_all(&self.header.to_bytes())
	}
}
