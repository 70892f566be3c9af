pub mod header;
pub mod store;
pub mod validate;

pub use header::{DATA_MAGIC, FMT_MAGIC, HEADER_LEN, RIFF_MAGIC, WAVE_MAGIC, WavHeader, fourcc};
pub use store::{StoreState, WavStore};
pub use validate::{MONO_8K_16BIT, PcmProfile, WavValidator};
