pub mod wav;

pub use wav::{
	HEADER_LEN, MONO_8K_16BIT, PcmProfile, StoreState, WavHeader, WavStore, WavValidator, fourcc,
};
