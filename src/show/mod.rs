use prettytable::{Table, row};

use crate::container::{WavStore, fourcc};

pub fn print_store_info<S>(store: &WavStore<S>) {
	let header = store.header();
	let path = match store.path() {
		Some(path) => path.display().to_string(),
		None => String::from("<memory>"),
	};

	let mut table = Table::new();
	table.add_row(row!["File", path]);
	table.add_row(row!["RIFF type", fourcc(header.riff_type)]);
	table.add_row(row!["WAVE type", header.audio_format]);
	table.add_row(row!["Channels count", header.channels]);
	table.add_row(row!["Sample rate", format!("{} Hz", header.sample_rate)]);
	table.add_row(row!["Bits per sample", header.bits_per_sample]);
	table.add_row(row!["Data size", format!("{} bytes", header.data_size)]);
	table.add_row(row!["Duration", format!("{} seconds", store.duration_seconds())]);
	table.printstd();
}
