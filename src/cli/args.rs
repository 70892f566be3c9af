use clap::Parser;
use clap::error::ErrorKind;

#[derive(Parser, Debug)]
#[command(name = "wavglue")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	#[arg(short, long, value_name = "FILE", help = "Mono WAVE PCM file for the left channel")]
	pub left: Option<String>,

	#[arg(short, long, value_name = "FILE", help = "Mono WAVE PCM file for the right channel")]
	pub right: Option<String>,

	#[arg(
		short = 'm',
		long = "volume",
		value_name = "FACTOR",
		default_value_t = 1.0,
		help = "Volume multiplier for the combined file, 0 to 2"
	)]
	pub volume: f32,

	#[arg(
		short,
		long,
		value_name = "FILE",
		help = "Stereo WAVE PCM output file, created when missing"
	)]
	pub output: Option<String>,
}

impl Args {
	// Help and version requests exit 0; anything else the parser rejects exits 3,
	// leaving exit code 2 to failures inside the pipeline.
	pub fn parse() -> Self {
		match <Self as Parser>::try_parse() {
			Ok(args) => args,
			Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
				let _ = e.print();
				std::process::exit(0);
			}
			Err(e) => {
				let _ = e.print();
				std::process::exit(3);
			}
		}
	}
}
