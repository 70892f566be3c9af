use std::path::Path;

use crate::container::{MONO_8K_16BIT, StoreState, WavStore, WavValidator};
use crate::edit::{combine, multiply_volume};
use crate::error::{WavError, WavResult};
use crate::show::print_store_info;

pub struct Pipeline {
	left_path: Option<String>,
	right_path: Option<String>,
	output_path: Option<String>,
	volume: f32,
}

impl Pipeline {
	pub fn new(
		left_path: Option<String>,
		right_path: Option<String>,
		output_path: Option<String>,
		volume: f32,
	) -> Self {
		Self { left_path, right_path, output_path, volume }
	}

	pub fn run(&self) -> WavResult<()> {
		let left_path = require_path(&self.left_path, "left channel input")?;
		let right_path = require_path(&self.right_path, "right channel input")?;
		let output_path = require_path(&self.output_path, "output")?;

		require_exists(left_path, "first")?;
		println!("First file is {}", left_path);
		require_exists(right_path, "second")?;
		println!("Second file is {}", right_path);
		println!("Multiplier is {}", self.volume);
		println!();

		let mut first = WavStore::open(left_path)?;
		let mut second = WavStore::open(right_path)?;

		let validator = WavValidator::new(MONO_8K_16BIT);
		validator.validate(&first)?;
		validator.validate(&second)?;

		print_store_info(&first);
		print_store_info(&second);

		let mut result = WavStore::open(output_path)?;
		if result.state() == StoreState::Fresh {
			println!("File at {} not found, created a new one", output_path);
		}

		println!("Channels combining...");
		combine(&mut first, &mut second, &mut result)?;
		println!("Managing volume...");
		multiply_volume(&mut result, self.volume)?;

		println!();
		print_store_info(&result);
		println!("Done!");
		Ok(())
	}
}

fn require_path<'a>(path: &'a Option<String>, what: &str) -> WavResult<&'a str> {
	match path {
		Some(path) => Ok(path.as_str()),
		None => Err(WavError::invalid_argument(format!("missing path to the {}", what))),
	}
}

fn require_exists(path: &str, which: &str) -> WavResult<()> {
	if !Path::new(path).exists() {
		return Err(WavError::invalid_argument(format!("{} file not found: {}", which, path)));
	}
	Ok(())
}
