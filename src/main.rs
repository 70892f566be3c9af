use wavglue::cli::{Args, Pipeline};

fn main() {
	let args = Args::parse();

	let pipeline = Pipeline::new(args.left, args.right, args.output, args.volume);
	match pipeline.run() {
		Ok(()) => {}
		Err(e) => {
			eprintln!("Error: {}", e);
			eprintln!("Use --help to get help");
			std::process::exit(2);
		}
	}
}
