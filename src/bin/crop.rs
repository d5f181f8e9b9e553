use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use obj_crop::{Args, crop_file};

pub fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    println!("Processing {}...", args.input);
    match crop_file(
        Path::new(&args.input),
        Path::new(&args.output),
        &args.thresholds(),
    ) {
        Ok(stats) => {
            println!("Success! Created {}", args.output);
            println!("Original vertices: {}", stats.vertices_in);
            println!("Retained vertices: {}", stats.vertices_kept);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
