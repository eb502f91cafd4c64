//! Furniture SWF inspection utility.
//!
//! Provides four subcommands:
//! - `states`: print the animation state count of a furniture asset.
//! - `info`: show the container header, optionally as JSON.
//! - `tags`: list the tag records of the container.
//! - `xml`: dump the embedded visualization document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use furni_rs::extract;
use furni_rs::prelude::file::swf::File as SwfFile;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::States(opts) => run_states(opts),
		Command::Info(opts) => run_info(opts),
		Command::Tags(opts) => run_tags(opts),
		Command::Xml(opts) => run_xml(opts),
	}
}

#[derive(Parser)]
#[command(name = "furni_utils")]
#[command(author = "furni-rs project")]
#[command(version)]
#[command(about = "Inspect furniture SWF assets and their visualization data", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print the animation state count of a furniture asset
	States(StatesArgs),
	/// Show the container header
	Info(InfoArgs),
	/// List the tag records of the container
	Tags(TagsArgs),
	/// Dump the embedded visualization document
	Xml(XmlArgs),
}

#[derive(Args)]
struct StatesArgs {
	/// Path to a furniture .swf file
	#[arg(value_name = "FILE")]
	file: PathBuf,
}

#[derive(Args)]
struct InfoArgs {
	/// Path to a furniture .swf file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Emit the report as JSON
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct TagsArgs {
	/// Path to a furniture .swf file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Show a hex preview of each tag body
	#[arg(short, long, default_value_t = false)]
	preview: bool,
}

#[derive(Args)]
struct XmlArgs {
	/// Path to a furniture .swf file
	#[arg(value_name = "FILE")]
	file: PathBuf,
}

fn run_states(args: StatesArgs) -> Result<()> {
	let states = extract::state_count(&args.file)
		.with_context(|| format!("Failed to extract states from {}", args.file.display()))?;
	println!("{states}");
	Ok(())
}

fn run_info(args: InfoArgs) -> Result<()> {
	let file = open_container(&args.file)?;

	if args.json {
		let report = serde_json::json!({
			"path": args.file.display().to_string(),
			"sourceCompression": file.compression().to_string(),
			"header": file.header(),
			"tagCount": file.tags().count(),
			"binaryDataCount": file.binary_data().count(),
		});
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("File: {}", args.file.display());
	println!("{file}");
	println!("- Tags: {}", file.tags().count());
	println!("- Binary Data Records: {}", file.binary_data().count());
	Ok(())
}

fn run_tags(args: TagsArgs) -> Result<()> {
	let file = open_container(&args.file)?;

	if file.tags().next().is_none() {
		println!("No tag records found.");
		return Ok(());
	}

	for (index, tag) in file.tags().enumerate() {
		let name = tag.name().unwrap_or("Unknown");
		if args.preview {
			let preview_len = tag.body().len().min(16);
			let ellipsis = if tag.body().len() > preview_len {
				".."
			} else {
				""
			};
			println!(
				"{index:3}  code {:4}  {name:<28} {:7} bytes  {}{ellipsis}",
				tag.code(),
				tag.body().len(),
				hex::encode(&tag.body()[..preview_len]),
			);
		} else {
			println!(
				"{index:3}  code {:4}  {name:<28} {:7} bytes",
				tag.code(),
				tag.body().len()
			);
		}
	}

	Ok(())
}

fn run_xml(args: XmlArgs) -> Result<()> {
	let file = open_container(&args.file)?;
	let Some(text) = extract::find_visualization(&file) else {
		bail!("{} carries no visualization document", args.file.display());
	};
	println!("{text}");
	Ok(())
}

fn open_container(path: &Path) -> Result<SwfFile> {
	SwfFile::open(path).with_context(|| format!("Failed to load {}", path.display()))
}
