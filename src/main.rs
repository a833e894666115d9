#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "sphereprint", about = "Spherical factory blueprint inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info {
		path: PathBuf,
	},
	Decode {
		path: PathBuf,
	},
	Buildings {
		path: PathBuf,
	},
	Lanes {
		path: PathBuf,
	},
	Export(cmd::export::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> sphereprint::blueprint::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info { path } => cmd::info::run(path),
		Commands::Decode { path } => cmd::decode::run(path),
		Commands::Buildings { path } => cmd::buildings::run(path),
		Commands::Lanes { path } => cmd::lanes::run(path),
		Commands::Export(args) => cmd::export::run(args),
	}
}
