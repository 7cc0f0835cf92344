//! Generates the man page from the CLI definitions.

use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/cli_args.rs"]
mod cli_args;

use clap::CommandFactory;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli_args.rs");

    let out_dir = match std::env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return Ok(()),
    };

    let cmd = cli_args::Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    std::fs::write(out_dir.join("accessible-shades.1"), buffer)?;

    Ok(())
}
