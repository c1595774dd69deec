//! cloudinary-config: inspect the configuration a Cloudinary SDK would resolve

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
