//! Fetch the waste collection calendar for one address and write it to
//! `calendar.ics` in the current directory.

use std::{env::current_dir, fs::write};

use anyhow::Result;
use clap::Parser;
use twc_core::{config::ApiConfig, feed, waste_client::WasteApiClient};

#[derive(Debug, Parser)]
pub struct Arguments {
    /// the postal code, for example "7514BP"
    pub post_code: String,
    /// the house number
    pub house_number: String,
    /// the house letter, when the address has one
    #[arg(long, default_value = " ")]
    pub house_letter: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    let client = WasteApiClient::new(ApiConfig::from_env());
    let calendar = feed::get(
        &client,
        &args.post_code,
        &args.house_number,
        &args.house_letter,
    )
    .await?;
    let mut path = current_dir()?;
    path.push("calendar.ics");
    write(path, calendar)?;
    Ok(())
}
