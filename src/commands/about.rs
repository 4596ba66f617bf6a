//! About command - product overview.

use anyhow::Result;
use clap::Args;

use crate::pages::LandingPage;

#[derive(Args)]
pub struct AboutCmd;

impl AboutCmd {
    pub async fn run(&self) -> Result<()> {
        println!("{}", LandingPage);
        Ok(())
    }
}
