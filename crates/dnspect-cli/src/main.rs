//! dnspect - DNS pollution checker
//!
//! Resolves configured domains through the local DNS path and verifies
//! that the answered addresses belong to the operators they should.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dnspect_cli::run().await
}
