//! The corosync-ops CLI.

use anyhow::Result;
use structopt::StructOpt;

use corosync_ops::CorosyncOps;

fn main() -> Result<()> {
    let cli = CorosyncOps::from_args();
    cli.run()
}
