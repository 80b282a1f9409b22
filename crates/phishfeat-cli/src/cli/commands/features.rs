//! `phishfeat features` – list feature columns.

use anyhow::Result;
use phishfeat_core::FEATURE_NAMES;

pub fn run_features() -> Result<()> {
    for (i, name) in FEATURE_NAMES.iter().enumerate() {
        println!("{:>2}  {}", i + 1, name);
    }
    Ok(())
}
