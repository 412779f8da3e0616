use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct GrowOptions {
    pub grows: usize,
    pub print_tree: bool,
}

impl Config for GrowOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            grows: config
                .get("grows")
                .and_then(|v| v.as_usize())
                .unwrap_or(20),
            print_tree: config
                .get("print_tree")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }
}
