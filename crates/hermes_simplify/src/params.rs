use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::SimplifyError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyParams {
    /// Merge every pass-through node before pruning.
    pub merge_degree_two: bool,

    /// Edges visited strictly fewer times are removed. No filtering when
    /// unset.
    pub min_visits: Option<f64>,

    pub remove_stubs: bool,

    /// Fold records travelling the reverse polyline of an earlier record into
    /// it when loading.
    pub combine_opposite_directions: bool,

    /// Split records at interior vertices shared with other records and drop
    /// repeated vertices before building the network.
    pub node_lines: bool,
}

impl Default for SimplifyParams {
    fn default() -> Self {
        Self {
            merge_degree_two: true,
            min_visits: None,
            remove_stubs: true,
            combine_opposite_directions: false,
            node_lines: true,
        }
    }
}

impl SimplifyParams {
    pub fn from_json_file(path: &Path) -> Result<Self, SimplifyError> {
        let reader = BufReader::new(File::open(path)?);
        let params = serde_json::from_reader(reader)?;
        Ok(params)
    }
}
