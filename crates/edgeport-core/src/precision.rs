//! Export precision selection

use serde::{Deserialize, Serialize};

/// Weight precision of an exported artifact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// 32-bit floating point weights (full precision)
    #[default]
    Float32,

    /// 16-bit floating point weights
    Float16,
}

impl Precision {
    /// Filename substring marking artifacts of this precision
    pub fn marker(&self) -> &'static str {
        match self {
            Precision::Float32 => "float32",
            Precision::Float16 => "float16",
        }
    }

    /// GGUF `general.file_type` code for this precision
    pub fn file_type(&self) -> u32 {
        match self {
            Precision::Float32 => 0,
            Precision::Float16 => 1,
        }
    }
}
