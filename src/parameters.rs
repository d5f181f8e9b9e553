pub use super::F;
use clap::Parser;

use super::classify::Thresholds;

/// Geometric crop of an OBJ mesh.
#[derive(Parser, Debug)]
pub struct Args {
    /// Input mesh file.
    #[arg(short, long, default_value = "mesh.obj")]
    pub input: String,

    /// Output mesh file.
    #[arg(short, long, default_value = "mesh_cropped.obj")]
    pub output: String,

    /// Remove anything below this height.
    #[arg(long, default_value_t = 0.35)]
    pub foot_y_limit: F,

    /// Remove anything extending past this Z, unless protected by height.
    #[arg(long, default_value_t = 1.4)]
    pub head_z_limit: F,

    /// Vertices at or above this height survive the forward cut.
    #[arg(long, default_value_t = 0.8)]
    pub shell_safe_height: F,
}

impl Args {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            foot_y_limit: self.foot_y_limit,
            head_z_limit: self.head_z_limit,
            shell_safe_height: self.shell_safe_height,
        }
    }
}
