pub mod cg;

pub use cg::{calculate_cg, check_cg, CgReport, LoadPoint};
