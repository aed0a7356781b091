mod calculator;

pub use calculator::{calculate_cg, check_cg, CgReport, LoadPoint};
