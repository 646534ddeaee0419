mod calculator;
mod halves;

pub use calculator::compute_flow;
pub use halves::bucket_by_half;
