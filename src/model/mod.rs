mod flow;
mod goal;
mod league;
mod player;
mod row;

pub use flow::*;
pub use goal::*;
pub use league::*;
pub use player::*;
pub use row::*;
