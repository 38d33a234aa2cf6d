pub mod interval;
pub mod site;
pub mod time;

pub use interval::*;
pub use site::*;
pub use time::*;
