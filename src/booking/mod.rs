pub mod booking;
pub mod ground;
pub mod rate;

pub use booking::*;
pub use ground::*;
pub use rate::*;
