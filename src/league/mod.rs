pub mod error;
pub mod league;
pub mod leaderboards;
pub mod r#match;
pub mod normalize;
pub mod statistics;
pub mod table;

pub use error::*;
pub use league::*;
pub use leaderboards::*;
pub use r#match::*;
pub use normalize::*;
pub use statistics::*;
pub use table::*;
