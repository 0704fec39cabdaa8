pub mod catalog;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod frame;
pub mod gallery;
pub mod geometry;
pub mod images;
pub mod optics;
pub mod state;

pub use catalog::*;
pub use constants::*;
pub use dispatch::*;
pub use error::*;
pub use frame::*;
pub use gallery::*;
pub use geometry::*;
pub use images::*;
pub use optics::*;
pub use state::*;
