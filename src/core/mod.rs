pub mod blend;
pub mod catalog;
pub mod color;
pub mod schema;
pub mod state;
pub mod tween;

pub use blend::*;
pub use catalog::*;
pub use color::*;
pub use schema::*;
pub use state::*;
pub use tween::*;
