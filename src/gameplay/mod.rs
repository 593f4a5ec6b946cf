pub mod decision;
pub use decision::*;

pub mod engine;
pub use engine::*;

pub mod event;
pub use event::*;

pub mod player;
pub use player::*;

pub mod seat;
pub use seat::*;

pub mod turn;
pub use turn::*;
