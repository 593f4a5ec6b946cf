pub mod dice;
pub use dice::*;

pub mod fair;
pub use fair::*;

pub mod loaded;
pub use loaded::*;
