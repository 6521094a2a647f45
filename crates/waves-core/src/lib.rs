pub mod constants;
pub mod error;
pub mod grain;
pub mod layout;
pub mod noise;
pub mod palette;
pub mod raster;
pub mod state;
pub mod wave;

pub use constants::*;
pub use error::*;
pub use grain::*;
pub use layout::*;
pub use noise::*;
pub use palette::*;
pub use raster::*;
pub use state::*;
pub use wave::*;
