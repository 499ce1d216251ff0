pub mod io;
pub mod resample;
pub mod series;
pub mod window;

pub use resample::*;
pub use series::*;
pub use window::*;
