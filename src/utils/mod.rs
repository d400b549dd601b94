// Utils compartidos

pub mod constants;
pub mod storage;
pub mod map_ffi;

pub use constants::*;
pub use storage::*;
