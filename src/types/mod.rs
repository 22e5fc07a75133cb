pub mod indicator;
pub mod screener;
pub mod signals;

pub use indicator::*;
pub use screener::*;
pub use signals::*;
