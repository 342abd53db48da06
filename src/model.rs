mod device;
mod granularity;
mod metric;
mod page;
mod reading;

pub use device::*;
pub use granularity::*;
pub use metric::*;
pub use page::*;
pub use reading::*;
