pub mod classify;
pub mod devices;
pub mod export;
pub mod label;
pub mod logging;
pub mod map;
pub mod model;
pub mod series;
pub mod source;
pub mod summary;
