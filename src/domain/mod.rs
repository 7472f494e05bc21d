pub mod bucket;
pub mod classification;
pub mod projection;
pub mod scenario;
