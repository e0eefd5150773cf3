pub mod decode;
pub mod report;
pub mod sample;
pub mod validate;
