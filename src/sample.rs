//! The files in `sample/` directory define
//! the categorical sample representation and a CSV reader for it.

mod attribute;
mod sample_struct;
mod sample_reader;

pub use attribute::Attribute;
pub use sample_struct::Sample;
pub use sample_reader::SampleReader;
