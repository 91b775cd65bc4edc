// Resume parsing: section segmentation, contact field extraction and record building.
// Everything except `documents` and `handlers` is pure and synchronous.

pub mod builder;
pub mod documents;
pub mod fields;
pub mod handlers;
pub mod rules;
pub mod sections;

pub use builder::parse_resume;
