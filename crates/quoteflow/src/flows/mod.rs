//! Interactive flows exposed by the site: the quote builder and the marketing
//! assessment, plus the seams they share (category taxonomy, lead capture,
//! storage errors).

pub mod assessment;
pub mod category;
pub mod leads;
pub mod proposal;
pub mod store;
