//! Command handlers grouped by concern.

pub(crate) mod locales;
pub(crate) mod resolve;
pub(crate) mod translate;
