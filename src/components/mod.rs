//! Visual components of the portfolio page.

pub mod dom;
pub mod page;
pub mod particles;
