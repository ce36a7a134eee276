//! # Document Composer
//!
//! Turns one [`Order`](crate::model::Order) into a single printable A4 page.
//!
//! The composer never draws directly while it is still deciding where things go. It
//! first builds a complete plan (every text block wrapped, every coordinate fixed), then
//! replays the plan onto a [`DocumentCanvas`] and finally asks the canvas to save. A
//! failure at any step surfaces as one [`DocumentRenderError`] and nothing is written.

pub mod canvas;
pub mod composer;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod pdf;

pub use canvas::*;
pub use composer::*;
pub use error::*;
pub use labels::*;
pub use pdf::PdfCanvas;
