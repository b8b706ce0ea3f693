//! Types shared by several resources.

mod address;
mod image;
mod line_item;

pub use address::Address;
pub use image::Image;
pub use line_item::{LineItem, NoteAttribute, ShippingLine, TaxLine};
