#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use lumo_editor as editor;

#[doc(inline)]
pub use lumo_image as image;

#[doc(inline)]
pub use lumo_imgproc as imgproc;

#[doc(inline)]
pub use lumo_io as io;
