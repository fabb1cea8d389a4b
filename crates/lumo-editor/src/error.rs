/// An error type for the editor module.
#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    /// Error when an operation is applied with no image loaded.
    #[error("No image available, load an image first")]
    NoImage,

    /// Error from an underlying image operation.
    #[error("Failed to process the image. {0}")]
    ImageError(#[from] lumo_image::ImageError),
}
