use lumo_image::{Image, ImageError};

use super::window;

/// Apply a 3x3 median filter to an image.
///
/// For every interior pixel the nine channel-0 neighborhood values are
/// sorted ascending and the middle element (index 4) is written to every
/// channel of the destination pixel. No averaging is applied for ties.
/// The 1-pixel border is copied from the source unchanged, matching
/// [`super::convolve3x3`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
///
/// # Errors
///
/// Returns an error if `src` and `dst` sizes do not match.
pub fn median_blur3x3<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    window::apply_window3x3(src, dst, |win| {
        let mut win = *win;
        win.sort_unstable();
        win[4]
    })
}
