use lumo_image::{Image, ImageError};

use super::window;

/// Convolve an image with a fixed 3x3 kernel.
///
/// The filter reads channel 0 of the source and writes the result to every
/// channel of the destination, treating the image as a single intensity
/// grid. The accumulated sum is truncated to an integer and clamped to
/// [0, 255]. The 1-pixel border is copied from the source unchanged.
///
/// The sum is accumulated in double precision so that kernels whose weights
/// sum to one reproduce constant inputs exactly after truncation.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The 3x3 kernel weights.
///
/// # Errors
///
/// Returns an error if `src` and `dst` sizes do not match.
///
/// # Example
///
/// ```
/// use lumo_image::{Image, ImageSize};
/// use lumo_imgproc::filter::{convolve3x3, kernels};
///
/// let image = Image::<u8, 1>::from_size_val(
///     ImageSize {
///         width: 5,
///         height: 5,
///     },
///     128,
/// ).unwrap();
///
/// let mut filtered = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
/// convolve3x3(&image, &mut filtered, &kernels::mean_kernel3()).unwrap();
///
/// assert_eq!(filtered.get([2, 2, 0]), Some(&128));
/// ```
pub fn convolve3x3<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &[[f32; 3]; 3],
) -> Result<(), ImageError> {
    window::apply_window3x3(src, dst, |win| {
        let mut acc = 0.0f64;
        for (j, kernel_row) in kernel.iter().enumerate() {
            for (i, w) in kernel_row.iter().enumerate() {
                acc += win[j * 3 + i] as f64 * *w as f64;
            }
        }
        (acc as i32).clamp(0, 255) as u8
    })
}
