use lumo_image::{Image, ImageError};

use super::{convolve3x3, kernels, median_blur3x3};
use crate::parallel;

/// Blend weight of the mean filtered image in [`denoise_blend`].
pub const MEAN_WEIGHT: f32 = 0.25;
/// Blend weight of the median filtered image in [`denoise_blend`].
pub const MEDIAN_WEIGHT: f32 = 0.25;
/// Blend weight of the gaussian filtered image in [`denoise_blend`].
pub const GAUSSIAN_WEIGHT: f32 = 0.5;

/// Performs weighted addition of three images.
///
/// The formula applied per channel is:
///
/// dst(x,y,c) = clamp(trunc(src1(x,y,c) * alpha + src2(x,y,c) * beta + src3(x,y,c) * gamma), 0, 255)
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `alpha` - Weight of the first image elements.
/// * `src2` - The second input image.
/// * `beta` - Weight of the second image elements.
/// * `src3` - The third input image.
/// * `gamma` - Weight of the third image elements.
/// * `dst` - The output image.
///
/// # Errors
///
/// Returns an error if the image sizes do not match.
pub fn add_weighted3<const C: usize>(
    src1: &Image<u8, C>,
    alpha: f32,
    src2: &Image<u8, C>,
    beta: f32,
    src3: &Image<u8, C>,
    gamma: f32,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    if src1.size() != src3.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src3.cols(),
            src3.rows(),
        ));
    }

    if src1.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_three(src1, src2, src3, dst, |p1, p2, p3, pd| {
        for c in 0..C {
            let acc = p1[c] as f32 * alpha + p2[c] as f32 * beta + p3[c] as f32 * gamma;
            pd[c] = (acc as i32).clamp(0, 255) as u8;
        }
    });

    Ok(())
}

/// Remove noise from an image with a fixed blend of three filters.
///
/// Computes the mean convolution, the median filter and the gaussian
/// convolution of `src` independently, then combines them over the full
/// grid as 0.25 * mean + 0.25 * median + 0.5 * gaussian, truncated and
/// clamped to [0, 255].
///
/// The three intermediate filters copy the 1-pixel border from the source,
/// and the blend weights sum to one, so border pixels of the output equal
/// the source border pixels exactly.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
///
/// # Errors
///
/// Returns an error if `src` and `dst` sizes do not match.
pub fn denoise_blend<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let mut mean = Image::from_size_val(src.size(), 0)?;
    convolve3x3(src, &mut mean, &kernels::mean_kernel3())?;

    let mut median = Image::from_size_val(src.size(), 0)?;
    median_blur3x3(src, &mut median)?;

    let mut gaussian = Image::from_size_val(src.size(), 0)?;
    convolve3x3(src, &mut gaussian, &kernels::gaussian_kernel3())?;

    add_weighted3(
        &mean,
        MEAN_WEIGHT,
        &median,
        MEDIAN_WEIGHT,
        &gaussian,
        GAUSSIAN_WEIGHT,
        dst,
    )
}
