use rayon::prelude::*;

use lumo_image::Image;

/// Apply a function to each pixel in the image in parallel by rows.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    src.as_slice()
        .par_chunks_exact(C1 * src.cols())
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * src.cols()))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pixel value in the image in parallel by rows.
pub fn par_iter_rows_val<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    src.as_slice()
        .par_chunks_exact(C1 * src.cols())
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * src.cols()))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .iter()
                .zip(dst_chunk.iter_mut())
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pixel of three source images in parallel by rows.
pub fn par_iter_rows_three<
    T1,
    const C1: usize,
    T2,
    const C2: usize,
    T3,
    const C3: usize,
    T4,
    const C4: usize,
>(
    src1: &Image<T1, C1>,
    src2: &Image<T2, C2>,
    src3: &Image<T3, C3>,
    dst: &mut Image<T4, C4>,
    f: impl Fn(&[T1], &[T2], &[T3], &mut [T4]) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
    T3: Clone + Send + Sync,
    T4: Clone + Send + Sync,
{
    src1.as_slice()
        .par_chunks_exact(C1 * src1.cols())
        .zip(src2.as_slice().par_chunks_exact(C2 * src1.cols()))
        .zip(src3.as_slice().par_chunks_exact(C3 * src1.cols()))
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C4 * src1.cols()))
        .for_each(|(((src1_chunk, src2_chunk), src3_chunk), dst_chunk)| {
            src1_chunk
                .chunks_exact(C1)
                .zip(src2_chunk.chunks_exact(C2))
                .zip(src3_chunk.chunks_exact(C3))
                .zip(dst_chunk.chunks_exact_mut(C4))
                .for_each(|(((src1_pixel, src2_pixel), src3_pixel), dst_pixel)| {
                    f(src1_pixel, src2_pixel, src3_pixel, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_image::{ImageError, ImageSize};

    #[test]
    fn test_par_iter_rows_val() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let src = Image::<u8, 1>::new(size, vec![1, 2, 3, 4])?;
        let mut dst = Image::<u8, 1>::from_size_val(size, 0)?;

        par_iter_rows_val(&src, &mut dst, |src_pixel, dst_pixel| {
            *dst_pixel = src_pixel * 2;
        });
        assert_eq!(dst.as_slice(), &[2, 4, 6, 8]);

        Ok(())
    }

    #[test]
    fn test_par_iter_rows_three() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let src1 = Image::<u8, 1>::new(size, vec![1, 2])?;
        let src2 = Image::<u8, 1>::new(size, vec![10, 20])?;
        let src3 = Image::<u8, 1>::new(size, vec![100, 200])?;
        let mut dst = Image::<u8, 1>::from_size_val(size, 0)?;

        par_iter_rows_three(&src1, &src2, &src3, &mut dst, |p1, p2, p3, pd| {
            pd[0] = p1[0] + p2[0] + p3[0];
        });
        assert_eq!(dst.as_slice(), &[111, 222]);

        Ok(())
    }
}
