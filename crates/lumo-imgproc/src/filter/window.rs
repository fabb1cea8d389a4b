use lumo_image::{Image, ImageError};
use rayon::prelude::*;

/// Apply a 3x3 neighborhood operator to every interior pixel of `src`.
///
/// `op` receives the nine channel-0 values of the neighborhood in row-major
/// order and its result is written to every channel of the output pixel.
/// The 1-pixel border is copied from the source unchanged so output
/// dimensions always equal input dimensions.
///
/// Rows are processed in parallel; each output pixel depends only on the
/// source, so the result is identical for any thread partitioning.
pub(crate) fn apply_window3x3<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    op: impl Fn(&[u8; 9]) -> u8 + Send + Sync,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let cols = src.cols();
    let rows = src.rows();
    let row_len = cols * C;
    let src_data = src.as_slice();

    if src_data.is_empty() {
        return Ok(());
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let src_row = &src_data[y * row_len..(y + 1) * row_len];
            if y == 0 || y + 1 == rows {
                dst_row.copy_from_slice(src_row);
                return;
            }

            dst_row[..C].copy_from_slice(&src_row[..C]);
            dst_row[row_len - C..].copy_from_slice(&src_row[row_len - C..]);

            let mut window = [0u8; 9];
            for x in 1..cols - 1 {
                for j in 0..3 {
                    for i in 0..3 {
                        window[j * 3 + i] = src_data[((y + j - 1) * cols + (x + i - 1)) * C];
                    }
                }
                let value = op(&window);
                dst_row[x * C..(x + 1) * C].fill(value);
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_image::ImageSize;

    #[test]
    fn test_border_copied_through() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 4,
            height: 3,
        };
        #[rustfmt::skip]
        let src = Image::<u8, 1>::new(
            size,
            vec![
                1,  2,  3,  4,
                5,  6,  7,  8,
                9, 10, 11, 12,
            ],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(size, 0)?;

        apply_window3x3(&src, &mut dst, |_| 99)?;

        #[rustfmt::skip]
        assert_eq!(
            dst.as_slice(),
            &[
                1,  2,  3,  4,
                5, 99, 99,  8,
                9, 10, 11, 12,
            ],
        );

        Ok(())
    }

    #[test]
    fn test_window_row_major_order() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 3,
        };
        let src = Image::<u8, 1>::new(size, (1..=9).collect())?;
        let mut dst = Image::<u8, 1>::from_size_val(size, 0)?;

        apply_window3x3(&src, &mut dst, |window| {
            assert_eq!(window, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
            window[4]
        })?;
        assert_eq!(dst.get([1, 1, 0]), Some(&5));

        Ok(())
    }

    #[test]
    fn test_image_narrower_than_window() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 4,
        };
        let src = Image::<u8, 1>::new(size, (0..8).collect())?;
        let mut dst = Image::<u8, 1>::from_size_val(size, 0)?;

        apply_window3x3(&src, &mut dst, |_| 99)?;
        assert_eq!(dst.as_slice(), src.as_slice());

        Ok(())
    }

    #[test]
    fn test_size_mismatch() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 4,
            },
            0,
        )?;

        let res = apply_window3x3(&src, &mut dst, |w| w[4]);
        assert!(res.is_err());

        Ok(())
    }
}
