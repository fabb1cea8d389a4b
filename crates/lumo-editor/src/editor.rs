use lumo_image::Image;
use lumo_imgproc::{color, filter, threshold};

use crate::error::EditorError;

/// Threshold used by the binary conversion, the midpoint of the 8-bit range.
const BINARY_THRESHOLD: u8 = 128;

/// An operation applicable to the currently edited image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Convert the current image to grayscale.
    Grayscale,
    /// Convert the current image to a two-level black/white image.
    Binary,
    /// Restore the originally loaded image.
    RevertRgb,
    /// Apply the 3x3 mean convolution.
    MeanFilter,
    /// Apply the 3x3 median filter.
    MedianFilter,
    /// Apply the 3x3 gaussian convolution.
    GaussianFilter,
    /// Apply the weighted mean/median/gaussian denoise blend.
    Denoise,
}

/// The editing session state.
///
/// The state is an explicit value passed into and returned from each
/// operation instead of a hidden mutable slot: `Empty` before any image is
/// loaded, `Loaded` right after a load, and `Processed` once an operation
/// has produced a derived image. The original image stays reachable in
/// every non-empty state so [`Op::RevertRgb`] can restore it.
#[derive(Clone, Default)]
pub enum EditorState {
    /// No image has been loaded yet.
    #[default]
    Empty,
    /// An image was loaded and not yet processed.
    Loaded {
        /// The originally loaded image.
        original: Image<u8, 3>,
    },
    /// An image was loaded and at least one operation applied.
    Processed {
        /// The originally loaded image.
        original: Image<u8, 3>,
        /// The image produced by the most recent operation.
        current: Image<u8, 3>,
    },
}

impl EditorState {
    /// Load a new image, replacing any previous session.
    pub fn load(self, original: Image<u8, 3>) -> Self {
        log::debug!(
            "loaded {}x{} image, replacing {} state",
            original.width(),
            original.height(),
            self.name()
        );
        EditorState::Loaded { original }
    }

    /// Apply an operation to the current image.
    ///
    /// Every operation produces a fresh image and transitions the session
    /// to `Processed`; the input image is never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoImage`] when no image has been loaded, or
    /// the underlying image error if an operation fails.
    pub fn apply(self, op: Op) -> Result<Self, EditorError> {
        let (original, current) = match self {
            EditorState::Empty => return Err(EditorError::NoImage),
            EditorState::Loaded { original } => {
                let current = next_image(&original, &original, op)?;
                (original, current)
            }
            EditorState::Processed { original, current } => {
                let current = next_image(&original, &current, op)?;
                (original, current)
            }
        };
        log::debug!("applied {:?}", op);

        Ok(EditorState::Processed { original, current })
    }

    /// The originally loaded image, if any.
    pub fn original(&self) -> Option<&Image<u8, 3>> {
        match self {
            EditorState::Empty => None,
            EditorState::Loaded { original } | EditorState::Processed { original, .. } => {
                Some(original)
            }
        }
    }

    /// The image to display: the result of the most recent operation, or
    /// the original right after a load.
    pub fn current(&self) -> Option<&Image<u8, 3>> {
        match self {
            EditorState::Empty => None,
            EditorState::Loaded { original } => Some(original),
            EditorState::Processed { current, .. } => Some(current),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            EditorState::Empty => "Empty",
            EditorState::Loaded { .. } => "Loaded",
            EditorState::Processed { .. } => "Processed",
        }
    }
}

fn next_image(
    original: &Image<u8, 3>,
    src: &Image<u8, 3>,
    op: Op,
) -> Result<Image<u8, 3>, EditorError> {
    let mut dst = Image::from_size_val(src.size(), 0)?;
    match op {
        Op::Grayscale => {
            let mut gray = Image::from_size_val(src.size(), 0)?;
            color::gray_from_rgb_u8(src, &mut gray)?;
            color::rgb_from_gray_u8(&gray, &mut dst)?;
        }
        Op::Binary => {
            let mut gray = Image::from_size_val(src.size(), 0)?;
            color::gray_from_rgb_u8(src, &mut gray)?;
            let mut binary = Image::from_size_val(src.size(), 0)?;
            threshold::threshold_binary(&gray, &mut binary, BINARY_THRESHOLD, 255)?;
            color::rgb_from_gray_u8(&binary, &mut dst)?;
        }
        Op::RevertRgb => {
            dst = original.clone();
        }
        Op::MeanFilter => {
            filter::convolve3x3(src, &mut dst, &filter::kernels::mean_kernel3())?;
        }
        Op::MedianFilter => {
            filter::median_blur3x3(src, &mut dst)?;
        }
        Op::GaussianFilter => {
            filter::convolve3x3(src, &mut dst, &filter::kernels::gaussian_kernel3())?;
        }
        Op::Denoise => {
            filter::denoise_blend(src, &mut dst)?;
        }
    }

    Ok(dst)
}
