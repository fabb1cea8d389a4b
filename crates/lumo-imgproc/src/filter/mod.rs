//! Filter operations
//!
//! This module provides the fixed 3x3 filter operations for image denoising.

/// Filter kernels
pub mod kernels;

/// Kernel convolution operations
mod convolution;
pub use convolution::*;

/// Denoise blend operations
mod denoise;
pub use denoise::*;

/// Median filter operations
mod median;
pub use median::*;

/// Shared 3x3 neighborhood walker
mod window;
