// SPDX-License-Identifier: GPL-3.0-only

//! Image-level building blocks shared by the preview, capture and editing paths
//!
//! - [`looks`]: Filters and color grades expressed as CSS-style color operations
//! - [`framing`]: Aspect ratios and center crops
//! - [`composition`]: Composition guides drawn onto preview frames
//! - [`analysis`]: Scene luminance and sharpness estimation
//! - [`tone`]: Exposure compensation and white balance gains
//! - [`library`]: The session's captured media list

pub mod analysis;
pub mod composition;
pub mod framing;
pub mod library;
pub mod looks;
pub mod tone;

pub use composition::CompositionGuide;
pub use framing::AspectRatio;
pub use library::{CapturedMedia, MediaLibrary};
pub use looks::{ColorGrade, ColorOp, Filter};
