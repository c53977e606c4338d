// SPDX-License-Identifier: GPL-3.0-only

//! Pro mode panel
//!
//! Scene presets, composition guide and manual capture settings. Shown to
//! the left of the preview while in Pro mode.

pub mod view;
