// SPDX-License-Identifier: GPL-3.0-only

//! Editing suite
//!
//! Full-screen editor for the session's captures: filter, grade, framing
//! and export.

pub mod view;
