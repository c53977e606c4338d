// SPDX-License-Identifier: GPL-3.0-only

//! Settings drawer

pub mod view;
