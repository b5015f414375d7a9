// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Geometry and rasterization: the layout engine and the frame renderer.

pub mod frame;
pub mod layout;
