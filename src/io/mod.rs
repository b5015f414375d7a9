// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: image loading and PNG/GIF export.

pub mod export;
pub mod media;
