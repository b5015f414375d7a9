// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the Ringframe application.

pub mod color;
pub mod params;
