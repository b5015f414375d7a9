// Copyright (c) 2025, Ringframe contributors
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Ringframe application.

pub mod canvas;
pub mod toolbar;
