// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the playbook application.

pub mod editor;
pub mod gallery;
pub mod toolbar;
