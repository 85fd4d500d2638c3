// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for play documents, drafts and media files.

pub mod draft;
pub mod media;
pub mod serialization;
pub mod source;
