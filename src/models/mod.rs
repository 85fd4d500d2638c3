// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: play records and the session's editable collection.

pub mod play;
pub mod store;
