// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Helpers that didn't fit elsewhere.
//!
//! Right now that is all text: tokenizing for word-boundary matching, the
//! collation key the name sort uses, and the little postcode string helpers.

pub mod text;
