// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module containing tests for the binary-sequence estimators.
mod binary_sanity;
