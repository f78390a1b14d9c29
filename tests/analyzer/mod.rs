// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module containing tests for the parallel file analyzer.
mod parallel_order_test;
