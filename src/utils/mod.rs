// ABOUTME: Utility functions and helpers
// ABOUTME: Shared HTTP client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Utility functions and helpers

pub mod http_client;
