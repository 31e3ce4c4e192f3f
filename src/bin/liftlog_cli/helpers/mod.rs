// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for liftlog-cli
// ABOUTME: Provides output formatting utilities

pub mod display;
