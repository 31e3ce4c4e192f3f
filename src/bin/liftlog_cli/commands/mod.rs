// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command modules for liftlog-cli
// ABOUTME: Provides the analysis subcommands

pub mod analysis;
