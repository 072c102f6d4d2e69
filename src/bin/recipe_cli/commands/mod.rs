// ABOUTME: Re-exports command modules for recipe-cli
// ABOUTME: Service-backed recommendation commands and offline catalog commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod recommend;
