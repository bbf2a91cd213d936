// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_std]

extern crate alloc;

pub mod queue;
pub mod ring;

pub use queue::StrQueue;
pub use ring::{NodeId, Ring};
