// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral access layer for the NXP S32K118.
//!
//! Register blocks, bit-fields, base addresses and interrupt numbers for
//! every on-chip peripheral, plus the small amount of start-up support every
//! board needs.

#![cfg_attr(not(test), no_std)]
#![crate_name = "s32k118"]
#![crate_type = "rlib"]
// `can` and `dma` describe large register files in `register_structs!` and
// need a deeper recursion limit than the default to fully expand.
#![recursion_limit = "512"]

pub mod chip_config;
pub mod errorcode;
pub mod interrupts;
pub mod static_ref;

pub mod adc;
pub mod aips;
pub mod can;
pub mod cmp;
pub mod crc;
pub mod cse_pram;
pub mod dma;
pub mod dmamux;
pub mod eim;
pub mod erm;
pub mod flexio;
pub mod ftfc;
pub mod ftm;
pub mod gpio;
pub mod lpi2c;
pub mod lpit;
pub mod lpspi;
pub mod lptmr;
pub mod lpuart;
pub mod mcm;
pub mod mpu;
pub mod mscm;
pub mod mtb;
pub mod nvic;
pub mod pcc;
pub mod pdb;
pub mod pmc;
pub mod port;
pub mod rcm;
pub mod rom;
pub mod rtc;
pub mod scb;
pub mod scg;
pub mod sim;
pub mod smc;
pub mod systick;
pub mod trgmux;
pub mod wdog;

pub mod clocks;
pub mod features;
pub mod peripherals;
pub mod system;

#[cfg(test)]
mod field_check;
