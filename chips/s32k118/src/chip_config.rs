// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Chip specific configuration.
//!
//! This file includes a common configuration trait and pre-defined constant
//! values for different boards built around the same S32K118 part. Boards
//! differ in the crystal fitted on the system oscillator pins, and some want
//! the watchdog left running out of reset.

/// S32K118 configuration based on the target board.
pub trait S32k118Config {
    /// Identifier for the platform. This is useful for debugging to confirm the
    /// correct configuration of the chip is being used.
    const NAME: &'static str;

    /// Frequency in Hz of the crystal or external clock on the SOSC pins.
    const XTAL_CLK_HZ: u32;

    /// Whether `system::init` turns the watchdog off.
    const DISABLE_WDOG: bool;
}

/// Generic configuration: 8 MHz crystal, watchdog disabled at start-up.
pub enum Generic {}

impl S32k118Config for Generic {
    const NAME: &'static str = "generic";
    const XTAL_CLK_HZ: u32 = 8_000_000;
    const DISABLE_WDOG: bool = true;
}

/// S32K118EVB-Q064 evaluation board, fitted with a 40 MHz crystal.
pub enum S32k118Evb {}

impl S32k118Config for S32k118Evb {
    const NAME: &'static str = "s32k118evb";
    const XTAL_CLK_HZ: u32 = 40_000_000;
    const DISABLE_WDOG: bool = true;
}
