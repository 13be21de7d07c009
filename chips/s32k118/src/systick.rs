// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Cortex-M0+ system timer (SysTick).
//!
//! A 24-bit down counter clocked from the core clock. The S32K118 provides no
//! external reference, so `CLKSOURCE` must be set.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const SYSTICK_INSTANCE_COUNT: usize = 1;

register_structs! {
    pub SysTickRegisters {
        /// SysTick Control and Status Register
        (0x0 => pub csr: ReadWrite<u32, ControlAndStatus::Register>),
        /// SysTick Reload Value Register
        (0x4 => pub rvr: ReadWrite<u32, ReloadValue::Register>),
        /// SysTick Current Value Register
        (0x8 => pub cvr: ReadWrite<u32, CurrentValue::Register>),
        /// SysTick Calibration Value Register
        (0xC => pub calib: ReadOnly<u32, CalibrationValue::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub ControlAndStatus [
        /// Counter reached zero since the last read of this register.
        COUNTFLAG OFFSET(16) NUMBITS(1),

        /// Count the processor clock instead of the reference clock.
        CLKSOURCE OFFSET(2) NUMBITS(1),

        /// Pend the SysTick exception when the counter reaches zero.
        TICKINT OFFSET(1) NUMBITS(1),

        /// Counter enable.
        ENABLE OFFSET(0) NUMBITS(1)
    ],

    pub ReloadValue [
        /// Loaded into `cvr` on the cycle after the counter reaches zero.
        RELOAD          OFFSET(0)  NUMBITS(24)
    ],

    pub CurrentValue [
        /// Any write clears the counter and COUNTFLAG.
        CURRENT         OFFSET(0)  NUMBITS(24)
    ],

    pub CalibrationValue [
        /// No reference clock is implemented.
        NOREF           OFFSET(31) NUMBITS(1),

        /// TENMS is inexact or missing.
        SKEW            OFFSET(30) NUMBITS(1),

        /// Reload value for a 10 ms period, zero when unknown.
        TENMS           OFFSET(0)  NUMBITS(24)
    ]
];

/// Largest value the 24-bit reload register accepts.
pub const MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Reload value giving one tick every `period_us` microseconds at
/// `clock_hz`, or `None` if it does not fit the 24-bit counter.
pub fn reload_for_period(clock_hz: u32, period_us: u32) -> Option<u32> {
    let ticks = u64::from(clock_hz) * u64::from(period_us) / 1_000_000;
    let reload = ticks.checked_sub(1)?;
    if reload > u64::from(MAX_RELOAD) {
        None
    } else {
        Some(reload as u32)
    }
}

pub const SYSTICK_BASE_ADDR: usize = 0xE000_E010;

pub const SYSTICK_BASE: StaticRef<SysTickRegisters> =
    unsafe { StaticRef::new(SYSTICK_BASE_ADDR as *const SysTickRegisters) };

pub const SYSTICK_BASE_ADDRS: [usize; SYSTICK_INSTANCE_COUNT] = [SYSTICK_BASE_ADDR];
pub const SYSTICK_BASE_PTRS: [StaticRef<SysTickRegisters>; SYSTICK_INSTANCE_COUNT] = [SYSTICK_BASE];
pub const SYSTICK_IRQS: [i32; SYSTICK_INSTANCE_COUNT] = [interrupts::SYS_TICK];
