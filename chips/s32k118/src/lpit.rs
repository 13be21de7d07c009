// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Low Power Periodic Interrupt Timer (LPIT).
//!
//! Four 32-bit down-counting channels. All channels share interrupt line
//! [`interrupts::LPIT0`].

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const LPIT_INSTANCE_COUNT: usize = 1;
pub const LPIT_TMR_COUNT: usize = 4;

register_structs! {
    pub LpitRegisters {
        /// Version ID Register
        (0x00 => pub verid: ReadOnly<u32>),
        /// Parameter Register
        (0x04 => pub param: ReadOnly<u32, PARAM::Register>),
        /// Module Control Register
        (0x08 => pub mcr: ReadWrite<u32, MCR::Register>),
        /// Module Status Register
        (0x0C => pub msr: ReadWrite<u32, CHANNELS::Register>),
        /// Module Interrupt Enable Register
        (0x10 => pub mier: ReadWrite<u32, CHANNELS::Register>),
        /// Set Timer Enable Register
        (0x14 => pub setten: ReadWrite<u32, CHANNELS::Register>),
        /// Clear Timer Enable Register
        (0x18 => pub clrten: ReadWrite<u32, CHANNELS::Register>),
        (0x1C => _reserved0),
        (0x20 => pub tmr: [TimerChannel; LPIT_TMR_COUNT]),
        (0x60 => @END),
    },

    pub TimerChannel {
        /// Timer Value Register
        (0x0 => pub tval: ReadWrite<u32>),
        /// Current Timer Value
        (0x4 => pub cval: ReadOnly<u32>),
        /// Timer Control Register
        (0x8 => pub tctrl: ReadWrite<u32, TCTRL::Register>),
        (0xC => _reserved),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub PARAM [
        /// Number of timer channels
        CHANNEL OFFSET(0) NUMBITS(8) [],
        /// Number of external triggers
        EXT_TRIG OFFSET(8) NUMBITS(8) []
    ],
    pub MCR [
        /// Module clock enable
        M_CEN OFFSET(0) NUMBITS(1) [],
        /// Software reset
        SW_RST OFFSET(1) NUMBITS(1) [],
        /// Run in doze mode
        DOZE_EN OFFSET(2) NUMBITS(1) [],
        /// Run in debug mode
        DBG_EN OFFSET(3) NUMBITS(1) []
    ],
    // One bit per channel. MSR flags are write-1-to-clear.
    pub CHANNELS [
        CH0 OFFSET(0) NUMBITS(1) [],
        CH1 OFFSET(1) NUMBITS(1) [],
        CH2 OFFSET(2) NUMBITS(1) [],
        CH3 OFFSET(3) NUMBITS(1) []
    ],
    pub TCTRL [
        /// Timer enable
        T_EN OFFSET(0) NUMBITS(1) [],
        /// Chain with the previous channel
        CHAIN OFFSET(1) NUMBITS(1) [],
        /// Timer operation mode
        MODE OFFSET(2) NUMBITS(2) [
            Periodic32 = 0,
            DualPeriodic16 = 1,
            TriggerAccumulator = 2,
            InputCapture = 3
        ],
        /// Timer start on trigger
        TSOT OFFSET(16) NUMBITS(1) [],
        /// Timer stop on interrupt
        TSOI OFFSET(17) NUMBITS(1) [],
        /// Timer reload on trigger
        TROT OFFSET(18) NUMBITS(1) [],
        /// Trigger source
        TRG_SRC OFFSET(23) NUMBITS(1) [
            External = 0,
            Internal = 1
        ],
        /// Trigger select
        TRG_SEL OFFSET(24) NUMBITS(4) []
    ]
];

pub const LPIT0_BASE_ADDR: usize = 0x4003_7000;

pub const LPIT0_BASE: StaticRef<LpitRegisters> =
    unsafe { StaticRef::new(LPIT0_BASE_ADDR as *const LpitRegisters) };

pub const LPIT_BASE_ADDRS: [usize; LPIT_INSTANCE_COUNT] = [LPIT0_BASE_ADDR];
pub const LPIT_BASE_PTRS: [StaticRef<LpitRegisters>; LPIT_INSTANCE_COUNT] = [LPIT0_BASE];
pub const LPIT_IRQS: [[u32; LPIT_TMR_COUNT]; LPIT_INSTANCE_COUNT] =
    [[interrupts::LPIT0; LPIT_TMR_COUNT]];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::{offset_of, size_of};

    #[test]
    fn channels_are_16_bytes_apart() {
        assert_eq!(size_of::<TimerChannel>(), 0x10);
        assert_eq!(offset_of!(TimerChannel, tctrl), 0x8);
        assert_eq!(offset_of!(LpitRegisters, clrten), 0x18);
        assert_eq!(offset_of!(LpitRegisters, tmr), 0x20);
        assert_eq!(size_of::<LpitRegisters>(), 0x60);
    }

    #[test]
    fn fields() {
        assert_field!(TCTRL::MODE, 2, 2);
        assert_field!(TCTRL::TRG_SRC, 23, 1);
        assert_field!(TCTRL::TRG_SEL, 24, 4);
        assert_field!(CHANNELS::CH3, 3, 1);
        assert_eq!(LPIT_IRQS[0], [20; 4]);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            PARAM [CHANNEL, EXT_TRIG],
            MCR [M_CEN, SW_RST, DOZE_EN, DBG_EN],
            CHANNELS [CH0, CH1, CH2, CH3],
            TCTRL [T_EN, CHAIN, MODE, TSOT, TSOI, TROT, TRG_SRC, TRG_SEL],
        );
    }
}
