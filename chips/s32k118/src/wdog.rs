// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Watchdog timer (WDOG).
//!
//! The watchdog runs out of reset with a short timeout. Reconfiguring it
//! requires writing [`UNLOCK_KEY`] to `CNT` first, and the new
//! configuration must be written within 128 bus clocks.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const WDOG_INSTANCE_COUNT: usize = 1;

/// Written to `CNT` to unlock the configuration registers.
pub const UNLOCK_KEY: u32 = 0xD928_C520;
/// Written to `CNT` to refresh the counter.
pub const REFRESH_KEY: u32 = 0xB480_A602;
/// Unlock sequence when `CS.CMD32EN` is clear.
pub const UNLOCK_KEY_16: [u16; 2] = [0xC520, 0xD928];
/// Refresh sequence when `CS.CMD32EN` is clear.
pub const REFRESH_KEY_16: [u16; 2] = [0xA602, 0xB480];

/// Default `CS` configuration: LPO clock, updates allowed, 32-bit
/// commands, watchdog disabled.
pub const CS_RESET_VALUE: u32 = 0x2520;
/// `TOVAL` value out of reset.
pub const TOVAL_RESET_VALUE: u32 = 0x400;

register_structs! {
    pub WdogRegisters {
        /// Watchdog Control and Status Register
        (0x0 => pub cs: ReadWrite<u32, CS::Register>),
        /// Watchdog Counter Register
        (0x4 => pub cnt: ReadWrite<u32, CNT::Register>),
        /// Watchdog Timeout Value Register
        (0x8 => pub toval: ReadWrite<u32, TOVAL::Register>),
        /// Watchdog Window Register
        (0xC => pub win: ReadWrite<u32, WIN::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub CS [
        /// Enabled in stop mode
        STOP OFFSET(0) NUMBITS(1) [],
        /// Enabled in wait mode
        WAIT OFFSET(1) NUMBITS(1) [],
        /// Enabled in debug mode
        DBG OFFSET(2) NUMBITS(1) [],
        /// Watchdog test
        TST OFFSET(3) NUMBITS(2) [
            Disabled = 0,
            UserMode = 1,
            TestLowByte = 2,
            TestHighByte = 3
        ],
        /// Allow updates
        UPDATE OFFSET(5) NUMBITS(1) [],
        /// Watchdog interrupt
        INT OFFSET(6) NUMBITS(1) [],
        /// Watchdog enable
        EN OFFSET(7) NUMBITS(1) [],
        /// Watchdog clock
        CLK OFFSET(8) NUMBITS(2) [
            BusClock = 0,
            Lpo = 1,
            Sirc = 2,
            Sosc = 3
        ],
        /// Reconfiguration success
        RCS OFFSET(10) NUMBITS(1) [],
        /// Unlock status
        ULK OFFSET(11) NUMBITS(1) [],
        /// Watchdog prescaler, divide by 256
        PRES OFFSET(12) NUMBITS(1) [],
        /// Enables or disables 32-bit refresh/unlock command write words
        CMD32EN OFFSET(13) NUMBITS(1) [],
        /// Watchdog interrupt flag
        FLG OFFSET(14) NUMBITS(1) [],
        /// Watchdog window
        WIN OFFSET(15) NUMBITS(1) []
    ],
    pub CNT [
        CNTLOW OFFSET(0) NUMBITS(8) [],
        CNTHIGH OFFSET(8) NUMBITS(8) []
    ],
    pub TOVAL [
        TOVALLOW OFFSET(0) NUMBITS(8) [],
        TOVALHIGH OFFSET(8) NUMBITS(8) []
    ],
    pub WIN [
        WINLOW OFFSET(0) NUMBITS(8) [],
        WINHIGH OFFSET(8) NUMBITS(8) []
    ]
];

pub const WDOG_BASE_ADDR: usize = 0x4005_2000;

pub const WDOG_BASE: StaticRef<WdogRegisters> =
    unsafe { StaticRef::new(WDOG_BASE_ADDR as *const WdogRegisters) };

pub const WDOG_BASE_ADDRS: [usize; WDOG_INSTANCE_COUNT] = [WDOG_BASE_ADDR];
pub const WDOG_BASE_PTRS: [StaticRef<WdogRegisters>; WDOG_INSTANCE_COUNT] = [WDOG_BASE];
pub const WDOG_IRQS: [u32; WDOG_INSTANCE_COUNT] = [interrupts::WDOG];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn fields() {
        assert_eq!(core::mem::size_of::<WdogRegisters>(), 0x10);
        assert_field!(CS::TST, 3, 2);
        assert_field!(CS::CLK, 8, 2);
        assert_field!(CS::CMD32EN, 13, 1);
        assert_field!(TOVAL::TOVALHIGH, 8, 8);
    }

    #[test]
    fn reset_configuration() {
        let cs = CS::CMD32EN::SET + CS::RCS::SET + CS::CLK::Lpo + CS::UPDATE::SET;
        assert_eq!(u32::from(cs), CS_RESET_VALUE);
        assert_eq!(u32::from(TOVAL::TOVALHIGH.val(0x04)), TOVAL_RESET_VALUE);
    }

    #[test]
    fn sixteen_bit_keys_split_the_32_bit_keys() {
        assert_eq!(
            (u32::from(UNLOCK_KEY_16[1]) << 16) | u32::from(UNLOCK_KEY_16[0]),
            UNLOCK_KEY
        );
        assert_eq!(
            (u32::from(REFRESH_KEY_16[1]) << 16) | u32::from(REFRESH_KEY_16[0]),
            REFRESH_KEY
        );
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            CS [STOP, WAIT, DBG, TST, UPDATE, INT, EN, CLK, RCS, ULK, PRES, CMD32EN, FLG, WIN],
            CNT [CNTLOW, CNTHIGH],
            TOVAL [TOVALLOW, TOVALHIGH],
            WIN [WINLOW, WINHIGH],
        );
    }
}
