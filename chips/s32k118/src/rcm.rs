// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Reset Control Module (RCM).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const RCM_INSTANCE_COUNT: usize = 1;

register_structs! {
    pub RcmRegisters {
        /// Version ID Register
        (0x00 => pub verid: ReadOnly<u32>),
        /// Parameter Register, one bit per implemented reset source
        (0x04 => pub param: ReadOnly<u32>),
        /// System Reset Status Register
        (0x08 => pub srs: ReadOnly<u32, RESET::Register>),
        /// Reset Pin Control register
        (0x0C => pub rpc: ReadWrite<u32, RPC::Register>),
        (0x10 => _reserved0),
        /// Sticky System Reset Status Register, write 1 to clear
        (0x18 => pub ssrs: ReadWrite<u32, RESET::Register>),
        /// System Reset Interrupt Enable Register
        (0x1C => pub srie: ReadWrite<u32, SRIE::Register>),
        (0x20 => @END),
    }
}

register_bitfields![u32,
    // Reset sources, as reported by SRS and SSRS.
    pub RESET [
        /// Low-voltage detect
        LVD OFFSET(1) NUMBITS(1) [],
        /// Loss of clock
        LOC OFFSET(2) NUMBITS(1) [],
        /// Loss of lock
        LOL OFFSET(3) NUMBITS(1) [],
        /// Clock monitor unit loss of clock
        CMU_LOC OFFSET(4) NUMBITS(1) [],
        /// Watchdog
        WDOG OFFSET(5) NUMBITS(1) [],
        /// External reset pin
        PIN OFFSET(6) NUMBITS(1) [],
        /// Power-on reset
        POR OFFSET(7) NUMBITS(1) [],
        /// JTAG generated reset
        JTAG OFFSET(8) NUMBITS(1) [],
        /// Core lockup
        LOCKUP OFFSET(9) NUMBITS(1) [],
        /// Software
        SW OFFSET(10) NUMBITS(1) [],
        /// MDM-AP system reset request
        MDM_AP OFFSET(11) NUMBITS(1) [],
        /// Stop acknowledge error
        SACKERR OFFSET(13) NUMBITS(1) []
    ],
    pub RPC [
        /// Reset pin filter select in run and wait modes
        RSTFLTSRW OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            BusClock = 1,
            Lpo = 2
        ],
        /// Reset pin filter select in stop mode
        RSTFLTSS OFFSET(2) NUMBITS(1) [],
        /// Reset pin filter bus clock select, filter width is RSTFLTSEL + 1
        RSTFLTSEL OFFSET(8) NUMBITS(5) []
    ],
    pub SRIE [
        /// Reset delay time
        DELAY OFFSET(0) NUMBITS(2) [
            Cycles10 = 0,
            Cycles34 = 1,
            Cycles130 = 2,
            Cycles514 = 3
        ],
        LOC OFFSET(2) NUMBITS(1) [],
        LOL OFFSET(3) NUMBITS(1) [],
        CMU_LOC OFFSET(4) NUMBITS(1) [],
        WDOG OFFSET(5) NUMBITS(1) [],
        PIN OFFSET(6) NUMBITS(1) [],
        /// Global interrupt enable
        GIE OFFSET(7) NUMBITS(1) [],
        JTAG OFFSET(8) NUMBITS(1) [],
        LOCKUP OFFSET(9) NUMBITS(1) [],
        SW OFFSET(10) NUMBITS(1) [],
        MDM_AP OFFSET(11) NUMBITS(1) [],
        SACKERR OFFSET(13) NUMBITS(1) []
    ]
];

pub const RCM_BASE_ADDR: usize = 0x4007_F000;

pub const RCM_BASE: StaticRef<RcmRegisters> =
    unsafe { StaticRef::new(RCM_BASE_ADDR as *const RcmRegisters) };

pub const RCM_BASE_ADDRS: [usize; RCM_INSTANCE_COUNT] = [RCM_BASE_ADDR];
pub const RCM_BASE_PTRS: [StaticRef<RcmRegisters>; RCM_INSTANCE_COUNT] = [RCM_BASE];
pub const RCM_IRQS: [u32; RCM_INSTANCE_COUNT] = [interrupts::RCM];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn layout() {
        assert_eq!(core::mem::offset_of!(RcmRegisters, ssrs), 0x18);
        assert_eq!(core::mem::size_of::<RcmRegisters>(), 0x20);
        assert_field!(RESET::SACKERR, 13, 1);
        assert_field!(RPC::RSTFLTSEL, 8, 5);
        assert_field!(SRIE::DELAY, 0, 2);
        // Interrupt enables sit on the same bits as the status flags.
        assert_eq!(SRIE::WDOG.shift, RESET::WDOG.shift);
        assert_eq!(SRIE::SACKERR.shift, RESET::SACKERR.shift);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            RESET [LVD, LOC, LOL, CMU_LOC, WDOG, PIN, POR, JTAG, LOCKUP, SW, MDM_AP, SACKERR],
            RPC [RSTFLTSRW, RSTFLTSS, RSTFLTSEL],
            SRIE [DELAY, LOC, LOL, CMU_LOC, WDOG, PIN, GIE, JTAG, LOCKUP, SW, MDM_AP, SACKERR],
        );
    }
}
