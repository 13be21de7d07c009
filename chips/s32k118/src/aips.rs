// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! AIPS-Lite peripheral bridge.
//!
//! Every 4 KiB slot behind the bridge has a 4-bit access-control nibble,
//! eight nibbles to a register. `PACRA`..`PACRD` cover slots 0 to 31 and
//! `OPACR[0..12]` the remaining slots.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const AIPS_INSTANCE_COUNT: usize = 1;
pub const AIPS_OPACR_COUNT: usize = 12;

/// Number of peripheral slots described by one PACR/OPACR register.
pub const SLOTS_PER_REGISTER: usize = 8;
/// Size of one peripheral slot behind the bridge.
pub const SLOT_SIZE: usize = 0x1000;

register_structs! {
    pub AipsRegisters {
        // Master Privilege Register A
        (0x000 => pub mpra: ReadWrite<u32, MPRA::Register>),
        (0x004 => _reserved0),
        // Peripheral Access Control Registers
        (0x020 => pub pacra: ReadWrite<u32, PACR::Register>),
        (0x024 => pub pacrb: ReadWrite<u32, PACR::Register>),
        (0x028 => pub pacrc: ReadWrite<u32, PACR::Register>),
        (0x02C => pub pacrd: ReadWrite<u32, PACR::Register>),
        (0x030 => _reserved1),
        // Off-Platform Peripheral Access Control Registers
        (0x040 => pub opacr: [ReadWrite<u32, PACR::Register>; AIPS_OPACR_COUNT]),
        (0x070 => @END),
    }
}

register_bitfields![u32,
    pub MPRA [
        /// Master 2 privilege level
        MPL2 OFFSET(20) NUMBITS(1) [],
        /// Master 2 trusted for writes
        MTW2 OFFSET(21) NUMBITS(1) [],
        /// Master 2 trusted for reads
        MTR2 OFFSET(22) NUMBITS(1) [],
        MPL1 OFFSET(24) NUMBITS(1) [],
        MTW1 OFFSET(25) NUMBITS(1) [],
        MTR1 OFFSET(26) NUMBITS(1) [],
        MPL0 OFFSET(28) NUMBITS(1) [],
        MTW0 OFFSET(29) NUMBITS(1) [],
        MTR0 OFFSET(30) NUMBITS(1) []
    ],
    // Shared by PACRA-PACRD and OPACR0-OPACR11. Slot 0 of each register is
    // the most significant nibble.
    pub PACR [
        TP7 OFFSET(0) NUMBITS(1) [],
        WP7 OFFSET(1) NUMBITS(1) [],
        SP7 OFFSET(2) NUMBITS(1) [],
        TP6 OFFSET(4) NUMBITS(1) [],
        WP6 OFFSET(5) NUMBITS(1) [],
        SP6 OFFSET(6) NUMBITS(1) [],
        TP5 OFFSET(8) NUMBITS(1) [],
        WP5 OFFSET(9) NUMBITS(1) [],
        SP5 OFFSET(10) NUMBITS(1) [],
        TP4 OFFSET(12) NUMBITS(1) [],
        WP4 OFFSET(13) NUMBITS(1) [],
        SP4 OFFSET(14) NUMBITS(1) [],
        TP3 OFFSET(16) NUMBITS(1) [],
        WP3 OFFSET(17) NUMBITS(1) [],
        SP3 OFFSET(18) NUMBITS(1) [],
        TP2 OFFSET(20) NUMBITS(1) [],
        WP2 OFFSET(21) NUMBITS(1) [],
        SP2 OFFSET(22) NUMBITS(1) [],
        TP1 OFFSET(24) NUMBITS(1) [],
        WP1 OFFSET(25) NUMBITS(1) [],
        SP1 OFFSET(26) NUMBITS(1) [],
        /// Trusted protect
        TP0 OFFSET(28) NUMBITS(1) [],
        /// Write protect
        WP0 OFFSET(29) NUMBITS(1) [],
        /// Supervisor protect
        SP0 OFFSET(30) NUMBITS(1) []
    ]
];

pub const AIPS_BASE_ADDR: usize = 0x4000_0000;

pub const AIPS_BASE: StaticRef<AipsRegisters> =
    unsafe { StaticRef::new(AIPS_BASE_ADDR as *const AipsRegisters) };

pub const AIPS_BASE_ADDRS: [usize; AIPS_INSTANCE_COUNT] = [AIPS_BASE_ADDR];
pub const AIPS_BASE_PTRS: [StaticRef<AipsRegisters>; AIPS_INSTANCE_COUNT] = [AIPS_BASE];

/// Which access-control register covers a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessRegister {
    /// `PACRA` is 0, `PACRD` is 3.
    Pacr(usize),
    Opacr(usize),
}

/// Location of the access-control nibble of one bridge slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotControl {
    pub register: AccessRegister,
    /// Bit position of the slot's `TP` bit; `WP` and `SP` follow it.
    pub shift: usize,
}

/// Find the access-control nibble for the peripheral at `address`.
///
/// Returns `None` for addresses outside the bridge window.
pub fn slot_control(address: usize) -> Option<SlotControl> {
    let slot = address.checked_sub(AIPS_BASE_ADDR)? / SLOT_SIZE;
    let register = slot / SLOTS_PER_REGISTER;
    let shift = 28 - 4 * (slot % SLOTS_PER_REGISTER);
    let register = match register {
        0..=3 => AccessRegister::Pacr(register),
        r if r - 4 < AIPS_OPACR_COUNT => AccessRegister::Opacr(r - 4),
        _ => return None,
    };
    Some(SlotControl { register, shift })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn layout() {
        assert_eq!(core::mem::offset_of!(AipsRegisters, pacra), 0x20);
        assert_eq!(core::mem::offset_of!(AipsRegisters, pacrd), 0x2C);
        assert_eq!(core::mem::offset_of!(AipsRegisters, opacr), 0x40);
        assert_eq!(core::mem::size_of::<AipsRegisters>(), 0x70);
    }

    #[test]
    fn nibbles() {
        assert_field!(MPRA::MTR0, 30, 1);
        assert_field!(MPRA::MPL2, 20, 1);
        assert_field!(PACR::SP0, 30, 1);
        assert_field!(PACR::TP7, 0, 1);
        assert_field!(PACR::WP3, 17, 1);
    }

    #[test]
    fn slots() {
        // DMA controller, slot 8
        assert_eq!(
            slot_control(0x4000_8000),
            Some(SlotControl {
                register: AccessRegister::Pacr(1),
                shift: 28
            })
        );
        // LPUART1, slot 0x6B
        assert_eq!(
            slot_control(0x4006_B000),
            Some(SlotControl {
                register: AccessRegister::Opacr(9),
                shift: 16
            })
        );
        assert_eq!(slot_control(0x3FFF_F000), None);
        assert_eq!(slot_control(0x4008_0000), None);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            MPRA [MPL2, MTW2, MTR2, MPL1, MTW1, MTR1, MPL0, MTW0, MTR0],
            PACR [TP7, WP7, SP7, TP6, WP6, SP6, TP5, WP5, SP5, TP4, WP4, SP4, TP3, WP3, SP3, TP2,
                WP2, SP2, TP1, WP1, SP1, TP0, WP0, SP0],
        );
    }
}
