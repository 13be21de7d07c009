// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Programmable Delay Block (PDB).
//!
//! One ADC trigger channel with eight pre-triggers, and one pulse output.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const PDB_INSTANCE_COUNT: usize = 1;
pub const PDB_CH_COUNT: usize = 1;
pub const PDB_DLY_COUNT: usize = 8;
pub const PDB_PODLY_COUNT: usize = 1;

register_structs! {
    pub PdbRegisters {
        /// Status and Control register
        (0x000 => pub sc: ReadWrite<u32, SC::Register>),
        /// Modulus register
        (0x004 => pub modulo: ReadWrite<u32, MOD::Register>),
        /// Counter register
        (0x008 => pub cnt: ReadWrite<u32, CNT::Register>),
        /// Interrupt Delay register
        (0x00C => pub idly: ReadWrite<u32, IDLY::Register>),
        (0x010 => pub ch: [AdcTriggerChannel; PDB_CH_COUNT]),
        (0x038 => _reserved0),
        /// Pulse-Out n Enable register
        (0x190 => pub poen: ReadWrite<u32, POEN::Register>),
        /// Pulse-Out n Delay register
        (0x194 => pub podly: [ReadWrite<u32, PODLY::Register>; PDB_PODLY_COUNT]),
        (0x198 => @END),
    },

    pub AdcTriggerChannel {
        /// Channel n Control register 1
        (0x00 => pub c1: ReadWrite<u32, C1::Register>),
        /// Channel n Status register
        (0x04 => pub s: ReadWrite<u32, S::Register>),
        /// Channel n Delay m register
        (0x08 => pub dly: [ReadWrite<u32, DLY::Register>; PDB_DLY_COUNT]),
        (0x28 => @END),
    }
}

register_bitfields![u32,
    pub SC [
        /// Load OK
        LDOK OFFSET(0) NUMBITS(1) [],
        /// Continuous mode enable
        CONT OFFSET(1) NUMBITS(1) [],
        /// Multiplication factor select for prescaler
        MULT OFFSET(2) NUMBITS(2) [
            Times1 = 0,
            Times10 = 1,
            Times20 = 2,
            Times40 = 3
        ],
        /// PDB interrupt enable
        PDBIE OFFSET(5) NUMBITS(1) [],
        /// PDB interrupt flag
        PDBIF OFFSET(6) NUMBITS(1) [],
        /// PDB enable
        PDBEN OFFSET(7) NUMBITS(1) [],
        /// Trigger input source select
        TRGSEL OFFSET(8) NUMBITS(4) [
            Trgmux = 0,
            Software = 15
        ],
        /// Prescaler divider select, 2^PRESCALER
        PRESCALER OFFSET(12) NUMBITS(3) [],
        /// DMA enable
        DMAEN OFFSET(15) NUMBITS(1) [],
        /// Software trigger
        SWTRIG OFFSET(16) NUMBITS(1) [],
        /// Sequence error interrupt enable
        PDBEIE OFFSET(17) NUMBITS(1) [],
        /// Load mode select
        LDMOD OFFSET(18) NUMBITS(2) []
    ],
    pub MOD [
        MOD OFFSET(0) NUMBITS(16) []
    ],
    pub CNT [
        CNT OFFSET(0) NUMBITS(16) []
    ],
    pub IDLY [
        IDLY OFFSET(0) NUMBITS(16) []
    ],
    pub C1 [
        /// Pre-trigger enable
        EN OFFSET(0) NUMBITS(8) [],
        /// Pre-trigger output select
        TOS OFFSET(8) NUMBITS(8) [],
        /// Pre-trigger back-to-back operation enable
        BB OFFSET(16) NUMBITS(8) []
    ],
    pub S [
        /// Sequence error flags
        ERR OFFSET(0) NUMBITS(8) [],
        /// Channel flags
        CF OFFSET(16) NUMBITS(8) []
    ],
    pub DLY [
        DLY OFFSET(0) NUMBITS(16) []
    ],
    pub POEN [
        POEN OFFSET(0) NUMBITS(8) []
    ],
    pub PODLY [
        DLY2 OFFSET(0) NUMBITS(16) [],
        DLY1 OFFSET(16) NUMBITS(16) []
    ]
];

pub const PDB0_BASE_ADDR: usize = 0x4003_6000;

pub const PDB0_BASE: StaticRef<PdbRegisters> =
    unsafe { StaticRef::new(PDB0_BASE_ADDR as *const PdbRegisters) };

pub const PDB_BASE_ADDRS: [usize; PDB_INSTANCE_COUNT] = [PDB0_BASE_ADDR];
pub const PDB_BASE_PTRS: [StaticRef<PdbRegisters>; PDB_INSTANCE_COUNT] = [PDB0_BASE];
pub const PDB_IRQS: [u32; PDB_INSTANCE_COUNT] = [interrupts::PDB0];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::{offset_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(size_of::<AdcTriggerChannel>(), 0x28);
        assert_eq!(offset_of!(AdcTriggerChannel, dly), 0x8);
        assert_eq!(offset_of!(PdbRegisters, ch), 0x10);
        assert_eq!(offset_of!(PdbRegisters, poen), 0x190);
        assert_eq!(offset_of!(PdbRegisters, podly), 0x194);
        assert_eq!(size_of::<PdbRegisters>(), 0x198);
    }

    #[test]
    fn fields() {
        assert_field!(SC::TRGSEL, 8, 4);
        assert_field!(SC::PRESCALER, 12, 3);
        assert_field!(SC::LDMOD, 18, 2);
        assert_field!(C1::BB, 16, 8);
        assert_field!(S::CF, 16, 8);
        assert_field!(PODLY::DLY1, 16, 16);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            SC [LDOK, CONT, MULT, PDBIE, PDBIF, PDBEN, TRGSEL, PRESCALER, DMAEN, SWTRIG, PDBEIE,
                LDMOD],
            MOD [MOD],
            CNT [CNT],
            IDLY [IDLY],
            C1 [EN, TOS, BB],
            S [ERR, CF],
            DLY [DLY],
            POEN [POEN],
            PODLY [DLY2, DLY1],
        );
    }
}
