// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Micro Trace Buffer (MTB) and its data watchpoint unit (MTB_DWT).
//!
//! Both blocks end with the standard CoreSight identification registers,
//! shared with the ROM table as [`IdentificationRegisters`].

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const MTB_INSTANCE_COUNT: usize = 1;
pub const MTB_DWT_INSTANCE_COUNT: usize = 1;
pub const MTB_DWT_COMPARATOR_COUNT: usize = 2;

register_structs! {
    pub MtbRegisters {
        /// MTB Position Register
        (0x000 => pub position: ReadWrite<u32, POSITION::Register>),
        /// MTB Master Register
        (0x004 => pub master: ReadWrite<u32, MASTER::Register>),
        /// MTB Flow Register
        (0x008 => pub flow: ReadWrite<u32, FLOW::Register>),
        /// MTB Base Register
        (0x00C => pub base: ReadOnly<u32>),
        (0x010 => _reserved0),
        /// Integration Mode Control Register
        (0xF00 => pub modectrl: ReadOnly<u32>),
        (0xF04 => _reserved1),
        /// Claim TAG Set Register
        (0xFA0 => pub tagset: ReadOnly<u32>),
        /// Claim TAG Clear Register
        (0xFA4 => pub tagclear: ReadOnly<u32>),
        (0xFA8 => _reserved2),
        /// Lock Access Register
        (0xFB0 => pub lockaccess: ReadOnly<u32>),
        /// Lock Status Register
        (0xFB4 => pub lockstat: ReadOnly<u32>),
        /// Authentication Status Register
        (0xFB8 => pub authstat: ReadOnly<u32, AUTHSTAT::Register>),
        /// Device Architecture Register
        (0xFBC => pub devicearch: ReadOnly<u32>),
        (0xFC0 => _reserved3),
        /// Device Configuration Register
        (0xFC8 => pub devicecfg: ReadOnly<u32>),
        /// Device Type Identifier Register
        (0xFCC => pub devicetypid: ReadOnly<u32>),
        (0xFD0 => pub id: IdentificationRegisters),
        (0x1000 => @END),
    },

    pub MtbDwtRegisters {
        /// MTB DWT Control Register
        (0x000 => pub ctrl: ReadOnly<u32, CTRL::Register>),
        (0x004 => _reserved0),
        (0x020 => pub comparators: [Comparator; MTB_DWT_COMPARATOR_COUNT]),
        (0x040 => _reserved1),
        /// MTB DWT Trace Buffer Control Register
        (0x200 => pub tbctrl: ReadWrite<u32, TBCTRL::Register>),
        (0x204 => _reserved2),
        /// Device Configuration Register
        (0xFC8 => pub devicecfg: ReadOnly<u32>),
        /// Device Type Identifier Register
        (0xFCC => pub devicetypid: ReadOnly<u32>),
        (0xFD0 => pub id: IdentificationRegisters),
        (0x1000 => @END),
    },

    pub Comparator {
        /// MTB DWT Comparator Register
        (0x0 => pub comp: ReadWrite<u32>),
        /// MTB DWT Comparator Mask Register
        (0x4 => pub mask: ReadWrite<u32, MASK::Register>),
        /// MTB DWT Comparator Function Register
        (0x8 => pub fct: ReadWrite<u32, FCT::Register>),
        (0xC => _reserved),
        (0x10 => @END),
    },

    pub IdentificationRegisters {
        /// Peripheral ID Registers 4 to 7
        (0x00 => pub periphid_upper: [ReadOnly<u32>; 4]),
        /// Peripheral ID Registers 0 to 3
        (0x10 => pub periphid_lower: [ReadOnly<u32>; 4]),
        /// Component ID Registers 0 to 3
        (0x20 => pub compid: [ReadOnly<u32>; 4]),
        (0x30 => @END),
    }
}

register_bitfields![u32,
    pub POSITION [
        /// Trace buffer wrapped
        WRAP OFFSET(2) NUMBITS(1) [],
        /// Trace packet address pointer, in 8-byte units
        POINTER OFFSET(3) NUMBITS(29) []
    ],
    pub MASTER [
        /// Trace buffer size, 2^(MASK + 4) bytes
        MASK OFFSET(0) NUMBITS(5) [],
        /// Trace start input enable
        TSTARTEN OFFSET(5) NUMBITS(1) [],
        /// Trace stop input enable
        TSTOPEN OFFSET(6) NUMBITS(1) [],
        /// Special function register write privilege
        SFRWPRIV OFFSET(7) NUMBITS(1) [],
        /// RAM privilege
        RAMPRIV OFFSET(8) NUMBITS(1) [],
        /// Halt request
        HALTREQ OFFSET(9) NUMBITS(1) [],
        /// Main trace enable
        EN OFFSET(31) NUMBITS(1) []
    ],
    pub FLOW [
        AUTOSTOP OFFSET(0) NUMBITS(1) [],
        AUTOHALT OFFSET(1) NUMBITS(1) [],
        /// Watermark address, in 8-byte units
        WATERMARK OFFSET(3) NUMBITS(29) []
    ],
    pub AUTHSTAT [
        BIT0 OFFSET(0) NUMBITS(1) [],
        BIT1 OFFSET(1) NUMBITS(1) [],
        BIT2 OFFSET(2) NUMBITS(1) [],
        BIT3 OFFSET(3) NUMBITS(1) []
    ],
    pub CTRL [
        /// DWT configuration controls
        DWTCFGCTRL OFFSET(0) NUMBITS(28) [],
        /// Number of comparators
        NUMCMP OFFSET(28) NUMBITS(4) []
    ],
    pub MASK [
        MASK OFFSET(0) NUMBITS(5) []
    ],
    pub FCT [
        FUNCTION OFFSET(0) NUMBITS(4) [
            Disabled = 0,
            InstructionFetch = 4,
            DataOperandRead = 5,
            DataOperandWrite = 6,
            DataOperandReadWrite = 7
        ],
        /// Data value match
        DATAVMATCH OFFSET(8) NUMBITS(1) [],
        /// Data value size
        DATAVSIZE OFFSET(10) NUMBITS(2) [
            Byte = 0,
            Halfword = 1,
            Word = 2
        ],
        /// Data value address 0
        DATAVADDR0 OFFSET(12) NUMBITS(4) [],
        /// Comparator matched
        MATCHED OFFSET(24) NUMBITS(1) []
    ],
    pub TBCTRL [
        /// Action based on comparator 0 match
        ACOMP0 OFFSET(0) NUMBITS(1) [
            TraceStop = 0,
            TraceStart = 1
        ],
        /// Action based on comparator 1 match
        ACOMP1 OFFSET(1) NUMBITS(1) [
            TraceStop = 0,
            TraceStart = 1
        ],
        /// Number of comparators
        NUMCOMP OFFSET(28) NUMBITS(4) []
    ]
];

pub const MTB_BASE_ADDR: usize = 0xF000_0000;
pub const MTB_DWT_BASE_ADDR: usize = 0xF000_1000;

pub const MTB_BASE: StaticRef<MtbRegisters> =
    unsafe { StaticRef::new(MTB_BASE_ADDR as *const MtbRegisters) };
pub const MTB_DWT_BASE: StaticRef<MtbDwtRegisters> =
    unsafe { StaticRef::new(MTB_DWT_BASE_ADDR as *const MtbDwtRegisters) };

pub const MTB_BASE_ADDRS: [usize; MTB_INSTANCE_COUNT] = [MTB_BASE_ADDR];
pub const MTB_BASE_PTRS: [StaticRef<MtbRegisters>; MTB_INSTANCE_COUNT] = [MTB_BASE];
pub const MTB_DWT_BASE_ADDRS: [usize; MTB_DWT_INSTANCE_COUNT] = [MTB_DWT_BASE_ADDR];
pub const MTB_DWT_BASE_PTRS: [StaticRef<MtbDwtRegisters>; MTB_DWT_INSTANCE_COUNT] =
    [MTB_DWT_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::{offset_of, size_of};

    #[test]
    fn trace_buffer_layout() {
        assert_eq!(size_of::<IdentificationRegisters>(), 0x30);
        assert_eq!(offset_of!(MtbRegisters, modectrl), 0xF00);
        assert_eq!(offset_of!(MtbRegisters, authstat), 0xFB8);
        assert_eq!(offset_of!(MtbRegisters, id), 0xFD0);
        assert_eq!(size_of::<MtbRegisters>(), 0x1000);
        assert_field!(POSITION::POINTER, 3, 29);
        assert_field!(MASTER::EN, 31, 1);
    }

    #[test]
    fn watchpoint_layout() {
        assert_eq!(offset_of!(MtbDwtRegisters, comparators), 0x20);
        assert_eq!(
            offset_of!(MtbDwtRegisters, comparators)
                + size_of::<Comparator>()
                + offset_of!(Comparator, fct),
            0x38
        );
        assert_eq!(offset_of!(MtbDwtRegisters, tbctrl), 0x200);
        assert_eq!(size_of::<MtbDwtRegisters>(), 0x1000);
        assert_field!(FCT::DATAVADDR0, 12, 4);
        assert_field!(CTRL::NUMCMP, 28, 4);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            POSITION [WRAP, POINTER],
            MASTER [MASK, TSTARTEN, TSTOPEN, SFRWPRIV, RAMPRIV, HALTREQ, EN],
            FLOW [AUTOSTOP, AUTOHALT, WATERMARK],
            AUTHSTAT [BIT0, BIT1, BIT2, BIT3],
            CTRL [DWTCFGCTRL, NUMCMP],
            MASK [MASK],
            FCT [FUNCTION, DATAVMATCH, DATAVSIZE, DATAVADDR0, MATCHED],
            TBCTRL [ACOMP0, ACOMP1, NUMCOMP],
        );
    }
}
