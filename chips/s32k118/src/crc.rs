// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Cyclic Redundancy Check (CRC) engine.
//!
//! The data register accepts 8, 16 and 32-bit writes. Narrow accesses go
//! through the overlay blocks [`CrcData8Registers`] and
//! [`CrcData16Registers`], which sit at the same base address as
//! [`CrcRegisters`].

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const CRC_INSTANCE_COUNT: usize = 1;

/// Generator polynomial loaded by the reset configuration (CRC-16/CCITT).
pub const DEFAULT_POLYNOMIAL: u32 = 0x1021;
/// Seed loaded by the reset configuration.
pub const DEFAULT_SEED: u32 = 0xFFFF;

register_structs! {
    pub CrcRegisters {
        // CRC Data register
        (0x000 => pub data: ReadWrite<u32, DATA::Register>),
        // CRC Polynomial register
        (0x004 => pub gpoly: ReadWrite<u32, GPOLY::Register>),
        // CRC Control register
        (0x008 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        (0x00C => @END),
    },

    pub CrcData16Registers {
        // Lower half of the data register
        (0x000 => pub datal: ReadWrite<u16>),
        // Upper half of the data register
        (0x002 => pub datah: ReadWrite<u16>),
        (0x004 => @END),
    },

    pub CrcData8Registers {
        (0x000 => pub datall: ReadWrite<u8>),
        (0x001 => pub datalu: ReadWrite<u8>),
        (0x002 => pub datahl: ReadWrite<u8>),
        (0x003 => pub datahu: ReadWrite<u8>),
        (0x004 => @END),
    }
}

register_bitfields![u32,
    pub DATA [
        /// CRC low lower byte
        LL OFFSET(0) NUMBITS(8) [],
        /// CRC low upper byte
        LU OFFSET(8) NUMBITS(8) [],
        /// CRC high lower byte
        HL OFFSET(16) NUMBITS(8) [],
        /// CRC high upper byte
        HU OFFSET(24) NUMBITS(8) []
    ],
    pub GPOLY [
        /// Low half-word of the polynomial
        LOW OFFSET(0) NUMBITS(16) [],
        /// High half-word of the polynomial, ignored in 16-bit mode
        HIGH OFFSET(16) NUMBITS(16) []
    ],
    pub CTRL [
        /// Width of the CRC protocol
        TCRC OFFSET(24) NUMBITS(1) [
            Bits16 = 0,
            Bits32 = 1
        ],
        /// Write CRC data register as seed
        WAS OFFSET(25) NUMBITS(1) [],
        /// Complement read of the CRC data register
        FXOR OFFSET(26) NUMBITS(1) [],
        /// Type of transpose for read
        TOTR OFFSET(28) NUMBITS(2) [
            NoTranspose = 0,
            Bits = 1,
            BitsAndBytes = 2,
            Bytes = 3
        ],
        /// Type of transpose for writes
        TOT OFFSET(30) NUMBITS(2) [
            NoTranspose = 0,
            Bits = 1,
            BitsAndBytes = 2,
            Bytes = 3
        ]
    ]
];

pub const CRC_BASE_ADDR: usize = 0x4003_2000;

pub const CRC_BASE: StaticRef<CrcRegisters> =
    unsafe { StaticRef::new(CRC_BASE_ADDR as *const CrcRegisters) };
pub const CRC_DATA16: StaticRef<CrcData16Registers> =
    unsafe { StaticRef::new(CRC_BASE_ADDR as *const CrcData16Registers) };
pub const CRC_DATA8: StaticRef<CrcData8Registers> =
    unsafe { StaticRef::new(CRC_BASE_ADDR as *const CrcData8Registers) };

pub const CRC_BASE_ADDRS: [usize; CRC_INSTANCE_COUNT] = [CRC_BASE_ADDR];
pub const CRC_BASE_PTRS: [StaticRef<CrcRegisters>; CRC_INSTANCE_COUNT] = [CRC_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn overlays_share_the_data_word() {
        assert_eq!(core::mem::size_of::<CrcData8Registers>(), 4);
        assert_eq!(core::mem::size_of::<CrcData16Registers>(), 4);
        assert_eq!(core::mem::offset_of!(CrcData8Registers, datahu), 3);
        assert_eq!(core::mem::offset_of!(CrcData16Registers, datah), 2);
        assert_eq!(CRC_DATA8.address(), CRC_BASE.address());
        assert_eq!(CRC_DATA16.address(), CRC_BASE.address());
    }

    #[test]
    fn control_fields() {
        assert_eq!(core::mem::offset_of!(CrcRegisters, ctrl), 8);
        assert_field!(DATA::HU, 24, 8);
        assert_field!(GPOLY::HIGH, 16, 16);
        assert_field!(CTRL::TCRC, 24, 1);
        assert_field!(CTRL::TOTR, 28, 2);
        assert_field!(CTRL::TOT, 30, 2);
        // Reset configuration: 16-bit, no transposition, no complement.
        assert_eq!(u32::from(CTRL::TCRC::Bits16 + CTRL::TOT::NoTranspose), 0);
        assert_eq!(u32::from(GPOLY::LOW.val(DEFAULT_POLYNOMIAL)), 0x1021);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            DATA [LL, LU, HL, HU],
            GPOLY [LOW, HIGH],
            CTRL [TCRC, WAS, FXOR, TOTR, TOT],
        );
    }
}
