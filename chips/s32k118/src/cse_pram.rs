// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! CSEc parameter RAM.
//!
//! 128 bytes directly above FlexRAM through which commands are passed to the
//! security engine. Words are big-endian: byte 0 of a word is its most
//! significant byte.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const CSE_PRAM_INSTANCE_COUNT: usize = 1;
pub const CSE_PRAM_RAMN_COUNT: usize = 32;

/// Size in bytes of one command page.
pub const PAGE_SIZE: usize = 16;

/// Byte offset of each command page.
pub const PAGE_OFFSETS: [usize; 8] = [0x00, 0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70];

// Byte offsets of command parameters.

/// Error bits returned by every command.
pub const ERROR_BITS_OFFSET: usize = 0x04;
/// MAC length for `VERIFY_MAC`.
pub const MAC_LENGTH_OFFSET: usize = 0x08;
/// Message length for `GENERATE_MAC` and `VERIFY_MAC`.
pub const MESSAGE_LENGTH_OFFSET: usize = 0x0C;
/// Page count for the ECB/CBC and `MP_COMPRESS` commands.
pub const PAGE_LENGTH_OFFSET: usize = 0x0E;
/// Flash start address for the pointer method MAC commands.
pub const FLASH_START_ADDRESS_OFFSET: usize = 0x10;
/// Verification status written by `VERIFY_MAC`.
pub const VERIFICATION_STATUS_OFFSET: usize = 0x14;
/// Boot flavor for `BOOT_DEFINE`.
pub const BOOT_FLAVOR_OFFSET: usize = 0x1B;
/// Boot size for `BOOT_DEFINE`.
pub const BOOT_SIZE_OFFSET: usize = 0x1C;
/// Status register returned by `GET_ID`.
pub const SREG_OFFSET: usize = 0x2F;

/// Word index in `ramn` and bit shift within that word of the byte at
/// `offset`, or `None` past the end of the window.
pub const fn byte_location(offset: usize) -> Option<(usize, usize)> {
    if offset < CSE_PRAM_RAMN_COUNT * 4 {
        Some((offset / 4, (3 - offset % 4) * 8))
    } else {
        None
    }
}

register_structs! {
    pub CsePramRegisters {
        (0x000 => pub ramn: [ReadWrite<u32, RAMN::Register>; CSE_PRAM_RAMN_COUNT]),
        (0x080 => @END),
    }
}

register_bitfields![u32,
    pub RAMN [
        BYTE_3 OFFSET(0) NUMBITS(8) [],
        BYTE_2 OFFSET(8) NUMBITS(8) [],
        BYTE_1 OFFSET(16) NUMBITS(8) [],
        BYTE_0 OFFSET(24) NUMBITS(8) []
    ]
];

pub const CSE_PRAM_BASE_ADDR: usize = 0x1400_0800;

pub const CSE_PRAM_BASE: StaticRef<CsePramRegisters> =
    unsafe { StaticRef::new(CSE_PRAM_BASE_ADDR as *const CsePramRegisters) };

pub const CSE_PRAM_BASE_ADDRS: [usize; CSE_PRAM_INSTANCE_COUNT] = [CSE_PRAM_BASE_ADDR];
pub const CSE_PRAM_BASE_PTRS: [StaticRef<CsePramRegisters>; CSE_PRAM_INSTANCE_COUNT] =
    [CSE_PRAM_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn pages_fill_the_window() {
        assert_eq!(core::mem::size_of::<CsePramRegisters>(), 8 * PAGE_SIZE);
        assert_field!(RAMN::BYTE_0, 24, 8);
        assert_field!(RAMN::BYTE_3, 0, 8);
        for (page, offset) in PAGE_OFFSETS.iter().enumerate() {
            assert_eq!(*offset, page * PAGE_SIZE);
        }
    }

    #[test]
    fn parameter_offsets() {
        assert_eq!(ERROR_BITS_OFFSET, 0x4);
        assert_eq!(MAC_LENGTH_OFFSET, 0x8);
        assert_eq!(MESSAGE_LENGTH_OFFSET, 0xC);
        assert_eq!(PAGE_LENGTH_OFFSET, 0xE);
        assert_eq!(FLASH_START_ADDRESS_OFFSET, 0x10);
        assert_eq!(VERIFICATION_STATUS_OFFSET, 0x14);
        assert_eq!(BOOT_FLAVOR_OFFSET, 0x1B);
        assert_eq!(BOOT_SIZE_OFFSET, 0x1C);
        assert_eq!(SREG_OFFSET, 0x2F);
    }

    #[test]
    fn parameters_land_in_big_endian_lanes() {
        assert_eq!(byte_location(ERROR_BITS_OFFSET), Some((1, RAMN::BYTE_0.shift)));
        assert_eq!(byte_location(PAGE_LENGTH_OFFSET), Some((3, RAMN::BYTE_2.shift)));
        assert_eq!(byte_location(BOOT_FLAVOR_OFFSET), Some((6, RAMN::BYTE_3.shift)));
        assert_eq!(byte_location(SREG_OFFSET), Some((11, RAMN::BYTE_3.shift)));
        assert_eq!(byte_location(0x7F), Some((31, 0)));
        assert_eq!(byte_location(0x80), None);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            RAMN [BYTE_3, BYTE_2, BYTE_1, BYTE_0],
        );
    }
}
