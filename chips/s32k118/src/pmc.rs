// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Power Management Controller (PMC).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const PMC_INSTANCE_COUNT: usize = 1;

register_structs! {
    pub PmcRegisters {
        /// Low Voltage Detect Status and Control 1 Register
        (0x0 => pub lvdsc1: ReadWrite<u8, LVDSC1::Register>),
        /// Low Voltage Detect Status and Control 2 Register
        (0x1 => pub lvdsc2: ReadWrite<u8, LVDSC2::Register>),
        /// Regulator Status and Control Register
        (0x2 => pub regsc: ReadWrite<u8, REGSC::Register>),
        (0x3 => _reserved0),
        /// Low Power Oscillator Trim Register
        (0x4 => pub lpotrim: ReadWrite<u8, LPOTRIM::Register>),
        (0x5 => @END),
    }
}

register_bitfields![u8,
    pub LVDSC1 [
        /// Low voltage detect reset enable
        LVDRE OFFSET(4) NUMBITS(1) [],
        /// Low voltage detect interrupt enable
        LVDIE OFFSET(5) NUMBITS(1) [],
        /// Low voltage detect acknowledge
        LVDACK OFFSET(6) NUMBITS(1) [],
        /// Low voltage detect flag
        LVDF OFFSET(7) NUMBITS(1) []
    ],
    pub LVDSC2 [
        /// Low voltage warning interrupt enable
        LVWIE OFFSET(5) NUMBITS(1) [],
        /// Low voltage warning acknowledge
        LVWACK OFFSET(6) NUMBITS(1) [],
        /// Low voltage warning flag
        LVWF OFFSET(7) NUMBITS(1) []
    ],
    pub REGSC [
        /// Biasing enable
        BIASEN OFFSET(0) NUMBITS(1) [],
        /// Clock bias disable
        CLKBIASDIS OFFSET(1) NUMBITS(1) [],
        /// Regulator in full performance mode
        REGFPM OFFSET(2) NUMBITS(1) [],
        /// LPO status
        LPOSTAT OFFSET(6) NUMBITS(1) [],
        /// LPO disable
        LPODIS OFFSET(7) NUMBITS(1) []
    ],
    pub LPOTRIM [
        /// LPO trimming bits, two's complement
        LPOTRIM OFFSET(0) NUMBITS(5) []
    ]
];

pub const PMC_BASE_ADDR: usize = 0x4007_D000;

pub const PMC_BASE: StaticRef<PmcRegisters> =
    unsafe { StaticRef::new(PMC_BASE_ADDR as *const PmcRegisters) };

pub const PMC_BASE_ADDRS: [usize; PMC_INSTANCE_COUNT] = [PMC_BASE_ADDR];
pub const PMC_BASE_PTRS: [StaticRef<PmcRegisters>; PMC_INSTANCE_COUNT] = [PMC_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn byte_registers() {
        assert_eq!(core::mem::offset_of!(PmcRegisters, lpotrim), 0x4);
        assert_eq!(core::mem::size_of::<PmcRegisters>(), 0x5);
        assert_field!(LVDSC1::LVDF, 7, 1);
        assert_field!(REGSC::LPODIS, 7, 1);
        assert_field!(LPOTRIM::LPOTRIM, 0, 5);
        assert_eq!(u8::from(LPOTRIM::LPOTRIM.val(0x3F)), 0x1F);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            LVDSC1 [LVDRE, LVDIE, LVDACK, LVDF],
            LVDSC2 [LVWIE, LVWACK, LVWF],
            REGSC [BIASEN, CLKBIASDIS, REGFPM, LPOSTAT, LPODIS],
            LPOTRIM [LPOTRIM],
        );
    }
}
