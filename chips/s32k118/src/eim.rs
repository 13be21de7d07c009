// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Error Injection Module (EIM).
//!
//! Flips check bits or data bits on reads from the SRAM arrays so that the
//! ECC logic and the ERM can be exercised.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const EIM_INSTANCE_COUNT: usize = 1;
pub const EIM_EICHDN_COUNT: usize = 2;

register_structs! {
    pub EimRegisters {
        /// Error Injection Module Configuration Register
        (0x000 => pub eimcr: ReadWrite<u32, EIMCR::Register>),
        /// Error Injection Channel Enable register
        (0x004 => pub eichen: ReadWrite<u32, EICHEN::Register>),
        (0x008 => _reserved0),
        /// Error injection channel descriptors
        (0x100 => pub eichd: [ChannelDescriptor; EIM_EICHDN_COUNT]),
        (0x300 => @END),
    },

    pub ChannelDescriptor {
        /// Error Injection Channel Descriptor, Word0
        (0x000 => pub word0: ReadWrite<u32, WORD0::Register>),
        /// Error Injection Channel Descriptor, Word1
        (0x004 => pub word1: ReadWrite<u32, WORD1::Register>),
        (0x008 => _reserved0),
        (0x100 => @END),
    }
}

register_bitfields![u32,
    pub EIMCR [
        /// Global error injection enable
        GEIEN OFFSET(0) NUMBITS(1) []
    ],
    pub EICHEN [
        EICH1EN OFFSET(30) NUMBITS(1) [],
        EICH0EN OFFSET(31) NUMBITS(1) []
    ],
    pub WORD0 [
        /// Checkbit mask
        CHKBIT_MASK OFFSET(25) NUMBITS(7) []
    ],
    pub WORD1 [
        /// Data mask for bytes 0 to 3
        B0_3DATA_MASK OFFSET(0) NUMBITS(32) []
    ]
];

pub const EIM_BASE_ADDR: usize = 0x4001_9000;

pub const EIM_BASE: StaticRef<EimRegisters> =
    unsafe { StaticRef::new(EIM_BASE_ADDR as *const EimRegisters) };

pub const EIM_BASE_ADDRS: [usize; EIM_INSTANCE_COUNT] = [EIM_BASE_ADDR];
pub const EIM_BASE_PTRS: [StaticRef<EimRegisters>; EIM_INSTANCE_COUNT] = [EIM_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn descriptors_are_page_strided() {
        assert_eq!(core::mem::offset_of!(EimRegisters, eichd), 0x100);
        assert_eq!(core::mem::size_of::<ChannelDescriptor>(), 0x100);
        assert_field!(WORD0::CHKBIT_MASK, 25, 7);
        assert_field!(EICHEN::EICH0EN, 31, 1);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            EIMCR [GEIEN],
            EICHEN [EICH1EN, EICH0EN],
            WORD0 [CHKBIT_MASK],
            WORD1 [B0_3DATA_MASK],
        );
    }
}
