// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Error Reporting Module (ERM).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const ERM_INSTANCE_COUNT: usize = 1;
pub const ERM_EARN_COUNT: usize = 2;

register_structs! {
    pub ErmRegisters {
        /// ERM Configuration Register 0
        (0x000 => pub cr0: ReadWrite<u32, CR0::Register>),
        (0x004 => _reserved0),
        /// ERM Status Register 0, write 1 to clear
        (0x010 => pub sr0: ReadWrite<u32, SR0::Register>),
        (0x014 => _reserved1),
        /// ERM Memory n Error Address Registers
        (0x100 => pub earn: [ErrorAddress; ERM_EARN_COUNT]),
        (0x120 => @END),
    },

    pub ErrorAddress {
        (0x00 => pub ear: ReadOnly<u32>),
        (0x04 => _reserved0),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub CR0 [
        /// Memory 1 non-correctable error interrupt enable
        ENCIE1 OFFSET(26) NUMBITS(1) [],
        /// Memory 1 single correction interrupt enable
        ESCIE1 OFFSET(27) NUMBITS(1) [],
        ENCIE0 OFFSET(30) NUMBITS(1) [],
        ESCIE0 OFFSET(31) NUMBITS(1) []
    ],
    pub SR0 [
        /// Memory 1 non-correctable error event
        NCE1 OFFSET(26) NUMBITS(1) [],
        /// Memory 1 single-bit correction event
        SBC1 OFFSET(27) NUMBITS(1) [],
        NCE0 OFFSET(30) NUMBITS(1) [],
        SBC0 OFFSET(31) NUMBITS(1) []
    ]
];

pub const ERM_BASE_ADDR: usize = 0x4001_8000;

pub const ERM_BASE: StaticRef<ErmRegisters> =
    unsafe { StaticRef::new(ERM_BASE_ADDR as *const ErmRegisters) };

pub const ERM_BASE_ADDRS: [usize; ERM_INSTANCE_COUNT] = [ERM_BASE_ADDR];
pub const ERM_BASE_PTRS: [StaticRef<ErmRegisters>; ERM_INSTANCE_COUNT] = [ERM_BASE];
pub const ERM_IRQS: [u32; ERM_INSTANCE_COUNT] = [interrupts::ERM_FAULT];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn address_registers() {
        assert_eq!(core::mem::offset_of!(ErmRegisters, sr0), 0x10);
        assert_eq!(core::mem::offset_of!(ErmRegisters, earn), 0x100);
        assert_eq!(core::mem::size_of::<ErrorAddress>(), 0x10);
        assert_field!(SR0::SBC0, 31, 1);
        assert_field!(CR0::ENCIE1, 26, 1);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            CR0 [ENCIE1, ESCIE1, ENCIE0, ESCIE0],
            SR0 [NCE1, SBC1, NCE0, SBC0],
        );
    }
}
