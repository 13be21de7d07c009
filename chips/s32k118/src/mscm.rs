// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Miscellaneous System Control Module (MSCM).
//!
//! Read-only processor configuration and on-chip memory descriptors.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const MSCM_INSTANCE_COUNT: usize = 1;
pub const MSCM_CP_CFG_COUNT: usize = 4;
pub const MSCM_OCMDR_COUNT: usize = 3;

register_structs! {
    pub MscmRegisters {
        /// Configuration of the processor issuing the access
        (0x000 => pub cpx: ProcessorConfig),
        /// Configuration of processor 0
        (0x020 => pub cp0: ProcessorConfig),
        (0x040 => _reserved0),
        /// On-Chip Memory Descriptor Register n
        (0x400 => pub ocmdr: [ReadWrite<u32, OCMDR::Register>; MSCM_OCMDR_COUNT]),
        (0x40C => @END),
    },

    pub ProcessorConfig {
        (0x00 => pub cp_type: ReadOnly<u32, CPTYPE::Register>),
        (0x04 => pub num: ReadOnly<u32, CPNUM::Register>),
        (0x08 => pub master: ReadOnly<u32, CPMASTER::Register>),
        (0x0C => pub count: ReadOnly<u32, CPCOUNT::Register>),
        (0x10 => pub cfg0: ReadOnly<u32, CPCFG0::Register>),
        (0x14 => pub cfg1: ReadOnly<u32, CPCFG1::Register>),
        (0x18 => pub cfg2: ReadOnly<u32, CPCFG2::Register>),
        (0x1C => pub cfg3: ReadOnly<u32, CPCFG3::Register>),
        (0x20 => @END),
    }
}

register_bitfields![u32,
    pub CPTYPE [
        /// Processor revision
        RYPZ OFFSET(0) NUMBITS(8) [],
        /// Processor personality
        PERSONALITY OFFSET(8) NUMBITS(24) []
    ],
    pub CPNUM [
        CPN OFFSET(0) NUMBITS(1) []
    ],
    pub CPMASTER [
        /// Physical master number
        PPMN OFFSET(0) NUMBITS(6) []
    ],
    pub CPCOUNT [
        /// Processor count, minus one
        PCNT OFFSET(0) NUMBITS(2) []
    ],
    pub CPCFG0 [
        DCWY OFFSET(0) NUMBITS(8) [],
        DCSZ OFFSET(8) NUMBITS(8) [],
        ICWY OFFSET(16) NUMBITS(8) [],
        ICSZ OFFSET(24) NUMBITS(8) []
    ],
    pub CPCFG1 [
        L2WY OFFSET(16) NUMBITS(8) [],
        L2SZ OFFSET(24) NUMBITS(8) []
    ],
    pub CPCFG2 [
        /// Tightly-coupled upper memory size
        TMUSZ OFFSET(8) NUMBITS(8) [],
        /// Tightly-coupled lower memory size
        TMLSZ OFFSET(24) NUMBITS(8) []
    ],
    pub CPCFG3 [
        FPU OFFSET(0) NUMBITS(1) [],
        SIMD OFFSET(1) NUMBITS(1) [],
        JAZ OFFSET(2) NUMBITS(1) [],
        MMU OFFSET(3) NUMBITS(1) [],
        TZ OFFSET(4) NUMBITS(1) [],
        CMP OFFSET(5) NUMBITS(1) [],
        BB OFFSET(6) NUMBITS(1) [],
        SBP OFFSET(8) NUMBITS(2) []
    ],
    pub OCMDR [
        /// OCMEM control field 1
        OCM1 OFFSET(4) NUMBITS(2) [],
        /// OCMEM type
        OCMT OFFSET(13) NUMBITS(3) [],
        /// Read only, locks the register
        RO OFFSET(16) NUMBITS(1) [],
        /// OCMEM datapath width
        OCMW OFFSET(17) NUMBITS(3) [],
        /// OCMEM size
        OCMSZ OFFSET(24) NUMBITS(4) [],
        /// OCMEM size "hole"
        OCMSZH OFFSET(28) NUMBITS(1) [],
        /// OCMEM valid
        V OFFSET(31) NUMBITS(1) []
    ]
];

pub const MSCM_BASE_ADDR: usize = 0x4000_1000;

pub const MSCM_BASE: StaticRef<MscmRegisters> =
    unsafe { StaticRef::new(MSCM_BASE_ADDR as *const MscmRegisters) };

pub const MSCM_BASE_ADDRS: [usize; MSCM_INSTANCE_COUNT] = [MSCM_BASE_ADDR];
pub const MSCM_BASE_PTRS: [StaticRef<MscmRegisters>; MSCM_INSTANCE_COUNT] = [MSCM_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::{offset_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(size_of::<ProcessorConfig>(), 0x20);
        assert_eq!(offset_of!(MscmRegisters, cp0), 0x20);
        assert_eq!(offset_of!(MscmRegisters, cp0) + offset_of!(ProcessorConfig, cfg3), 0x3C);
        assert_eq!(offset_of!(MscmRegisters, ocmdr), 0x400);
        assert_field!(CPTYPE::PERSONALITY, 8, 24);
        assert_field!(OCMDR::OCMSZ, 24, 4);
        assert_field!(OCMDR::V, 31, 1);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            CPTYPE [RYPZ, PERSONALITY],
            CPNUM [CPN],
            CPMASTER [PPMN],
            CPCOUNT [PCNT],
            CPCFG0 [DCWY, DCSZ, ICWY, ICSZ],
            CPCFG1 [L2WY, L2SZ],
            CPCFG2 [TMUSZ, TMLSZ],
            CPCFG3 [FPU, SIMD, JAZ, MMU, TZ, CMP, BB, SBP],
            OCMDR [OCM1, OCMT, RO, OCMW, OCMSZ, OCMSZH, V],
        );
    }
}
