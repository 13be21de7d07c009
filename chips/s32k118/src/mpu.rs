// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! System Memory Protection Unit (MPU).
//!
//! This is the NXP system MPU on the crossbar slave ports, not the Arm core
//! MPU. Eight region descriptors, two slave ports and three bus masters
//! (core, debugger, eDMA).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const MPU_INSTANCE_COUNT: usize = 1;
pub const MPU_EAR_EDR_COUNT: usize = 2;
pub const MPU_RGD_COUNT: usize = 8;
pub const MPU_RGDAAC_COUNT: usize = 8;

/// Logical bus master numbers.
pub const MASTER_CORE: usize = 0;
pub const MASTER_DEBUGGER: usize = 1;
pub const MASTER_DMA: usize = 2;
pub const MASTER_COUNT: usize = 3;

/// Slave port numbers.
pub const SLAVE_FLASH_BOOTROM: usize = 0;
pub const SLAVE_SRAM_MTB_DWT_MCM: usize = 1;
/// One error record per slave port.
pub const SLAVE_COUNT: usize = MPU_EAR_EDR_COUNT;

register_structs! {
    pub MpuRegisters {
        /// Control/Error Status Register
        (0x000 => pub cesr: ReadWrite<u32, CESR::Register>),
        (0x004 => _reserved0),
        (0x010 => pub ear_edr: [ErrorRecord; MPU_EAR_EDR_COUNT]),
        (0x020 => _reserved1),
        (0x400 => pub rgd: [RegionDescriptor; MPU_RGD_COUNT]),
        (0x480 => _reserved2),
        /// Region Descriptor Alternate Access Control n
        (0x800 => pub rgdaac: [ReadWrite<u32, ACCESS::Register>; MPU_RGDAAC_COUNT]),
        (0x820 => @END),
    },

    pub ErrorRecord {
        /// Error Address Register, slave port n
        (0x0 => pub ear: ReadOnly<u32>),
        /// Error Detail Register, slave port n
        (0x4 => pub edr: ReadOnly<u32, EDR::Register>),
        (0x8 => @END),
    },

    pub RegionDescriptor {
        /// Region start address
        (0x0 => pub word0: ReadWrite<u32, WORD0::Register>),
        /// Region end address
        (0x4 => pub word1: ReadWrite<u32, WORD1::Register>),
        /// Access control rights
        (0x8 => pub word2: ReadWrite<u32, ACCESS::Register>),
        /// Valid bit and process identifier
        (0xC => pub word3: ReadWrite<u32, WORD3::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub CESR [
        /// Global enable
        VLD OFFSET(0) NUMBITS(1) [],
        /// Number of region descriptors
        NRGD OFFSET(8) NUMBITS(4) [],
        /// Number of slave ports
        NSP OFFSET(12) NUMBITS(4) [],
        /// Hardware revision level
        HRL OFFSET(16) NUMBITS(4) [],
        /// Slave port error flags, one per port, port 0 in the MSB
        SPERR OFFSET(30) NUMBITS(2) []
    ],
    pub EDR [
        /// Error read/write
        ERW OFFSET(0) NUMBITS(1) [
            Read = 0,
            Write = 1
        ],
        /// Error attributes
        EATTR OFFSET(1) NUMBITS(3) [],
        /// Error master number
        EMN OFFSET(4) NUMBITS(4) [],
        /// Error process identifier
        EPID OFFSET(8) NUMBITS(8) [],
        /// Error access control detail, one bit per region descriptor
        EACD OFFSET(16) NUMBITS(16) []
    ],
    pub WORD0 [
        SRTADDR OFFSET(5) NUMBITS(27) []
    ],
    pub WORD1 [
        ENDADDR OFFSET(5) NUMBITS(27) []
    ],
    pub ACCESS [
        M0UM OFFSET(0) NUMBITS(3) [],
        M0SM OFFSET(3) NUMBITS(2) [],
        M0PE OFFSET(5) NUMBITS(1) [],
        M1UM OFFSET(6) NUMBITS(3) [],
        M1SM OFFSET(9) NUMBITS(2) [],
        M1PE OFFSET(11) NUMBITS(1) [],
        M2UM OFFSET(12) NUMBITS(3) [],
        M2SM OFFSET(15) NUMBITS(2) [],
        M2PE OFFSET(17) NUMBITS(1) [],
        M3UM OFFSET(18) NUMBITS(3) [],
        M3SM OFFSET(21) NUMBITS(2) [],
        M3PE OFFSET(23) NUMBITS(1) [],
        M4WE OFFSET(24) NUMBITS(1) [],
        M4RE OFFSET(25) NUMBITS(1) [],
        M5WE OFFSET(26) NUMBITS(1) [],
        M5RE OFFSET(27) NUMBITS(1) [],
        M6WE OFFSET(28) NUMBITS(1) [],
        M6RE OFFSET(29) NUMBITS(1) [],
        M7WE OFFSET(30) NUMBITS(1) [],
        M7RE OFFSET(31) NUMBITS(1) []
    ],
    pub WORD3 [
        /// Valid
        VLD OFFSET(0) NUMBITS(1) [],
        /// Process identifier mask
        PIDMASK OFFSET(16) NUMBITS(8) [],
        /// Process identifier
        PID OFFSET(24) NUMBITS(8) []
    ]
];

/// Shift and width of the access control group for bus master `master` in
/// a `WORD2` / `RGDAAC` value.
///
/// Masters 0 to 3 have six-bit groups (user, supervisor, process identifier
/// enable). Masters 4 to 7 only have write and read enables.
pub const fn master_access_field(master: usize) -> Option<(usize, u32)> {
    match master {
        0..=3 => Some((master * 6, 6)),
        4..=7 => Some((24 + (master - 4) * 2, 2)),
        _ => None,
    }
}

/// Error flag of slave port `port` in `CESR`, or `None` for a port the MPU
/// does not have.
pub const fn slave_error_mask(port: usize) -> Option<u32> {
    if port < SLAVE_COUNT {
        Some((1 << 31) >> port)
    } else {
        None
    }
}

pub const MPU_BASE_ADDR: usize = 0x4000_D000;

pub const MPU_BASE: StaticRef<MpuRegisters> =
    unsafe { StaticRef::new(MPU_BASE_ADDR as *const MpuRegisters) };

pub const MPU_BASE_ADDRS: [usize; MPU_INSTANCE_COUNT] = [MPU_BASE_ADDR];
pub const MPU_BASE_PTRS: [StaticRef<MpuRegisters>; MPU_INSTANCE_COUNT] = [MPU_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::{offset_of, size_of};

    #[test]
    fn descriptors() {
        assert_eq!(offset_of!(MpuRegisters, ear_edr), 0x10);
        assert_eq!(offset_of!(MpuRegisters, rgd), 0x400);
        assert_eq!(offset_of!(MpuRegisters, rgdaac), 0x800);
        assert_eq!(size_of::<RegionDescriptor>(), 0x10);
        assert_eq!(size_of::<MpuRegisters>(), 0x820);
        assert_field!(WORD0::SRTADDR, 5, 27);
        assert_field!(WORD3::PID, 24, 8);
        assert_field!(EDR::EACD, 16, 16);
        assert_field!(CESR::SPERR, 30, 2);
    }

    #[test]
    fn master_groups_match_bitfields() {
        assert_eq!(master_access_field(MASTER_CORE), Some((ACCESS::M0UM.shift, 6)));
        assert_eq!(master_access_field(MASTER_DMA), Some((ACCESS::M2UM.shift, 6)));
        assert_eq!(master_access_field(3), Some((ACCESS::M3UM.shift, 6)));
        assert_eq!(master_access_field(4), Some((ACCESS::M4WE.shift, 2)));
        assert_eq!(master_access_field(7), Some((ACCESS::M7WE.shift, 2)));
        assert_eq!(master_access_field(8), None);
    }

    #[test]
    fn slave_error_flags() {
        assert_eq!(slave_error_mask(SLAVE_FLASH_BOOTROM), Some(0x8000_0000));
        assert_eq!(slave_error_mask(SLAVE_SRAM_MTB_DWT_MCM), Some(0x4000_0000));
        let both = (0..SLAVE_COUNT).filter_map(slave_error_mask).fold(0, |acc, m| acc | m);
        assert_eq!(u32::from(CESR::SPERR.val(0b11)), both);
    }

    #[test]
    fn missing_slave_ports_have_no_error_flag() {
        assert_eq!(slave_error_mask(SLAVE_COUNT), None);
        assert_eq!(slave_error_mask(32), None);
        assert_eq!(slave_error_mask(usize::MAX), None);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            CESR [VLD, NRGD, NSP, HRL, SPERR],
            EDR [ERW, EATTR, EMN, EPID, EACD],
            WORD0 [SRTADDR],
            WORD1 [ENDADDR],
            ACCESS [M0UM, M0SM, M0PE, M1UM, M1SM, M1PE, M2UM, M2SM, M2PE, M3UM, M3SM, M3PE, M4WE,
                M4RE, M5WE, M5RE, M6WE, M6RE, M7WE, M7RE],
            WORD3 [VLD, PIDMASK, PID],
        );
    }
}
