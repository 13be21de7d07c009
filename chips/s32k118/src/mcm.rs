// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Core platform Miscellaneous Control Module (MCM).
//!
//! Crossbar configuration, process identifier and the local memory
//! descriptors with their ECC error reporting.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const MCM_INSTANCE_COUNT: usize = 1;
pub const MCM_LMDR_COUNT: usize = 2;

register_structs! {
    pub McmRegisters {
        (0x000 => _reserved0),
        /// Crossbar Switch (AXBS) Slave Configuration
        (0x008 => pub plasc: ReadOnly<u16, PLASC::Register>),
        /// Crossbar Switch (AXBS) Master Configuration
        (0x00A => pub plamc: ReadOnly<u16, PLAMC::Register>),
        /// Core Platform Control Register
        (0x00C => pub cpcr: ReadWrite<u32, CPCR::Register>),
        (0x010 => _reserved1),
        /// Process ID Register
        (0x030 => pub pid: ReadWrite<u32, PID::Register>),
        (0x034 => _reserved2),
        /// Compute Operation Control Register
        (0x040 => pub cpo: ReadWrite<u32, CPO::Register>),
        (0x044 => _reserved3),
        /// Local Memory Descriptor Register n
        (0x400 => pub lmdr: [ReadWrite<u32, LMDR::Register>; MCM_LMDR_COUNT]),
        (0x408 => _reserved4),
        /// LMEM Parity and ECC Control Register
        (0x480 => pub lmpecr: ReadWrite<u32, LMPECR::Register>),
        (0x484 => _reserved5),
        /// LMEM Parity and ECC Interrupt Register
        (0x488 => pub lmpeir: ReadWrite<u32, LMPEIR::Register>),
        (0x48C => _reserved6),
        /// LMEM Fault Address Register
        (0x490 => pub lmfar: ReadOnly<u32>),
        /// LMEM Fault Attribute Register
        (0x494 => pub lmfatr: ReadOnly<u32, LMFATR::Register>),
        (0x498 => _reserved7),
        /// LMEM Fault Data High Register
        (0x4A0 => pub lmfdhr: ReadOnly<u32>),
        /// LMEM Fault Data Low Register
        (0x4A4 => pub lmfdlr: ReadOnly<u32>),
        (0x4A8 => @END),
    }
}

register_bitfields![u16,
    pub PLASC [
        /// Each bit set indicates a connected slave port
        ASC OFFSET(0) NUMBITS(8) []
    ],
    pub PLAMC [
        /// Each bit set indicates a connected master port
        AMC OFFSET(0) NUMBITS(8) []
    ]
];

register_bitfields![u32,
    pub CPCR [
        /// AXBS halt state machine status
        HLT_FSM_ST OFFSET(0) NUMBITS(2) [],
        AXBS_HLT_REQ OFFSET(2) NUMBITS(1) [],
        AXBS_HLTD OFFSET(3) NUMBITS(1) [],
        /// Flash memory controller program flash idle
        FMC_PF_IDLE OFFSET(4) NUMBITS(1) [],
        PBRIDGE_IDLE OFFSET(6) NUMBITS(1) [],
        /// Crossbar round-robin arbitration enable
        CBRR OFFSET(9) NUMBITS(1) [],
        /// SRAM_U arbitration priority
        SRAMUAP OFFSET(24) NUMBITS(2) [],
        SRAMUWP OFFSET(26) NUMBITS(1) [],
        /// SRAM_L arbitration priority
        SRAMLAP OFFSET(28) NUMBITS(2) [],
        SRAMLWP OFFSET(30) NUMBITS(1) []
    ],
    pub PID [
        PID OFFSET(0) NUMBITS(8) []
    ],
    pub CPO [
        /// Compute operation request
        CPOREQ OFFSET(0) NUMBITS(1) [],
        /// Compute operation acknowledge
        CPOACK OFFSET(1) NUMBITS(1) [],
        /// Compute operation wakeup on interrupt
        CPOWOI OFFSET(2) NUMBITS(1) []
    ],
    pub LMDR [
        /// Control field 0
        CF0 OFFSET(0) NUMBITS(4) [],
        /// Memory type
        MT OFFSET(13) NUMBITS(3) [],
        LOCK OFFSET(16) NUMBITS(1) [],
        /// Local memory data path width
        DPW OFFSET(17) NUMBITS(3) [],
        /// Level 1 cache ways
        WY OFFSET(20) NUMBITS(4) [],
        /// Local memory size
        LMSZ OFFSET(24) NUMBITS(4) [],
        /// Local memory size hole
        LMSZH OFFSET(28) NUMBITS(1) [],
        /// Local memory valid
        V OFFSET(31) NUMBITS(1) []
    ],
    pub LMPECR [
        /// Enable RAM ECC noncorrectable reporting
        ERNCR OFFSET(0) NUMBITS(1) [],
        /// Enable RAM ECC 1 bit reporting
        ER1BR OFFSET(8) NUMBITS(1) [],
        /// Enable cache parity reporting
        ECPR OFFSET(20) NUMBITS(1) []
    ],
    pub LMPEIR [
        /// Noncorrectable error flags, one per memory
        ENC OFFSET(0) NUMBITS(8) [],
        /// 1-bit error flags, one per memory
        E1B OFFSET(8) NUMBITS(8) [],
        /// Parity or ECC error location
        PEELOC OFFSET(24) NUMBITS(5) [],
        /// Valid
        V OFFSET(31) NUMBITS(1) []
    ],
    pub LMFATR [
        /// Parity/ECC fault protection
        PEFPRT OFFSET(0) NUMBITS(4) [],
        /// Parity/ECC fault master size
        PEFSIZE OFFSET(4) NUMBITS(3) [],
        /// Parity/ECC fault write
        PEFW OFFSET(7) NUMBITS(1) [],
        /// Parity/ECC fault master number
        PEFMST OFFSET(8) NUMBITS(8) [],
        /// Overrun
        OVR OFFSET(31) NUMBITS(1) []
    ]
];

pub const MCM_BASE_ADDR: usize = 0xF000_3000;

pub const MCM_BASE: StaticRef<McmRegisters> =
    unsafe { StaticRef::new(MCM_BASE_ADDR as *const McmRegisters) };

pub const MCM_BASE_ADDRS: [usize; MCM_INSTANCE_COUNT] = [MCM_BASE_ADDR];
pub const MCM_BASE_PTRS: [StaticRef<McmRegisters>; MCM_INSTANCE_COUNT] = [MCM_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::offset_of;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(McmRegisters, plasc), 0x8);
        assert_eq!(offset_of!(McmRegisters, plamc), 0xA);
        assert_eq!(offset_of!(McmRegisters, cpcr), 0xC);
        assert_eq!(offset_of!(McmRegisters, lmdr), 0x400);
        assert_eq!(offset_of!(McmRegisters, lmfdlr), 0x4A4);
        assert_field!(PLASC::ASC, 0, 8);
        assert_field!(CPCR::SRAMLAP, 28, 2);
        assert_field!(LMDR::LMSZ, 24, 4);
        assert_field!(LMPEIR::PEELOC, 24, 5);
        assert_field!(LMFATR::PEFMST, 8, 8);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            PLASC [ASC],
            PLAMC [AMC],
            CPCR [HLT_FSM_ST, AXBS_HLT_REQ, AXBS_HLTD, FMC_PF_IDLE, PBRIDGE_IDLE, CBRR, SRAMUAP,
                SRAMUWP, SRAMLAP, SRAMLWP],
            PID [PID],
            CPO [CPOREQ, CPOACK, CPOWOI],
            LMDR [CF0, MT, LOCK, DPW, WY, LMSZ, LMSZH, V],
            LMPECR [ERNCR, ER1BR, ECPR],
            LMPEIR [ENC, E1B, PEELOC, V],
            LMFATR [PEFPRT, PEFSIZE, PEFW, PEFMST, OVR],
        );
    }
}
