// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Flash memory module controller (FTFC).
//!
//! Commands are issued by loading the FCCOB command object and clearing
//! `FSTAT.CCIF`. FCCOB bytes are stored big-endian within each word, so
//! logical byte `n` lives at array index `n ^ 3`, see [`fccob_index`].
//!
//! The FlexNVM partition codes programmed by `PGMPART` are decoded by
//! [`dflash_size`] and [`eeprom_size`].

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const FTFC_INSTANCE_COUNT: usize = 1;
pub const FTFC_FCCOB_COUNT: usize = 12;
pub const FTFC_FPROT_COUNT: usize = 4;

register_structs! {
    pub FtfcRegisters {
        /// Flash Status Register
        (0x00 => pub fstat: ReadWrite<u8, FSTAT::Register>),
        /// Flash Configuration Register
        (0x01 => pub fcnfg: ReadWrite<u8, FCNFG::Register>),
        /// Flash Security Register
        (0x02 => pub fsec: ReadOnly<u8, FSEC::Register>),
        /// Flash Option Register
        (0x03 => pub fopt: ReadOnly<u8>),
        /// Flash Common Command Object Registers
        (0x04 => pub fccob: [ReadWrite<u8>; FTFC_FCCOB_COUNT]),
        /// Program Flash Protection Registers
        (0x10 => pub fprot: [ReadWrite<u8>; FTFC_FPROT_COUNT]),
        (0x14 => _reserved0),
        /// EEPROM Protection Register
        (0x16 => pub feprot: ReadWrite<u8>),
        /// Data Flash Protection Register
        (0x17 => pub fdprot: ReadWrite<u8>),
        (0x18 => _reserved1),
        /// Flash CSEc Status Register
        (0x2C => pub fcsestat: ReadOnly<u8, FCSESTAT::Register>),
        (0x2D => _reserved2),
        /// Flash Error Status Register
        (0x2E => pub ferstat: ReadWrite<u8, FERSTAT::Register>),
        /// Flash Error Configuration Register
        (0x2F => pub fercnfg: ReadWrite<u8, FERCNFG::Register>),
        (0x30 => @END),
    }
}

register_bitfields![u8,
    pub FSTAT [
        /// Memory controller command completion status
        MGSTAT0 OFFSET(0) NUMBITS(1) [],
        /// Flash protection violation flag
        FPVIOL OFFSET(4) NUMBITS(1) [],
        /// Flash access error flag
        ACCERR OFFSET(5) NUMBITS(1) [],
        /// Flash read collision error flag
        RDCOLERR OFFSET(6) NUMBITS(1) [],
        /// Command complete interrupt flag
        CCIF OFFSET(7) NUMBITS(1) []
    ],
    pub FCNFG [
        /// RAM ready
        RAMRDY OFFSET(0) NUMBITS(1) [],
        /// EEPROM ready
        EEERDY OFFSET(1) NUMBITS(1) [],
        /// Erase suspend
        ERSSUSP OFFSET(4) NUMBITS(1) [],
        /// Erase all request
        ERSAREQ OFFSET(5) NUMBITS(1) [],
        /// Read collision error interrupt enable
        RDCOLLIE OFFSET(6) NUMBITS(1) [],
        /// Command complete interrupt enable
        CCIE OFFSET(7) NUMBITS(1) []
    ],
    pub FSEC [
        /// Flash security
        SEC OFFSET(0) NUMBITS(2) [
            Unsecure = 0b10
        ],
        /// Factory failure analysis access code
        FSLACC OFFSET(2) NUMBITS(2) [],
        /// Mass erase enable
        MEEN OFFSET(4) NUMBITS(2) [],
        /// Backdoor key security enable
        KEYEN OFFSET(6) NUMBITS(2) []
    ],
    pub FCSESTAT [
        /// Busy
        BSY OFFSET(0) NUMBITS(1) [],
        /// Secure boot
        SB OFFSET(1) NUMBITS(1) [],
        /// Secure boot initialization
        BIN OFFSET(2) NUMBITS(1) [],
        /// Secure boot finished
        BFN OFFSET(3) NUMBITS(1) [],
        /// Secure boot OK
        BOK OFFSET(4) NUMBITS(1) [],
        /// Random number generator initialized
        RIN OFFSET(5) NUMBITS(1) [],
        /// External debug
        EDB OFFSET(6) NUMBITS(1) [],
        /// Internal debug
        IDB OFFSET(7) NUMBITS(1) []
    ],
    pub FERSTAT [
        /// Double bit fault detect interrupt flag
        DFDIF OFFSET(1) NUMBITS(1) []
    ],
    pub FERCNFG [
        /// Double bit fault detect interrupt enable
        DFDIE OFFSET(1) NUMBITS(1) [],
        /// Force double bit fault detect
        FDFD OFFSET(5) NUMBITS(1) []
    ]
];

pub const FTFC_BASE_ADDR: usize = 0x4002_0000;

pub const FTFC_BASE: StaticRef<FtfcRegisters> =
    unsafe { StaticRef::new(FTFC_BASE_ADDR as *const FtfcRegisters) };

pub const FTFC_BASE_ADDRS: [usize; FTFC_INSTANCE_COUNT] = [FTFC_BASE_ADDR];
pub const FTFC_BASE_PTRS: [StaticRef<FtfcRegisters>; FTFC_INSTANCE_COUNT] = [FTFC_BASE];
pub const FTFC_COMMAND_COMPLETE_IRQS: [u32; FTFC_INSTANCE_COUNT] = [interrupts::FTFC];

/// Commands accepted in `FCCOB0`.
///
/// `Read Resource` (0x03) exists on larger parts of the family but is not
/// implemented by this flash controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FlashCommand {
    ReadOneBlock = 0x00,
    ReadOneSection = 0x01,
    ProgramCheck = 0x02,
    ProgramPhrase = 0x07,
    EraseBlock = 0x08,
    EraseSector = 0x09,
    ProgramSection = 0x0B,
    ReadOneAllBlocks = 0x40,
    ReadOnce = 0x41,
    ProgramOnce = 0x43,
    EraseAllBlocks = 0x44,
    VerifyBackdoorKey = 0x45,
    EraseAllBlocksUnsecure = 0x49,
    ProgramPartition = 0x80,
    SetFlexRamFunction = 0x81,
}

impl FlashCommand {
    pub const ALL: [FlashCommand; 15] = [
        FlashCommand::ReadOneBlock,
        FlashCommand::ReadOneSection,
        FlashCommand::ProgramCheck,
        FlashCommand::ProgramPhrase,
        FlashCommand::EraseBlock,
        FlashCommand::EraseSector,
        FlashCommand::ProgramSection,
        FlashCommand::ReadOneAllBlocks,
        FlashCommand::ReadOnce,
        FlashCommand::ProgramOnce,
        FlashCommand::EraseAllBlocks,
        FlashCommand::VerifyBackdoorKey,
        FlashCommand::EraseAllBlocksUnsecure,
        FlashCommand::ProgramPartition,
        FlashCommand::SetFlexRamFunction,
    ];

    /// Decode an `FCCOB0` command code.
    pub fn from_u8(code: u8) -> Option<FlashCommand> {
        Self::ALL.into_iter().find(|cmd| *cmd as u8 == code)
    }
}

/// Array index in `FCCOB` of logical command byte `n`.
pub const fn fccob_index(n: usize) -> usize {
    n ^ 3
}

/// Data flash size in bytes for a FlexNVM partition code (`DEPART`).
///
/// Reserved codes return `None`.
pub fn dflash_size(depart: u8) -> Option<u32> {
    match depart & 0xF {
        0b0000 => Some(0x8000),
        0b0011 => Some(0),
        0b1000 => Some(0),
        0b1001 => Some(0x2000),
        0b1011 => Some(0x8000),
        0b1111 => Some(0x8000),
        _ => None,
    }
}

/// Emulated EEPROM size in bytes for an `EEESIZE` code.
///
/// Reserved codes return `None`.
pub fn eeprom_size(eeesize: u8) -> Option<u16> {
    match eeesize & 0xF {
        0b0011 => Some(0x800),
        0b1111 => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn command_object_is_byte_swapped() {
        assert_eq!(core::mem::offset_of!(FtfcRegisters, fccob), 0x04);
        assert_eq!(core::mem::offset_of!(FtfcRegisters, fcsestat), 0x2C);
        assert_eq!(core::mem::size_of::<FtfcRegisters>(), 0x30);
        // FCCOB0 is the fourth byte, FCCOB8 is the twelfth.
        assert_eq!(fccob_index(0), 3);
        assert_eq!(fccob_index(3), 0);
        assert_eq!(fccob_index(4), 7);
        assert_eq!(fccob_index(8), 11);
        assert_eq!(fccob_index(0xB), 8);
    }

    #[test]
    fn status_bits() {
        assert_field!(FSTAT::CCIF, 7, 1);
        assert_field!(FSTAT::ACCERR, 5, 1);
        assert_field!(FSEC::KEYEN, 6, 2);
        assert_field!(FCSESTAT::IDB, 7, 1);
        assert_field!(FERCNFG::FDFD, 5, 1);
    }

    #[test]
    fn command_codes() {
        assert_eq!(FlashCommand::from_u8(0x09), Some(FlashCommand::EraseSector));
        assert_eq!(FlashCommand::from_u8(0x80), Some(FlashCommand::ProgramPartition));
        // Read Resource is not available on this part.
        assert_eq!(FlashCommand::from_u8(0x03), None);
        for cmd in FlashCommand::ALL {
            assert_eq!(FlashCommand::from_u8(cmd as u8), Some(cmd));
        }
    }

    #[test]
    fn partition_codes() {
        assert_eq!(dflash_size(0b0000), Some(32 * 1024));
        assert_eq!(dflash_size(0b1001), Some(8 * 1024));
        assert_eq!(dflash_size(0b0011), Some(0));
        assert_eq!(dflash_size(0b0001), None);
        assert_eq!(eeprom_size(0b0011), Some(2048));
        assert_eq!(eeprom_size(0b1111), Some(0));
        assert_eq!(eeprom_size(0b0010), None);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            FSTAT [MGSTAT0, FPVIOL, ACCERR, RDCOLERR, CCIF],
            FCNFG [RAMRDY, EEERDY, ERSSUSP, ERSAREQ, RDCOLLIE, CCIE],
            FSEC [SEC, FSLACC, MEEN, KEYEN],
            FCSESTAT [BSY, SB, BIN, BFN, BOK, RIN, EDB, IDB],
            FERSTAT [DFDIF],
            FERCNFG [DFDIE, FDFD],
        );
    }
}
