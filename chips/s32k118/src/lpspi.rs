// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Low Power Serial Peripheral Interface (LPSPI).

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const LPSPI_INSTANCE_COUNT: usize = 2;

register_structs! {
    pub LpspiRegisters {
        /// Version ID Register
        (0x00 => pub verid: ReadOnly<u32, VERID::Register>),
        /// Parameter Register
        (0x04 => pub param: ReadOnly<u32, PARAM::Register>),
        (0x08 => _reserved0),
        /// Control Register
        (0x10 => pub cr: ReadWrite<u32, CR::Register>),
        /// Status Register
        (0x14 => pub sr: ReadWrite<u32, SR::Register>),
        /// Interrupt Enable Register
        (0x18 => pub ier: ReadWrite<u32, IER::Register>),
        /// DMA Enable Register
        (0x1C => pub der: ReadWrite<u32, DER::Register>),
        /// Configuration Register 0
        (0x20 => pub cfgr0: ReadWrite<u32, CFGR0::Register>),
        /// Configuration Register 1
        (0x24 => pub cfgr1: ReadWrite<u32, CFGR1::Register>),
        (0x28 => _reserved1),
        /// Data Match Register 0
        (0x30 => pub dmr0: ReadWrite<u32>),
        /// Data Match Register 1
        (0x34 => pub dmr1: ReadWrite<u32>),
        (0x38 => _reserved2),
        /// Clock Configuration Register
        (0x40 => pub ccr: ReadWrite<u32, CCR::Register>),
        (0x44 => _reserved3),
        /// FIFO Control Register
        (0x58 => pub fcr: ReadWrite<u32, FCR::Register>),
        /// FIFO Status Register
        (0x5C => pub fsr: ReadOnly<u32, FSR::Register>),
        /// Transmit Command Register
        (0x60 => pub tcr: ReadWrite<u32, TCR::Register>),
        /// Transmit Data Register
        (0x64 => pub tdr: WriteOnly<u32>),
        (0x68 => _reserved4),
        /// Receive Status Register
        (0x70 => pub rsr: ReadOnly<u32, RSR::Register>),
        /// Receive Data Register
        (0x74 => pub rdr: ReadOnly<u32>),
        (0x78 => @END),
    }
}

register_bitfields![u32,
    pub VERID [
        FEATURE OFFSET(0) NUMBITS(16) [],
        MINOR OFFSET(16) NUMBITS(8) [],
        MAJOR OFFSET(24) NUMBITS(8) []
    ],
    pub PARAM [
        TXFIFO OFFSET(0) NUMBITS(8) [],
        RXFIFO OFFSET(8) NUMBITS(8) []
    ],
    pub CR [
        /// Module enable
        MEN OFFSET(0) NUMBITS(1) [],
        /// Software reset
        RST OFFSET(1) NUMBITS(1) [],
        DOZEN OFFSET(2) NUMBITS(1) [],
        DBGEN OFFSET(3) NUMBITS(1) [],
        /// Reset transmit FIFO
        RTF OFFSET(8) NUMBITS(1) [],
        /// Reset receive FIFO
        RRF OFFSET(9) NUMBITS(1) []
    ],
    pub SR [
        /// Transmit data flag
        TDF OFFSET(0) NUMBITS(1) [],
        /// Receive data flag
        RDF OFFSET(1) NUMBITS(1) [],
        /// Word complete flag
        WCF OFFSET(8) NUMBITS(1) [],
        /// Frame complete flag
        FCF OFFSET(9) NUMBITS(1) [],
        /// Transfer complete flag
        TCF OFFSET(10) NUMBITS(1) [],
        /// Transmit error flag
        TEF OFFSET(11) NUMBITS(1) [],
        /// Receive error flag
        REF OFFSET(12) NUMBITS(1) [],
        /// Data match flag
        DMF OFFSET(13) NUMBITS(1) [],
        /// Module busy flag
        MBF OFFSET(24) NUMBITS(1) []
    ],
    pub IER [
        TDIE OFFSET(0) NUMBITS(1) [],
        RDIE OFFSET(1) NUMBITS(1) [],
        WCIE OFFSET(8) NUMBITS(1) [],
        FCIE OFFSET(9) NUMBITS(1) [],
        TCIE OFFSET(10) NUMBITS(1) [],
        TEIE OFFSET(11) NUMBITS(1) [],
        REIE OFFSET(12) NUMBITS(1) [],
        DMIE OFFSET(13) NUMBITS(1) []
    ],
    pub DER [
        TDDE OFFSET(0) NUMBITS(1) [],
        RDDE OFFSET(1) NUMBITS(1) []
    ],
    pub CFGR0 [
        HREN OFFSET(0) NUMBITS(1) [],
        HRPOL OFFSET(1) NUMBITS(1) [],
        HRSEL OFFSET(2) NUMBITS(1) [],
        CIRFIFO OFFSET(8) NUMBITS(1) [],
        RDMO OFFSET(9) NUMBITS(1) []
    ],
    pub CFGR1 [
        /// Master mode
        MASTER OFFSET(0) NUMBITS(1) [],
        /// Sample point
        SAMPLE OFFSET(1) NUMBITS(1) [],
        /// Automatic PCS
        AUTOPCS OFFSET(2) NUMBITS(1) [],
        /// No stall
        NOSTALL OFFSET(3) NUMBITS(1) [],
        /// Peripheral chip select polarity, one bit per PCS
        PCSPOL OFFSET(8) NUMBITS(4) [],
        /// Match configuration
        MATCFG OFFSET(16) NUMBITS(3) [],
        /// Pin configuration
        PINCFG OFFSET(24) NUMBITS(2) [
            SinInSoutOut = 0,
            SinOnly = 1,
            SoutOnly = 2,
            SoutInSinOut = 3
        ],
        /// Output configuration
        OUTCFG OFFSET(26) NUMBITS(1) [],
        /// Peripheral chip select configuration
        PCSCFG OFFSET(27) NUMBITS(1) []
    ],
    pub CCR [
        /// SCK divider, SCK period is SCKDIV + 2 prescaled cycles
        SCKDIV OFFSET(0) NUMBITS(8) [],
        /// Delay between transfers
        DBT OFFSET(8) NUMBITS(8) [],
        /// PCS to SCK delay
        PCSSCK OFFSET(16) NUMBITS(8) [],
        /// SCK to PCS delay
        SCKPCS OFFSET(24) NUMBITS(8) []
    ],
    pub FCR [
        TXWATER OFFSET(0) NUMBITS(2) [],
        RXWATER OFFSET(16) NUMBITS(2) []
    ],
    pub FSR [
        TXCOUNT OFFSET(0) NUMBITS(3) [],
        RXCOUNT OFFSET(16) NUMBITS(3) []
    ],
    pub TCR [
        /// Frame size minus one, in bits
        FRAMESZ OFFSET(0) NUMBITS(12) [],
        /// Transfer width
        WIDTH OFFSET(16) NUMBITS(2) [
            Single = 0,
            Dual = 1,
            Quad = 2
        ],
        /// Transmit data mask
        TXMSK OFFSET(18) NUMBITS(1) [],
        /// Receive data mask
        RXMSK OFFSET(19) NUMBITS(1) [],
        /// Continuing command
        CONTC OFFSET(20) NUMBITS(1) [],
        /// Continuous transfer
        CONT OFFSET(21) NUMBITS(1) [],
        /// Byte swap
        BYSW OFFSET(22) NUMBITS(1) [],
        /// LSB first
        LSBF OFFSET(23) NUMBITS(1) [],
        /// Peripheral chip select
        PCS OFFSET(24) NUMBITS(2) [
            Pcs0 = 0,
            Pcs1 = 1,
            Pcs2 = 2,
            Pcs3 = 3
        ],
        /// Prescaler value, 2^PRESCALE
        PRESCALE OFFSET(27) NUMBITS(3) [],
        /// Clock phase
        CPHA OFFSET(30) NUMBITS(1) [],
        /// Clock polarity
        CPOL OFFSET(31) NUMBITS(1) []
    ],
    pub RSR [
        /// Start of frame
        SOF OFFSET(0) NUMBITS(1) [],
        /// Receive FIFO empty
        RXEMPTY OFFSET(1) NUMBITS(1) []
    ]
];

pub const LPSPI0_BASE_ADDR: usize = 0x4002_C000;
pub const LPSPI1_BASE_ADDR: usize = 0x4002_D000;

pub const LPSPI0_BASE: StaticRef<LpspiRegisters> =
    unsafe { StaticRef::new(LPSPI0_BASE_ADDR as *const LpspiRegisters) };
pub const LPSPI1_BASE: StaticRef<LpspiRegisters> =
    unsafe { StaticRef::new(LPSPI1_BASE_ADDR as *const LpspiRegisters) };

pub const LPSPI_BASE_ADDRS: [usize; LPSPI_INSTANCE_COUNT] = [LPSPI0_BASE_ADDR, LPSPI1_BASE_ADDR];
pub const LPSPI_BASE_PTRS: [StaticRef<LpspiRegisters>; LPSPI_INSTANCE_COUNT] =
    [LPSPI0_BASE, LPSPI1_BASE];
pub const LPSPI_IRQS: [u32; LPSPI_INSTANCE_COUNT] = [interrupts::LPSPI0, interrupts::LPSPI1];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::offset_of;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(LpspiRegisters, cr), 0x10);
        assert_eq!(offset_of!(LpspiRegisters, dmr0), 0x30);
        assert_eq!(offset_of!(LpspiRegisters, ccr), 0x40);
        assert_eq!(offset_of!(LpspiRegisters, fcr), 0x58);
        assert_eq!(offset_of!(LpspiRegisters, tcr), 0x60);
        assert_eq!(offset_of!(LpspiRegisters, rsr), 0x70);
        assert_eq!(core::mem::size_of::<LpspiRegisters>(), 0x78);
    }

    #[test]
    fn transmit_command() {
        assert_field!(TCR::FRAMESZ, 0, 12);
        assert_field!(TCR::PCS, 24, 2);
        assert_field!(TCR::PRESCALE, 27, 3);
        assert_field!(CFGR1::PCSPOL, 8, 4);
        assert_field!(CCR::SCKPCS, 24, 8);
        // 8-bit frames on PCS1, mode 3.
        let tcr = TCR::FRAMESZ.val(7) + TCR::PCS::Pcs1 + TCR::CPOL::SET + TCR::CPHA::SET;
        assert_eq!(u32::from(tcr), 0xC100_0007);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            VERID [FEATURE, MINOR, MAJOR],
            PARAM [TXFIFO, RXFIFO],
            CR [MEN, RST, DOZEN, DBGEN, RTF, RRF],
            SR [TDF, RDF, WCF, FCF, TCF, TEF, REF, DMF, MBF],
            IER [TDIE, RDIE, WCIE, FCIE, TCIE, TEIE, REIE, DMIE],
            DER [TDDE, RDDE],
            CFGR0 [HREN, HRPOL, HRSEL, CIRFIFO, RDMO],
            CFGR1 [MASTER, SAMPLE, AUTOPCS, NOSTALL, PCSPOL, MATCFG, PINCFG, OUTCFG, PCSCFG],
            CCR [SCKDIV, DBT, PCSSCK, SCKPCS],
            FCR [TXWATER, RXWATER],
            FSR [TXCOUNT, RXCOUNT],
            TCR [FRAMESZ, WIDTH, TXMSK, RXMSK, CONTC, CONT, BYSW, LSBF, PCS, PRESCALE, CPHA, CPOL],
            RSR [SOF, RXEMPTY],
        );
    }
}
