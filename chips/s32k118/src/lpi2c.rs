// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Low Power Inter-Integrated Circuit (LPI2C).
//!
//! One instance with independent master and slave logic. Both share a
//! single interrupt line on this part.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const LPI2C_INSTANCE_COUNT: usize = 1;

register_structs! {
    pub Lpi2cRegisters {
        /// Version ID Register
        (0x000 => pub verid: ReadOnly<u32, VERID::Register>),
        /// Parameter Register
        (0x004 => pub param: ReadOnly<u32, PARAM::Register>),
        (0x008 => _reserved0),
        /// Master Control Register
        (0x010 => pub mcr: ReadWrite<u32, MCR::Register>),
        /// Master Status Register
        (0x014 => pub msr: ReadWrite<u32, MSR::Register>),
        /// Master Interrupt Enable Register
        (0x018 => pub mier: ReadWrite<u32, MIER::Register>),
        /// Master DMA Enable Register
        (0x01C => pub mder: ReadWrite<u32, MDER::Register>),
        /// Master Configuration Register 0
        (0x020 => pub mcfgr0: ReadWrite<u32, MCFGR0::Register>),
        /// Master Configuration Register 1
        (0x024 => pub mcfgr1: ReadWrite<u32, MCFGR1::Register>),
        /// Master Configuration Register 2
        (0x028 => pub mcfgr2: ReadWrite<u32, MCFGR2::Register>),
        /// Master Configuration Register 3
        (0x02C => pub mcfgr3: ReadWrite<u32, MCFGR3::Register>),
        (0x030 => _reserved1),
        /// Master Data Match Register
        (0x040 => pub mdmr: ReadWrite<u32, MDMR::Register>),
        (0x044 => _reserved2),
        /// Master Clock Configuration Register 0
        (0x048 => pub mccr0: ReadWrite<u32, MCCR::Register>),
        (0x04C => _reserved3),
        /// Master Clock Configuration Register 1, used in high-speed mode
        (0x050 => pub mccr1: ReadWrite<u32, MCCR::Register>),
        (0x054 => _reserved4),
        /// Master FIFO Control Register
        (0x058 => pub mfcr: ReadWrite<u32, MFCR::Register>),
        /// Master FIFO Status Register
        (0x05C => pub mfsr: ReadOnly<u32, MFSR::Register>),
        /// Master Transmit Data Register
        (0x060 => pub mtdr: WriteOnly<u32, MTDR::Register>),
        (0x064 => _reserved5),
        /// Master Receive Data Register
        (0x070 => pub mrdr: ReadOnly<u32, MRDR::Register>),
        (0x074 => _reserved6),
        /// Slave Control Register
        (0x110 => pub scr: ReadWrite<u32, SCR::Register>),
        /// Slave Status Register
        (0x114 => pub ssr: ReadWrite<u32, SSR::Register>),
        /// Slave Interrupt Enable Register
        (0x118 => pub sier: ReadWrite<u32, SIER::Register>),
        /// Slave DMA Enable Register
        (0x11C => pub sder: ReadWrite<u32, SDER::Register>),
        (0x120 => _reserved7),
        /// Slave Configuration Register 1
        (0x124 => pub scfgr1: ReadWrite<u32, SCFGR1::Register>),
        /// Slave Configuration Register 2
        (0x128 => pub scfgr2: ReadWrite<u32, SCFGR2::Register>),
        (0x12C => _reserved8),
        /// Slave Address Match Register
        (0x140 => pub samr: ReadWrite<u32, SAMR::Register>),
        (0x144 => _reserved9),
        /// Slave Address Status Register
        (0x150 => pub sasr: ReadOnly<u32, SASR::Register>),
        /// Slave Transmit ACK Register
        (0x154 => pub star: ReadWrite<u32, STAR::Register>),
        (0x158 => _reserved10),
        /// Slave Transmit Data Register
        (0x160 => pub stdr: WriteOnly<u32, STDR::Register>),
        (0x164 => _reserved11),
        /// Slave Receive Data Register
        (0x170 => pub srdr: ReadOnly<u32, SRDR::Register>),
        (0x174 => @END),
    }
}

register_bitfields![u32,
    pub VERID [
        FEATURE OFFSET(0) NUMBITS(16) [],
        MINOR OFFSET(16) NUMBITS(8) [],
        MAJOR OFFSET(24) NUMBITS(8) []
    ],
    pub PARAM [
        /// Master transmit FIFO size, as a power of two
        MTXFIFO OFFSET(0) NUMBITS(4) [],
        /// Master receive FIFO size, as a power of two
        MRXFIFO OFFSET(8) NUMBITS(4) []
    ],
    pub MCR [
        /// Master enable
        MEN OFFSET(0) NUMBITS(1) [],
        /// Software reset
        RST OFFSET(1) NUMBITS(1) [],
        /// Doze mode enable
        DOZEN OFFSET(2) NUMBITS(1) [],
        /// Debug enable
        DBGEN OFFSET(3) NUMBITS(1) [],
        /// Reset transmit FIFO
        RTF OFFSET(8) NUMBITS(1) [],
        /// Reset receive FIFO
        RRF OFFSET(9) NUMBITS(1) []
    ],
    pub MSR [
        /// Transmit data flag
        TDF OFFSET(0) NUMBITS(1) [],
        /// Receive data flag
        RDF OFFSET(1) NUMBITS(1) [],
        /// End packet flag
        EPF OFFSET(8) NUMBITS(1) [],
        /// STOP detect flag
        SDF OFFSET(9) NUMBITS(1) [],
        /// NACK detect flag
        NDF OFFSET(10) NUMBITS(1) [],
        /// Arbitration lost flag
        ALF OFFSET(11) NUMBITS(1) [],
        /// FIFO error flag
        FEF OFFSET(12) NUMBITS(1) [],
        /// Pin low timeout flag
        PLTF OFFSET(13) NUMBITS(1) [],
        /// Data match flag
        DMF OFFSET(14) NUMBITS(1) [],
        /// Master busy flag
        MBF OFFSET(24) NUMBITS(1) [],
        /// Bus busy flag
        BBF OFFSET(25) NUMBITS(1) []
    ],
    pub MIER [
        TDIE OFFSET(0) NUMBITS(1) [],
        RDIE OFFSET(1) NUMBITS(1) [],
        EPIE OFFSET(8) NUMBITS(1) [],
        SDIE OFFSET(9) NUMBITS(1) [],
        NDIE OFFSET(10) NUMBITS(1) [],
        ALIE OFFSET(11) NUMBITS(1) [],
        FEIE OFFSET(12) NUMBITS(1) [],
        PLTIE OFFSET(13) NUMBITS(1) [],
        DMIE OFFSET(14) NUMBITS(1) []
    ],
    pub MDER [
        TDDE OFFSET(0) NUMBITS(1) [],
        RDDE OFFSET(1) NUMBITS(1) []
    ],
    pub MCFGR0 [
        /// Host request enable
        HREN OFFSET(0) NUMBITS(1) [],
        /// Host request polarity
        HRPOL OFFSET(1) NUMBITS(1) [],
        /// Host request select
        HRSEL OFFSET(2) NUMBITS(1) [],
        /// Circular FIFO enable
        CIRFIFO OFFSET(8) NUMBITS(1) [],
        /// Receive data match only
        RDMO OFFSET(9) NUMBITS(1) []
    ],
    pub MCFGR1 [
        /// Functional clock divider, 2^PRESCALE
        PRESCALE OFFSET(0) NUMBITS(3) [
            DivideBy1 = 0,
            DivideBy2 = 1,
            DivideBy4 = 2,
            DivideBy8 = 3,
            DivideBy16 = 4,
            DivideBy32 = 5,
            DivideBy64 = 6,
            DivideBy128 = 7
        ],
        /// Automatic STOP generation
        AUTOSTOP OFFSET(8) NUMBITS(1) [],
        /// Ignore NACK
        IGNACK OFFSET(9) NUMBITS(1) [],
        /// Timeout configuration
        TIMECFG OFFSET(10) NUMBITS(1) [],
        /// Match configuration
        MATCFG OFFSET(16) NUMBITS(3) [],
        /// Pin configuration
        PINCFG OFFSET(24) NUMBITS(3) []
    ],
    pub MCFGR2 [
        /// Bus idle timeout
        BUSIDLE OFFSET(0) NUMBITS(12) [],
        /// Glitch filter SCL
        FILTSCL OFFSET(16) NUMBITS(4) [],
        /// Glitch filter SDA
        FILTSDA OFFSET(24) NUMBITS(4) []
    ],
    pub MCFGR3 [
        /// Pin low timeout
        PINLOW OFFSET(8) NUMBITS(12) []
    ],
    pub MDMR [
        MATCH0 OFFSET(0) NUMBITS(8) [],
        MATCH1 OFFSET(16) NUMBITS(8) []
    ],
    pub MCCR [
        /// Clock low period
        CLKLO OFFSET(0) NUMBITS(6) [],
        /// Clock high period
        CLKHI OFFSET(8) NUMBITS(6) [],
        /// Setup hold delay
        SETHOLD OFFSET(16) NUMBITS(6) [],
        /// Data valid delay
        DATAVD OFFSET(24) NUMBITS(6) []
    ],
    pub MFCR [
        TXWATER OFFSET(0) NUMBITS(2) [],
        RXWATER OFFSET(16) NUMBITS(2) []
    ],
    pub MFSR [
        TXCOUNT OFFSET(0) NUMBITS(3) [],
        RXCOUNT OFFSET(16) NUMBITS(3) []
    ],
    pub MTDR [
        /// Transmit data
        DATA OFFSET(0) NUMBITS(8) [],
        /// Command data
        CMD OFFSET(8) NUMBITS(3) [
            Transmit = 0,
            Receive = 1,
            Stop = 2,
            ReceiveAndDiscard = 3,
            Start = 4,
            StartExpectNack = 5,
            StartHighSpeed = 6,
            StartHighSpeedExpectNack = 7
        ]
    ],
    pub MRDR [
        DATA OFFSET(0) NUMBITS(8) [],
        RXEMPTY OFFSET(14) NUMBITS(1) []
    ],
    pub SCR [
        /// Slave enable
        SEN OFFSET(0) NUMBITS(1) [],
        /// Software reset
        RST OFFSET(1) NUMBITS(1) [],
        /// Filter enable
        FILTEN OFFSET(4) NUMBITS(1) [],
        /// Filter doze enable
        FILTDZ OFFSET(5) NUMBITS(1) [],
        /// Reset transmit FIFO
        RTF OFFSET(8) NUMBITS(1) [],
        /// Reset receive FIFO
        RRF OFFSET(9) NUMBITS(1) []
    ],
    pub SSR [
        TDF OFFSET(0) NUMBITS(1) [],
        RDF OFFSET(1) NUMBITS(1) [],
        /// Address valid flag
        AVF OFFSET(2) NUMBITS(1) [],
        /// Transmit ACK flag
        TAF OFFSET(3) NUMBITS(1) [],
        /// Repeated start flag
        RSF OFFSET(8) NUMBITS(1) [],
        SDF OFFSET(9) NUMBITS(1) [],
        /// Bit error flag
        BEF OFFSET(10) NUMBITS(1) [],
        FEF OFFSET(11) NUMBITS(1) [],
        /// Address match 0 flag
        AM0F OFFSET(12) NUMBITS(1) [],
        /// Address match 1 flag
        AM1F OFFSET(13) NUMBITS(1) [],
        /// General call flag
        GCF OFFSET(14) NUMBITS(1) [],
        /// SMBus alert response flag
        SARF OFFSET(15) NUMBITS(1) [],
        /// Slave busy flag
        SBF OFFSET(24) NUMBITS(1) [],
        BBF OFFSET(25) NUMBITS(1) []
    ],
    pub SIER [
        TDIE OFFSET(0) NUMBITS(1) [],
        RDIE OFFSET(1) NUMBITS(1) [],
        AVIE OFFSET(2) NUMBITS(1) [],
        TAIE OFFSET(3) NUMBITS(1) [],
        RSIE OFFSET(8) NUMBITS(1) [],
        SDIE OFFSET(9) NUMBITS(1) [],
        BEIE OFFSET(10) NUMBITS(1) [],
        FEIE OFFSET(11) NUMBITS(1) [],
        AM0IE OFFSET(12) NUMBITS(1) [],
        AM1F OFFSET(13) NUMBITS(1) [],
        GCIE OFFSET(14) NUMBITS(1) [],
        SARIE OFFSET(15) NUMBITS(1) []
    ],
    pub SDER [
        TDDE OFFSET(0) NUMBITS(1) [],
        RDDE OFFSET(1) NUMBITS(1) [],
        AVDE OFFSET(2) NUMBITS(1) []
    ],
    pub SCFGR1 [
        ADRSTALL OFFSET(0) NUMBITS(1) [],
        RXSTALL OFFSET(1) NUMBITS(1) [],
        TXDSTALL OFFSET(2) NUMBITS(1) [],
        ACKSTALL OFFSET(3) NUMBITS(1) [],
        /// General call enable
        GCEN OFFSET(8) NUMBITS(1) [],
        /// SMBus alert enable
        SAEN OFFSET(9) NUMBITS(1) [],
        TXCFG OFFSET(10) NUMBITS(1) [],
        RXCFG OFFSET(11) NUMBITS(1) [],
        IGNACK OFFSET(12) NUMBITS(1) [],
        /// High speed mode enable
        HSMEN OFFSET(13) NUMBITS(1) [],
        /// Address configuration
        ADDRCFG OFFSET(16) NUMBITS(3) []
    ],
    pub SCFGR2 [
        CLKHOLD OFFSET(0) NUMBITS(4) [],
        DATAVD OFFSET(8) NUMBITS(6) [],
        FILTSCL OFFSET(16) NUMBITS(4) [],
        FILTSDA OFFSET(24) NUMBITS(4) []
    ],
    pub SAMR [
        ADDR0 OFFSET(1) NUMBITS(10) [],
        ADDR1 OFFSET(17) NUMBITS(10) []
    ],
    pub SASR [
        /// Received address
        RADDR OFFSET(0) NUMBITS(11) [],
        /// Address not valid
        ANV OFFSET(14) NUMBITS(1) []
    ],
    pub STAR [
        TXNACK OFFSET(0) NUMBITS(1) []
    ],
    pub STDR [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    pub SRDR [
        DATA OFFSET(0) NUMBITS(8) [],
        RXEMPTY OFFSET(14) NUMBITS(1) [],
        /// Start of frame
        SOF OFFSET(15) NUMBITS(1) []
    ]
];

pub const LPI2C0_BASE_ADDR: usize = 0x4006_6000;

pub const LPI2C0_BASE: StaticRef<Lpi2cRegisters> =
    unsafe { StaticRef::new(LPI2C0_BASE_ADDR as *const Lpi2cRegisters) };

pub const LPI2C_BASE_ADDRS: [usize; LPI2C_INSTANCE_COUNT] = [LPI2C0_BASE_ADDR];
pub const LPI2C_BASE_PTRS: [StaticRef<Lpi2cRegisters>; LPI2C_INSTANCE_COUNT] = [LPI2C0_BASE];
pub const LPI2C_MASTER_IRQS: [u32; LPI2C_INSTANCE_COUNT] = [interrupts::LPI2C0_MASTER_SLAVE];
pub const LPI2C_SLAVE_IRQS: [u32; LPI2C_INSTANCE_COUNT] = [interrupts::LPI2C0_MASTER_SLAVE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::offset_of;

    #[test]
    fn master_and_slave_offsets() {
        assert_eq!(offset_of!(Lpi2cRegisters, mcr), 0x10);
        assert_eq!(offset_of!(Lpi2cRegisters, mdmr), 0x40);
        assert_eq!(offset_of!(Lpi2cRegisters, mccr1), 0x50);
        assert_eq!(offset_of!(Lpi2cRegisters, mrdr), 0x70);
        assert_eq!(offset_of!(Lpi2cRegisters, scr), 0x110);
        assert_eq!(offset_of!(Lpi2cRegisters, samr), 0x140);
        assert_eq!(offset_of!(Lpi2cRegisters, srdr), 0x170);
        assert_eq!(core::mem::size_of::<Lpi2cRegisters>(), 0x174);
    }

    #[test]
    fn fields() {
        assert_field!(MCFGR1::PINCFG, 24, 3);
        assert_field!(MCFGR2::BUSIDLE, 0, 12);
        assert_field!(MCFGR3::PINLOW, 8, 12);
        assert_field!(MCCR::DATAVD, 24, 6);
        assert_field!(SAMR::ADDR1, 17, 10);
        assert_field!(SASR::RADDR, 0, 11);
        assert_eq!(
            u32::from(MTDR::CMD::Start + MTDR::DATA.val((0x50 << 1) | 1)),
            0x04A1
        );
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            VERID [FEATURE, MINOR, MAJOR],
            PARAM [MTXFIFO, MRXFIFO],
            MCR [MEN, RST, DOZEN, DBGEN, RTF, RRF],
            MSR [TDF, RDF, EPF, SDF, NDF, ALF, FEF, PLTF, DMF, MBF, BBF],
            MIER [TDIE, RDIE, EPIE, SDIE, NDIE, ALIE, FEIE, PLTIE, DMIE],
            MDER [TDDE, RDDE],
            MCFGR0 [HREN, HRPOL, HRSEL, CIRFIFO, RDMO],
            MCFGR1 [PRESCALE, AUTOSTOP, IGNACK, TIMECFG, MATCFG, PINCFG],
            MCFGR2 [BUSIDLE, FILTSCL, FILTSDA],
            MCFGR3 [PINLOW],
            MDMR [MATCH0, MATCH1],
            MCCR [CLKLO, CLKHI, SETHOLD, DATAVD],
            MFCR [TXWATER, RXWATER],
            MFSR [TXCOUNT, RXCOUNT],
            MTDR [DATA, CMD],
            MRDR [DATA, RXEMPTY],
            SCR [SEN, RST, FILTEN, FILTDZ, RTF, RRF],
            SSR [TDF, RDF, AVF, TAF, RSF, SDF, BEF, FEF, AM0F, AM1F, GCF, SARF, SBF, BBF],
            SIER [TDIE, RDIE, AVIE, TAIE, RSIE, SDIE, BEIE, FEIE, AM0IE, AM1F, GCIE, SARIE],
            SDER [TDDE, RDDE, AVDE],
            SCFGR1 [ADRSTALL, RXSTALL, TXDSTALL, ACKSTALL, GCEN, SAEN, TXCFG, RXCFG, IGNACK, HSMEN,
                ADDRCFG],
            SCFGR2 [CLKHOLD, DATAVD, FILTSCL, FILTSDA],
            SAMR [ADDR0, ADDR1],
            SASR [RADDR, ANV],
            STAR [TXNACK],
            STDR [DATA],
            SRDR [DATA, RXEMPTY, SOF],
        );
    }
}
