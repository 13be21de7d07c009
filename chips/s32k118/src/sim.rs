// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! System Integration Module (SIM).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const SIM_INSTANCE_COUNT: usize = 1;

register_structs! {
    pub SimRegisters {
        (0x00 => _reserved0),
        /// Chip Control register
        (0x04 => pub chipctl: ReadWrite<u32, CHIPCTL::Register>),
        (0x08 => _reserved1),
        /// FTM Option Register 0
        (0x0C => pub ftmopt0: ReadWrite<u32, FTMOPT0::Register>),
        /// LPO Clock Select Register
        (0x10 => pub lpoclks: ReadWrite<u32, LPOCLKS::Register>),
        (0x14 => _reserved2),
        /// ADC Options Register
        (0x18 => pub adcopt: ReadWrite<u32, ADCOPT::Register>),
        /// FTM Option Register 1
        (0x1C => pub ftmopt1: ReadWrite<u32, FTMOPT1::Register>),
        /// Miscellaneous control register 0
        (0x20 => pub misctrl0: ReadWrite<u32, MISCTRL0::Register>),
        /// System Device Identification Register
        (0x24 => pub sdid: ReadOnly<u32, SDID::Register>),
        (0x28 => _reserved3),
        /// Platform Clock Gating Control Register
        (0x40 => pub platcgc: ReadWrite<u32, PLATCGC::Register>),
        (0x44 => _reserved4),
        /// Flash Configuration Register 1
        (0x4C => pub fcfg1: ReadOnly<u32, FCFG1::Register>),
        (0x50 => _reserved5),
        /// Unique Identification Register High
        (0x54 => pub uidh: ReadOnly<u32>),
        /// Unique Identification Register Mid-High
        (0x58 => pub uidmh: ReadOnly<u32>),
        /// Unique Identification Register Mid Low
        (0x5C => pub uidml: ReadOnly<u32>),
        /// Unique Identification Register Low
        (0x60 => pub uidl: ReadOnly<u32>),
        (0x64 => _reserved6),
        /// System Clock Divider Register 4
        (0x68 => pub clkdiv4: ReadWrite<u32, CLKDIV4::Register>),
        /// Miscellaneous Control register 1
        (0x6C => pub misctrl1: ReadWrite<u32, MISCTRL1::Register>),
        (0x70 => @END),
    }
}

register_bitfields![u32,
    pub CHIPCTL [
        /// CLKOUT select
        CLKOUTSEL OFFSET(4) NUMBITS(4) [
            ScgClkout = 0,
            SoscDiv2 = 2,
            SircDiv2 = 4,
            FircDiv2 = 6,
            HclkDiv2 = 7,
            Lpo128k = 9,
            Lpo = 10,
            RtcClk = 12
        ],
        /// CLKOUT divide ratio, divide by CLKOUTDIV + 1
        CLKOUTDIV OFFSET(8) NUMBITS(3) [],
        /// CLKOUT enable
        CLKOUTEN OFFSET(11) NUMBITS(1) [],
        /// Debug trace clock select
        TRACECLK_SEL OFFSET(12) NUMBITS(1) [],
        /// PDB back-to-back select
        PDB_BB_SEL OFFSET(13) NUMBITS(1) [],
        /// ADC supply select
        ADC_SUPPLY OFFSET(16) NUMBITS(3) [],
        /// ADC supply enable
        ADC_SUPPLYEN OFFSET(19) NUMBITS(1) [],
        /// SRAM_U retention
        SRAMU_RETEN OFFSET(20) NUMBITS(1) [],
        /// SRAM_L retention
        SRAML_RETEN OFFSET(21) NUMBITS(1) []
    ],
    pub FTMOPT0 [
        FTM0FLTXSEL OFFSET(0) NUMBITS(3) [],
        FTM1FLTXSEL OFFSET(4) NUMBITS(3) [],
        /// FTM0 external clock pin select
        FTM0CLKSEL OFFSET(24) NUMBITS(2) [],
        /// FTM1 external clock pin select
        FTM1CLKSEL OFFSET(26) NUMBITS(2) []
    ],
    pub LPOCLKS [
        /// 1 kHz LPO clock enable
        LPO1KCLKEN OFFSET(0) NUMBITS(1) [],
        /// LPO clock source select
        LPOCLKSEL OFFSET(2) NUMBITS(2) [
            Lpo128k = 0,
            NoClock = 1,
            Lpo32k = 2,
            Lpo1k = 3
        ],
        /// 32 kHz clock source select
        RTCCLKSEL OFFSET(4) NUMBITS(2) [
            SoscDiv1 = 0,
            Lpo32k = 1,
            RtcClkin = 2,
            FircDiv1 = 3
        ]
    ],
    pub ADCOPT [
        /// ADC0 trigger source select
        ADC0TRGSEL OFFSET(0) NUMBITS(1) [
            Pdb = 0,
            Trgmux = 1
        ],
        /// ADC0 software pretrigger sources
        ADC0SWPRETRG OFFSET(1) NUMBITS(3) [],
        /// ADC0 pretrigger source select
        ADC0PRETRGSEL OFFSET(4) NUMBITS(2) [
            Pdb = 0,
            Trgmux = 1,
            Software = 2
        ]
    ],
    pub FTMOPT1 [
        FTM0SYNCBIT OFFSET(0) NUMBITS(1) [],
        FTM1SYNCBIT OFFSET(1) NUMBITS(1) [],
        FTM0CH0SEL OFFSET(6) NUMBITS(2) [],
        FTM0CH1SEL OFFSET(8) NUMBITS(1) [],
        FTM1CH0SEL OFFSET(10) NUMBITS(2) [],
        /// FTM global load
        FTMGLDOK OFFSET(15) NUMBITS(1) [],
        FTM0_OUTSEL OFFSET(16) NUMBITS(8) [],
        FTM1_OUTSEL OFFSET(24) NUMBITS(8) []
    ],
    pub MISCTRL0 [
        FTM0_OBE_CTRL OFFSET(16) NUMBITS(1) [],
        FTM1_OBE_CTRL OFFSET(17) NUMBITS(1) []
    ],
    pub SDID [
        FEATURES OFFSET(0) NUMBITS(8) [],
        PACKAGE OFFSET(8) NUMBITS(4) [],
        REVID OFFSET(12) NUMBITS(4) [],
        RAMSIZE OFFSET(16) NUMBITS(4) [],
        DERIVATE OFFSET(20) NUMBITS(4) [],
        SUBSERIES OFFSET(24) NUMBITS(4) [],
        GENERATION OFFSET(28) NUMBITS(4) []
    ],
    pub PLATCGC [
        CGCMSCM OFFSET(0) NUMBITS(1) [],
        CGCMPU OFFSET(1) NUMBITS(1) [],
        CGCDMA OFFSET(2) NUMBITS(1) [],
        CGCERM OFFSET(3) NUMBITS(1) [],
        CGCEIM OFFSET(4) NUMBITS(1) []
    ],
    pub FCFG1 [
        /// FlexNVM partition, see [`crate::ftfc::dflash_size`]
        DEPART OFFSET(12) NUMBITS(4) [],
        /// EEE SRAM size, see [`crate::ftfc::eeprom_size`]
        EEERAMSIZE OFFSET(16) NUMBITS(4) []
    ],
    pub CLKDIV4 [
        TRACEFRAC OFFSET(0) NUMBITS(1) [],
        TRACEDIV OFFSET(1) NUMBITS(3) [],
        TRACEDIVEN OFFSET(28) NUMBITS(1) []
    ],
    pub MISCTRL1 [
        /// Software trigger to TRGMUX
        SW_TRG OFFSET(0) NUMBITS(1) []
    ]
];

pub const SIM_BASE_ADDR: usize = 0x4004_8000;

pub const SIM_BASE: StaticRef<SimRegisters> =
    unsafe { StaticRef::new(SIM_BASE_ADDR as *const SimRegisters) };

pub const SIM_BASE_ADDRS: [usize; SIM_INSTANCE_COUNT] = [SIM_BASE_ADDR];
pub const SIM_BASE_PTRS: [StaticRef<SimRegisters>; SIM_INSTANCE_COUNT] = [SIM_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::offset_of;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(SimRegisters, chipctl), 0x04);
        assert_eq!(offset_of!(SimRegisters, sdid), 0x24);
        assert_eq!(offset_of!(SimRegisters, platcgc), 0x40);
        assert_eq!(offset_of!(SimRegisters, fcfg1), 0x4C);
        assert_eq!(offset_of!(SimRegisters, uidl), 0x60);
        assert_eq!(offset_of!(SimRegisters, misctrl1), 0x6C);
        assert_eq!(core::mem::size_of::<SimRegisters>(), 0x70);
    }

    #[test]
    fn fields() {
        assert_field!(CHIPCTL::CLKOUTSEL, 4, 4);
        assert_field!(FTMOPT1::FTM1_OUTSEL, 24, 8);
        assert_field!(SDID::GENERATION, 28, 4);
        assert_field!(FCFG1::DEPART, 12, 4);
        assert_field!(FCFG1::EEERAMSIZE, 16, 4);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            CHIPCTL [CLKOUTSEL, CLKOUTDIV, CLKOUTEN, TRACECLK_SEL, PDB_BB_SEL, ADC_SUPPLY,
                ADC_SUPPLYEN, SRAMU_RETEN, SRAML_RETEN],
            FTMOPT0 [FTM0FLTXSEL, FTM1FLTXSEL, FTM0CLKSEL, FTM1CLKSEL],
            LPOCLKS [LPO1KCLKEN, LPOCLKSEL, RTCCLKSEL],
            ADCOPT [ADC0TRGSEL, ADC0SWPRETRG, ADC0PRETRGSEL],
            FTMOPT1 [FTM0SYNCBIT, FTM1SYNCBIT, FTM0CH0SEL, FTM0CH1SEL, FTM1CH0SEL, FTMGLDOK,
                FTM0_OUTSEL, FTM1_OUTSEL],
            MISCTRL0 [FTM0_OBE_CTRL, FTM1_OBE_CTRL],
            SDID [FEATURES, PACKAGE, REVID, RAMSIZE, DERIVATE, SUBSERIES, GENERATION],
            PLATCGC [CGCMSCM, CGCMPU, CGCDMA, CGCERM, CGCEIM],
            FCFG1 [DEPART, EEERAMSIZE],
            CLKDIV4 [TRACEFRAC, TRACEDIV, TRACEDIVEN],
            MISCTRL1 [SW_TRG],
        );
    }
}
