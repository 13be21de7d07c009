// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Analog-to-Digital Converter (ADC).
//!
//! One 12-bit SAR converter with sixteen status/control slots. Each `SC1n`
//! slot selects the input channel for a conversion and `Rn` holds its result.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const ADC_INSTANCE_COUNT: usize = 1;
pub const ADC_SC1_COUNT: usize = 16;
pub const ADC_R_COUNT: usize = 16;
pub const ADC_CV_COUNT: usize = 2;

/// `CFG2.SMPLTS` after reset.
pub const DEFAULT_SAMPLE_TIME: u32 = 0x0C;
/// `UG` after reset.
pub const DEFAULT_USER_GAIN: u32 = 0x04;

register_structs! {
    pub AdcRegisters {
        // Status and Control Register 1, one per conversion slot
        (0x000 => pub sc1: [ReadWrite<u32, SC1::Register>; ADC_SC1_COUNT]),
        // Configuration Register 1
        (0x040 => pub cfg1: ReadWrite<u32, CFG1::Register>),
        // Configuration Register 2
        (0x044 => pub cfg2: ReadWrite<u32, CFG2::Register>),
        // Data Result Registers
        (0x048 => pub r: [ReadOnly<u32, R::Register>; ADC_R_COUNT]),
        // Compare Value Registers
        (0x088 => pub cv: [ReadWrite<u32, CV::Register>; ADC_CV_COUNT]),
        // Status and Control Register 2
        (0x090 => pub sc2: ReadWrite<u32, SC2::Register>),
        // Status and Control Register 3
        (0x094 => pub sc3: ReadWrite<u32, SC3::Register>),
        // BASE Offset Register
        (0x098 => pub base_ofs: ReadWrite<u32, BASE_OFS::Register>),
        // ADC Offset Correction Register
        (0x09C => pub ofs: ReadWrite<u32, OFS::Register>),
        // USER Offset Correction Register
        (0x0A0 => pub usr_ofs: ReadWrite<u32, USR_OFS::Register>),
        // ADC X Offset Correction Register
        (0x0A4 => pub xofs: ReadWrite<u32, XOFS::Register>),
        // ADC Y Offset Correction Register
        (0x0A8 => pub yofs: ReadWrite<u32, YOFS::Register>),
        // ADC Gain Register
        (0x0AC => pub g: ReadWrite<u32, G::Register>),
        // ADC User Gain Register
        (0x0B0 => pub ug: ReadWrite<u32, UG::Register>),
        // ADC General Calibration Value Register S
        (0x0B4 => pub clps: ReadWrite<u32, CLPS::Register>),
        // ADC Plus-Side General Calibration Value Register 3
        (0x0B8 => pub clp3: ReadWrite<u32, CLP3::Register>),
        // ADC Plus-Side General Calibration Value Register 2
        (0x0BC => pub clp2: ReadWrite<u32, CLP2::Register>),
        // ADC Plus-Side General Calibration Value Register 1
        (0x0C0 => pub clp1: ReadWrite<u32, CLP1::Register>),
        // ADC Plus-Side General Calibration Value Register 0
        (0x0C4 => pub clp0: ReadWrite<u32, CLP0::Register>),
        // ADC Plus-Side General Calibration Value Register X
        (0x0C8 => pub clpx: ReadWrite<u32, CLPX::Register>),
        // ADC Plus-Side General Calibration Value Register 9
        (0x0CC => pub clp9: ReadWrite<u32, CLP9::Register>),
        // ADC General Calibration Offset Value Register S
        (0x0D0 => pub clps_ofs: ReadWrite<u32, CLPS_OFS::Register>),
        // ADC Plus-Side General Calibration Offset Value Register 3
        (0x0D4 => pub clp3_ofs: ReadWrite<u32, CLP3_OFS::Register>),
        // ADC Plus-Side General Calibration Offset Value Register 2
        (0x0D8 => pub clp2_ofs: ReadWrite<u32, CLP2_OFS::Register>),
        // ADC Plus-Side General Calibration Offset Value Register 1
        (0x0DC => pub clp1_ofs: ReadWrite<u32, CLP1_OFS::Register>),
        // ADC Plus-Side General Calibration Offset Value Register 0
        (0x0E0 => pub clp0_ofs: ReadWrite<u32, CLP0_OFS::Register>),
        // ADC Plus-Side General Calibration Offset Value Register X
        (0x0E4 => pub clpx_ofs: ReadWrite<u32, CLPX_OFS::Register>),
        // ADC Plus-Side General Calibration Offset Value Register 9
        (0x0E8 => pub clp9_ofs: ReadWrite<u32, CLP9_OFS::Register>),
        (0x0EC => @END),
    }
}

register_bitfields![u32,
    pub SC1 [
        /// Input channel select
        ADCH OFFSET(0) NUMBITS(6) [
            ExternalChannel0 = 0x00,
            InternalChannel0 = 0x15,
            InternalChannel1 = 0x16,
            InternalChannel2 = 0x17,
            Bandgap = 0x1B,
            VrefSh = 0x1D,
            VrefSl = 0x1E,
            ModuleDisabled = 0x3F
        ],
        /// Interrupt enable
        AIEN OFFSET(6) NUMBITS(1) [],
        /// Conversion complete flag
        COCO OFFSET(7) NUMBITS(1) []
    ],
    pub CFG1 [
        /// Input clock select
        ADICLK OFFSET(0) NUMBITS(2) [
            Alt1 = 0,
            Alt2 = 1,
            Alt3 = 2,
            Alt4 = 3
        ],
        /// Conversion mode selection
        MODE OFFSET(2) NUMBITS(2) [
            Bits8 = 0,
            Bits12 = 1,
            Bits10 = 2
        ],
        /// Clock divide select
        ADIV OFFSET(5) NUMBITS(2) [
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3
        ],
        /// Clear latch trigger in trigger handler block
        CLRLTRG OFFSET(8) NUMBITS(1) []
    ],
    pub CFG2 [
        /// Sample time select, in ADC clocks minus one
        SMPLTS OFFSET(0) NUMBITS(8) []
    ],
    pub R [
        /// Conversion result
        D OFFSET(0) NUMBITS(12) []
    ],
    pub CV [
        /// Compare value
        CV OFFSET(0) NUMBITS(16) []
    ],
    pub SC2 [
        /// Voltage reference selection
        REFSEL OFFSET(0) NUMBITS(2) [
            Default = 0,
            Alternate = 1
        ],
        /// DMA enable
        DMAEN OFFSET(2) NUMBITS(1) [],
        /// Compare function range enable
        ACREN OFFSET(3) NUMBITS(1) [],
        /// Compare function greater than enable
        ACFGT OFFSET(4) NUMBITS(1) [],
        /// Compare function enable
        ACFE OFFSET(5) NUMBITS(1) [],
        /// Conversion trigger select
        ADTRG OFFSET(6) NUMBITS(1) [
            Software = 0,
            Hardware = 1
        ],
        /// Conversion active
        ADACT OFFSET(7) NUMBITS(1) [],
        /// Trigger process number
        TRGPRNUM OFFSET(13) NUMBITS(2) [],
        /// Trigger status
        TRGSTLAT OFFSET(16) NUMBITS(4) [],
        /// Error in multiplexed trigger request
        TRGSTERR OFFSET(24) NUMBITS(4) []
    ],
    pub SC3 [
        /// Hardware average select
        AVGS OFFSET(0) NUMBITS(2) [
            Samples4 = 0,
            Samples8 = 1,
            Samples16 = 2,
            Samples32 = 3
        ],
        /// Hardware average enable
        AVGE OFFSET(2) NUMBITS(1) [],
        /// Continuous conversion enable
        ADCO OFFSET(3) NUMBITS(1) [],
        /// Calibration
        CAL OFFSET(7) NUMBITS(1) []
    ],
    pub BASE_OFS [
        BA_OFS OFFSET(0) NUMBITS(8) []
    ],
    pub OFS [
        /// Offset error correction value, two's complement
        OFS OFFSET(0) NUMBITS(16) []
    ],
    pub USR_OFS [
        USR_OFS OFFSET(0) NUMBITS(8) []
    ],
    pub XOFS [
        XOFS OFFSET(0) NUMBITS(6) []
    ],
    pub YOFS [
        YOFS OFFSET(0) NUMBITS(8) []
    ],
    pub G [
        G OFFSET(0) NUMBITS(11) []
    ],
    pub UG [
        UG OFFSET(0) NUMBITS(10) []
    ],
    pub CLPS [
        CLPS OFFSET(0) NUMBITS(7) []
    ],
    pub CLP3 [
        CLP3 OFFSET(0) NUMBITS(10) []
    ],
    pub CLP2 [
        CLP2 OFFSET(0) NUMBITS(10) []
    ],
    pub CLP1 [
        CLP1 OFFSET(0) NUMBITS(9) []
    ],
    pub CLP0 [
        CLP0 OFFSET(0) NUMBITS(8) []
    ],
    pub CLPX [
        CLPX OFFSET(0) NUMBITS(7) []
    ],
    pub CLP9 [
        CLP9 OFFSET(0) NUMBITS(7) []
    ],
    pub CLPS_OFS [
        CLPS_OFS OFFSET(0) NUMBITS(4) []
    ],
    pub CLP3_OFS [
        CLP3_OFS OFFSET(0) NUMBITS(4) []
    ],
    pub CLP2_OFS [
        CLP2_OFS OFFSET(0) NUMBITS(4) []
    ],
    pub CLP1_OFS [
        CLP1_OFS OFFSET(0) NUMBITS(4) []
    ],
    pub CLP0_OFS [
        CLP0_OFS OFFSET(0) NUMBITS(4) []
    ],
    pub CLPX_OFS [
        CLPX_OFS OFFSET(0) NUMBITS(12) []
    ],
    pub CLP9_OFS [
        CLP9_OFS OFFSET(0) NUMBITS(12) []
    ]
];

pub const ADC0_BASE_ADDR: usize = 0x4003_B000;

pub const ADC0_BASE: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(ADC0_BASE_ADDR as *const AdcRegisters) };

pub const ADC_BASE_ADDRS: [usize; ADC_INSTANCE_COUNT] = [ADC0_BASE_ADDR];
pub const ADC_BASE_PTRS: [StaticRef<AdcRegisters>; ADC_INSTANCE_COUNT] = [ADC0_BASE];
pub const ADC_IRQS: [u32; ADC_INSTANCE_COUNT] = [interrupts::ADC0];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::{offset_of, size_of};

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(AdcRegisters, sc1), 0x00);
        assert_eq!(offset_of!(AdcRegisters, cfg1), 0x40);
        assert_eq!(offset_of!(AdcRegisters, r), 0x48);
        assert_eq!(offset_of!(AdcRegisters, sc2), 0x90);
        assert_eq!(offset_of!(AdcRegisters, g), 0xAC);
        assert_eq!(offset_of!(AdcRegisters, clp9_ofs), 0xE8);
        assert_eq!(size_of::<AdcRegisters>(), 0xEC);
    }

    #[test]
    fn field_geometry() {
        assert_field!(SC1::ADCH, 0, 6);
        assert_field!(SC1::COCO, 7, 1);
        assert_field!(CFG1::ADIV, 5, 2);
        assert_field!(CFG1::CLRLTRG, 8, 1);
        assert_field!(R::D, 0, 12);
        assert_field!(SC2::TRGPRNUM, 13, 2);
        assert_field!(SC2::TRGSTLAT, 16, 4);
        assert_field!(SC2::TRGSTERR, 24, 4);
        assert_field!(SC3::CAL, 7, 1);
        assert_field!(CLPX_OFS::CLPX_OFS, 0, 12);
    }

    #[test]
    fn encode_masks_out_of_range() {
        assert_eq!(u32::from(SC1::ADCH.val(0xFF)), 0x3F);
        assert_eq!(u32::from(CFG1::ADIV.val(3)), 0x60);
        assert_eq!(u32::from(SC1::ADCH::ModuleDisabled + SC1::AIEN::SET), 0x7F);
    }

    #[test]
    fn reset_defaults() {
        assert_eq!(DEFAULT_SAMPLE_TIME, 0x0C);
        assert_eq!(DEFAULT_USER_GAIN, 0x04);
        assert_eq!(u32::from(CFG2::SMPLTS.val(DEFAULT_SAMPLE_TIME)), 0x0C);
        assert_eq!(u32::from(UG::UG.val(DEFAULT_USER_GAIN)), 0x04);
    }

    #[test]
    fn instance_table() {
        assert_eq!(ADC_BASE_ADDRS, [0x4003_B000]);
        assert_eq!(ADC_BASE_PTRS[0].address(), ADC0_BASE_ADDR);
        assert_eq!(ADC_IRQS, [28]);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            SC1 [ADCH, AIEN, COCO],
            CFG1 [ADICLK, MODE, ADIV, CLRLTRG],
            CFG2 [SMPLTS],
            R [D],
            CV [CV],
            SC2 [REFSEL, DMAEN, ACREN, ACFGT, ACFE, ADTRG, ADACT, TRGPRNUM, TRGSTLAT, TRGSTERR],
            SC3 [AVGS, AVGE, ADCO, CAL],
            BASE_OFS [BA_OFS],
            OFS [OFS],
            USR_OFS [USR_OFS],
            XOFS [XOFS],
            YOFS [YOFS],
            G [G],
            UG [UG],
            CLPS [CLPS],
            CLP3 [CLP3],
            CLP2 [CLP2],
            CLP1 [CLP1],
            CLP0 [CLP0],
            CLPX [CLPX],
            CLP9 [CLP9],
            CLPS_OFS [CLPS_OFS],
            CLP3_OFS [CLP3_OFS],
            CLP2_OFS [CLP2_OFS],
            CLP1_OFS [CLP1_OFS],
            CLP0_OFS [CLP0_OFS],
            CLPX_OFS [CLPX_OFS],
            CLP9_OFS [CLP9_OFS],
        );
    }
}
