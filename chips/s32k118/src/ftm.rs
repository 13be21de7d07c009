// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! FlexTimer Module (FTM).
//!
//! Two instances with eight channels each. Channels pair up (0/1, 2/3, ...)
//! for combined, complementary and dual-edge capture modes; the per-pair
//! control bits in `COMBINE` are exposed as one field group per pair.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const FTM_INSTANCE_COUNT: usize = 2;
pub const FTM_CHANNEL_COUNT: usize = 8;
pub const FTM_FAULT_CHANNELS: usize = 4;
/// Largest value the 16-bit counter reaches.
pub const FTM_COUNTER_MAX: u32 = 0xFFFF;

register_structs! {
    pub FtmRegisters {
        /// Status And Control
        (0x000 => pub sc: ReadWrite<u32, SC::Register>),
        /// Counter
        (0x004 => pub cnt: ReadWrite<u32, CNT::Register>),
        /// Modulo
        (0x008 => pub modulo: ReadWrite<u32, MOD::Register>),
        /// Channel (n) Status And Control / Value
        (0x00C => pub controls: [ChannelControl; FTM_CHANNEL_COUNT]),
        /// Counter Initial Value
        (0x04C => pub cntin: ReadWrite<u32, CNTIN::Register>),
        /// Capture And Compare Status
        (0x050 => pub status: ReadWrite<u32, CHANNELS::Register>),
        /// Features Mode Selection
        (0x054 => pub mode: ReadWrite<u32, MODE::Register>),
        /// Synchronization
        (0x058 => pub sync: ReadWrite<u32, SYNC::Register>),
        /// Initial State For Channels Output
        (0x05C => pub outinit: ReadWrite<u32, CHANNELS::Register>),
        /// Output Mask
        (0x060 => pub outmask: ReadWrite<u32, CHANNELS::Register>),
        /// Function For Linked Channels
        (0x064 => pub combine: ReadWrite<u32, COMBINE::Register>),
        /// Deadtime Configuration
        (0x068 => pub deadtime: ReadWrite<u32, DEADTIME::Register>),
        /// FTM External Trigger
        (0x06C => pub exttrig: ReadWrite<u32, EXTTRIG::Register>),
        /// Channels Polarity
        (0x070 => pub pol: ReadWrite<u32, CHANNELS::Register>),
        /// Fault Mode Status
        (0x074 => pub fms: ReadWrite<u32, FMS::Register>),
        /// Input Capture Filter Control
        (0x078 => pub filter: ReadWrite<u32, FILTER::Register>),
        /// Fault Control
        (0x07C => pub fltctrl: ReadWrite<u32, FLTCTRL::Register>),
        /// Quadrature Decoder Control And Status
        (0x080 => pub qdctrl: ReadWrite<u32, QDCTRL::Register>),
        /// Configuration
        (0x084 => pub conf: ReadWrite<u32, CONF::Register>),
        /// FTM Fault Input Polarity
        (0x088 => pub fltpol: ReadWrite<u32, FLTPOL::Register>),
        /// Synchronization Configuration
        (0x08C => pub synconf: ReadWrite<u32, SYNCONF::Register>),
        /// FTM Inverting Control
        (0x090 => pub invctrl: ReadWrite<u32, INVCTRL::Register>),
        /// FTM Software Output Control
        (0x094 => pub swoctrl: ReadWrite<u32, SWOCTRL::Register>),
        /// FTM PWM Load
        (0x098 => pub pwmload: ReadWrite<u32, PWMLOAD::Register>),
        /// Half Cycle Register
        (0x09C => pub hcr: ReadWrite<u32, HCR::Register>),
        /// Pair 0 Deadtime Configuration
        (0x0A0 => pub pair0deadtime: ReadWrite<u32, DEADTIME::Register>),
        (0x0A4 => _reserved0),
        /// Pair 1 Deadtime Configuration
        (0x0A8 => pub pair1deadtime: ReadWrite<u32, DEADTIME::Register>),
        (0x0AC => _reserved1),
        /// Pair 2 Deadtime Configuration
        (0x0B0 => pub pair2deadtime: ReadWrite<u32, DEADTIME::Register>),
        (0x0B4 => _reserved2),
        /// Pair 3 Deadtime Configuration
        (0x0B8 => pub pair3deadtime: ReadWrite<u32, DEADTIME::Register>),
        (0x0BC => _reserved3),
        /// Mirror of Modulo Value
        (0x200 => pub mod_mirror: ReadWrite<u32, MOD_MIRROR::Register>),
        /// Mirror of Channel (n) Match Value
        (0x204 => pub cv_mirror: [ReadOnly<u32, CV_MIRROR::Register>; FTM_CHANNEL_COUNT]),
        (0x224 => @END),
    },

    pub ChannelControl {
        /// Channel (n) Status And Control
        (0x000 => pub csc: ReadWrite<u32, CNSC::Register>),
        /// Channel (n) Value
        (0x004 => pub cv: ReadWrite<u32, CNV::Register>),
        (0x008 => @END),
    }
}

register_bitfields![u32,
    pub SC [
        /// Prescale factor selection
        PS OFFSET(0) NUMBITS(3) [
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3,
            Div16 = 4,
            Div32 = 5,
            Div64 = 6,
            Div128 = 7
        ],
        /// Clock source selection
        CLKS OFFSET(3) NUMBITS(2) [
            NoClock = 0,
            FtmInputClock = 1,
            FixedFrequency = 2,
            ExternalClock = 3
        ],
        /// Center-aligned PWM select
        CPWMS OFFSET(5) NUMBITS(1) [],
        /// Reload point interrupt enable
        RIE OFFSET(6) NUMBITS(1) [],
        /// Reload flag
        RF OFFSET(7) NUMBITS(1) [],
        /// Timer overflow interrupt enable
        TOIE OFFSET(8) NUMBITS(1) [],
        /// Timer overflow flag
        TOF OFFSET(9) NUMBITS(1) [],
        /// Channel 0-7 PWM enable bits
        PWMEN0 OFFSET(16) NUMBITS(1) [],
        PWMEN1 OFFSET(17) NUMBITS(1) [],
        PWMEN2 OFFSET(18) NUMBITS(1) [],
        PWMEN3 OFFSET(19) NUMBITS(1) [],
        PWMEN4 OFFSET(20) NUMBITS(1) [],
        PWMEN5 OFFSET(21) NUMBITS(1) [],
        PWMEN6 OFFSET(22) NUMBITS(1) [],
        PWMEN7 OFFSET(23) NUMBITS(1) [],
        /// Filter prescaler
        FLTPS OFFSET(24) NUMBITS(4) []
    ],
    pub CNT [
        COUNT OFFSET(0) NUMBITS(16) []
    ],
    pub MOD [
        MOD OFFSET(0) NUMBITS(16) []
    ],
    pub CNSC [
        /// DMA enable
        DMA OFFSET(0) NUMBITS(1) [],
        /// FTM counter reset by the selected input capture event
        ICRST OFFSET(1) NUMBITS(1) [],
        /// Edge or level select
        ELSA OFFSET(2) NUMBITS(1) [],
        ELSB OFFSET(3) NUMBITS(1) [],
        /// Channel mode select
        MSA OFFSET(4) NUMBITS(1) [],
        MSB OFFSET(5) NUMBITS(1) [],
        /// Channel interrupt enable
        CHIE OFFSET(6) NUMBITS(1) [],
        /// Channel flag
        CHF OFFSET(7) NUMBITS(1) [],
        /// Trigger mode control
        TRIGMODE OFFSET(8) NUMBITS(1) [],
        /// Channel input state
        CHIS OFFSET(9) NUMBITS(1) [],
        /// Channel output value
        CHOV OFFSET(10) NUMBITS(1) []
    ],
    pub CNV [
        VAL OFFSET(0) NUMBITS(16) []
    ],
    pub CNTIN [
        INIT OFFSET(0) NUMBITS(16) []
    ],
    // STATUS, OUTINIT, OUTMASK and POL: one bit per channel
    pub CHANNELS [
        CH0 OFFSET(0) NUMBITS(1) [],
        CH1 OFFSET(1) NUMBITS(1) [],
        CH2 OFFSET(2) NUMBITS(1) [],
        CH3 OFFSET(3) NUMBITS(1) [],
        CH4 OFFSET(4) NUMBITS(1) [],
        CH5 OFFSET(5) NUMBITS(1) [],
        CH6 OFFSET(6) NUMBITS(1) [],
        CH7 OFFSET(7) NUMBITS(1) []
    ],
    pub MODE [
        /// FTM enable
        FTMEN OFFSET(0) NUMBITS(1) [],
        /// Initialize the channels output
        INIT OFFSET(1) NUMBITS(1) [],
        /// Write protection disable
        WPDIS OFFSET(2) NUMBITS(1) [],
        /// PWM synchronization mode
        PWMSYNC OFFSET(3) NUMBITS(1) [],
        /// Capture test mode enable
        CAPTEST OFFSET(4) NUMBITS(1) [],
        /// Fault control mode
        FAULTM OFFSET(5) NUMBITS(2) [
            Disabled = 0,
            EvenChannelsManual = 1,
            AllChannelsManual = 2,
            AllChannelsAutomatic = 3
        ],
        /// Fault interrupt enable
        FAULTIE OFFSET(7) NUMBITS(1) []
    ],
    pub SYNC [
        CNTMIN OFFSET(0) NUMBITS(1) [],
        CNTMAX OFFSET(1) NUMBITS(1) [],
        REINIT OFFSET(2) NUMBITS(1) [],
        SYNCHOM OFFSET(3) NUMBITS(1) [],
        TRIG0 OFFSET(4) NUMBITS(1) [],
        TRIG1 OFFSET(5) NUMBITS(1) [],
        TRIG2 OFFSET(6) NUMBITS(1) [],
        SWSYNC OFFSET(7) NUMBITS(1) []
    ],
    pub COMBINE [
        COMBINE0 OFFSET(0) NUMBITS(1) [],
        COMP0 OFFSET(1) NUMBITS(1) [],
        DECAPEN0 OFFSET(2) NUMBITS(1) [],
        DECAP0 OFFSET(3) NUMBITS(1) [],
        DTEN0 OFFSET(4) NUMBITS(1) [],
        SYNCEN0 OFFSET(5) NUMBITS(1) [],
        FAULTEN0 OFFSET(6) NUMBITS(1) [],
        MCOMBINE0 OFFSET(7) NUMBITS(1) [],
        COMBINE1 OFFSET(8) NUMBITS(1) [],
        COMP1 OFFSET(9) NUMBITS(1) [],
        DECAPEN1 OFFSET(10) NUMBITS(1) [],
        DECAP1 OFFSET(11) NUMBITS(1) [],
        DTEN1 OFFSET(12) NUMBITS(1) [],
        SYNCEN1 OFFSET(13) NUMBITS(1) [],
        FAULTEN1 OFFSET(14) NUMBITS(1) [],
        MCOMBINE1 OFFSET(15) NUMBITS(1) [],
        COMBINE2 OFFSET(16) NUMBITS(1) [],
        COMP2 OFFSET(17) NUMBITS(1) [],
        DECAPEN2 OFFSET(18) NUMBITS(1) [],
        DECAP2 OFFSET(19) NUMBITS(1) [],
        DTEN2 OFFSET(20) NUMBITS(1) [],
        SYNCEN2 OFFSET(21) NUMBITS(1) [],
        FAULTEN2 OFFSET(22) NUMBITS(1) [],
        MCOMBINE2 OFFSET(23) NUMBITS(1) [],
        COMBINE3 OFFSET(24) NUMBITS(1) [],
        COMP3 OFFSET(25) NUMBITS(1) [],
        DECAPEN3 OFFSET(26) NUMBITS(1) [],
        DECAP3 OFFSET(27) NUMBITS(1) [],
        DTEN3 OFFSET(28) NUMBITS(1) [],
        SYNCEN3 OFFSET(29) NUMBITS(1) [],
        FAULTEN3 OFFSET(30) NUMBITS(1) [],
        MCOMBINE3 OFFSET(31) NUMBITS(1) []
    ],
    // DEADTIME and PAIRnDEADTIME
    pub DEADTIME [
        /// Deadtime value
        DTVAL OFFSET(0) NUMBITS(6) [],
        /// Deadtime prescaler value
        DTPS OFFSET(6) NUMBITS(2) [
            Div1 = 0,
            Div4 = 2,
            Div16 = 3
        ],
        /// Extended deadtime value
        DTVALEX OFFSET(16) NUMBITS(4) []
    ],
    pub EXTTRIG [
        CH2TRIG OFFSET(0) NUMBITS(1) [],
        CH3TRIG OFFSET(1) NUMBITS(1) [],
        CH4TRIG OFFSET(2) NUMBITS(1) [],
        CH5TRIG OFFSET(3) NUMBITS(1) [],
        CH0TRIG OFFSET(4) NUMBITS(1) [],
        CH1TRIG OFFSET(5) NUMBITS(1) [],
        /// Initialization trigger enable
        INITTRIGEN OFFSET(6) NUMBITS(1) [],
        /// Channel trigger flag
        TRIGF OFFSET(7) NUMBITS(1) [],
        CH6TRIG OFFSET(8) NUMBITS(1) [],
        CH7TRIG OFFSET(9) NUMBITS(1) []
    ],
    pub FMS [
        FAULTF0 OFFSET(0) NUMBITS(1) [],
        FAULTF1 OFFSET(1) NUMBITS(1) [],
        FAULTF2 OFFSET(2) NUMBITS(1) [],
        FAULTF3 OFFSET(3) NUMBITS(1) [],
        /// Fault inputs
        FAULTIN OFFSET(5) NUMBITS(1) [],
        /// Write protection enable
        WPEN OFFSET(6) NUMBITS(1) [],
        /// Fault detection flag
        FAULTF OFFSET(7) NUMBITS(1) []
    ],
    pub FILTER [
        CH0FVAL OFFSET(0) NUMBITS(4) [],
        CH1FVAL OFFSET(4) NUMBITS(4) [],
        CH2FVAL OFFSET(8) NUMBITS(4) [],
        CH3FVAL OFFSET(12) NUMBITS(4) []
    ],
    pub FLTCTRL [
        FAULT0EN OFFSET(0) NUMBITS(1) [],
        FAULT1EN OFFSET(1) NUMBITS(1) [],
        FAULT2EN OFFSET(2) NUMBITS(1) [],
        FAULT3EN OFFSET(3) NUMBITS(1) [],
        FFLTR0EN OFFSET(4) NUMBITS(1) [],
        FFLTR1EN OFFSET(5) NUMBITS(1) [],
        FFLTR2EN OFFSET(6) NUMBITS(1) [],
        FFLTR3EN OFFSET(7) NUMBITS(1) [],
        /// Fault input filter
        FFVAL OFFSET(8) NUMBITS(4) [],
        /// Fault output state
        FSTATE OFFSET(15) NUMBITS(1) []
    ],
    pub QDCTRL [
        QUADEN OFFSET(0) NUMBITS(1) [],
        /// Timer overflow direction in quadrature decoder mode
        TOFDIR OFFSET(1) NUMBITS(1) [],
        /// FTM counter direction in quadrature decoder mode
        QUADIR OFFSET(2) NUMBITS(1) [],
        QUADMODE OFFSET(3) NUMBITS(1) [
            PhaseAPhaseB = 0,
            CountDirection = 1
        ],
        PHBPOL OFFSET(4) NUMBITS(1) [],
        PHAPOL OFFSET(5) NUMBITS(1) [],
        PHBFLTREN OFFSET(6) NUMBITS(1) [],
        PHAFLTREN OFFSET(7) NUMBITS(1) []
    ],
    pub CONF [
        /// Frequency of the reload opportunities
        LDFQ OFFSET(0) NUMBITS(5) [],
        /// Debug mode
        BDMMODE OFFSET(6) NUMBITS(2) [],
        /// Global time base enable
        GTBEEN OFFSET(9) NUMBITS(1) [],
        /// Global time base output
        GTBEOUT OFFSET(10) NUMBITS(1) [],
        /// Initialization trigger on reload point
        ITRIGR OFFSET(11) NUMBITS(1) []
    ],
    pub FLTPOL [
        FLT0POL OFFSET(0) NUMBITS(1) [],
        FLT1POL OFFSET(1) NUMBITS(1) [],
        FLT2POL OFFSET(2) NUMBITS(1) [],
        FLT3POL OFFSET(3) NUMBITS(1) []
    ],
    pub SYNCONF [
        HWTRIGMODE OFFSET(0) NUMBITS(1) [],
        CNTINC OFFSET(2) NUMBITS(1) [],
        INVC OFFSET(4) NUMBITS(1) [],
        SWOC OFFSET(5) NUMBITS(1) [],
        SYNCMODE OFFSET(7) NUMBITS(1) [
            Legacy = 0,
            Enhanced = 1
        ],
        SWRSTCNT OFFSET(8) NUMBITS(1) [],
        SWWRBUF OFFSET(9) NUMBITS(1) [],
        SWOM OFFSET(10) NUMBITS(1) [],
        SWINVC OFFSET(11) NUMBITS(1) [],
        SWSOC OFFSET(12) NUMBITS(1) [],
        HWRSTCNT OFFSET(16) NUMBITS(1) [],
        HWWRBUF OFFSET(17) NUMBITS(1) [],
        HWOM OFFSET(18) NUMBITS(1) [],
        HWINVC OFFSET(19) NUMBITS(1) [],
        HWSOC OFFSET(20) NUMBITS(1) []
    ],
    pub INVCTRL [
        INV0EN OFFSET(0) NUMBITS(1) [],
        INV1EN OFFSET(1) NUMBITS(1) [],
        INV2EN OFFSET(2) NUMBITS(1) [],
        INV3EN OFFSET(3) NUMBITS(1) []
    ],
    pub SWOCTRL [
        /// Software output control enables
        OC OFFSET(0) NUMBITS(8) [],
        /// Software output control values
        OCV OFFSET(8) NUMBITS(8) []
    ],
    pub PWMLOAD [
        /// Channel match enables
        CHSEL OFFSET(0) NUMBITS(8) [],
        /// Half cycle enable
        HCSEL OFFSET(8) NUMBITS(1) [],
        /// Load enable
        LDOK OFFSET(9) NUMBITS(1) [],
        /// Global load enable
        GLEN OFFSET(10) NUMBITS(1) [],
        /// Global load OK
        GLDOK OFFSET(11) NUMBITS(1) []
    ],
    pub HCR [
        HCVAL OFFSET(0) NUMBITS(16) []
    ],
    pub MOD_MIRROR [
        FRACMOD OFFSET(11) NUMBITS(5) [],
        MOD OFFSET(16) NUMBITS(16) []
    ],
    pub CV_MIRROR [
        FRACVAL OFFSET(11) NUMBITS(5) [],
        VAL OFFSET(16) NUMBITS(16) []
    ]
];

pub const FTM0_BASE_ADDR: usize = 0x4003_8000;
pub const FTM1_BASE_ADDR: usize = 0x4003_9000;

pub const FTM0_BASE: StaticRef<FtmRegisters> =
    unsafe { StaticRef::new(FTM0_BASE_ADDR as *const FtmRegisters) };
pub const FTM1_BASE: StaticRef<FtmRegisters> =
    unsafe { StaticRef::new(FTM1_BASE_ADDR as *const FtmRegisters) };

pub const FTM_BASE_ADDRS: [usize; FTM_INSTANCE_COUNT] = [FTM0_BASE_ADDR, FTM1_BASE_ADDR];
pub const FTM_BASE_PTRS: [StaticRef<FtmRegisters>; FTM_INSTANCE_COUNT] = [FTM0_BASE, FTM1_BASE];

pub const FTM_IRQS: [[u32; FTM_CHANNEL_COUNT]; FTM_INSTANCE_COUNT] = [
    [interrupts::FTM0_CH0_7; FTM_CHANNEL_COUNT],
    [interrupts::FTM1_CH0_7; FTM_CHANNEL_COUNT],
];
pub const FTM_FAULT_IRQS: [u32; FTM_INSTANCE_COUNT] =
    [interrupts::FTM0_FAULT, interrupts::FTM1_FAULT];
pub const FTM_OVERFLOW_IRQS: [u32; FTM_INSTANCE_COUNT] =
    [interrupts::FTM0_OVF_RELOAD, interrupts::FTM1_OVF_RELOAD];
pub const FTM_RELOAD_IRQS: [u32; FTM_INSTANCE_COUNT] =
    [interrupts::FTM0_OVF_RELOAD, interrupts::FTM1_OVF_RELOAD];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::{offset_of, size_of};

    #[test]
    fn channel_blocks() {
        assert_eq!(size_of::<ChannelControl>(), 8);
        assert_eq!(offset_of!(FtmRegisters, controls), 0x0C);
        assert_eq!(offset_of!(FtmRegisters, cntin), 0x4C);
        assert_eq!(offset_of!(FtmRegisters, pwmload), 0x98);
        assert_eq!(offset_of!(FtmRegisters, pair3deadtime), 0xB8);
        assert_eq!(offset_of!(FtmRegisters, mod_mirror), 0x200);
        assert_eq!(size_of::<FtmRegisters>(), 0x224);
    }

    #[test]
    fn control_fields() {
        assert_field!(SC::PS, 0, 3);
        assert_field!(SC::CLKS, 3, 2);
        assert_field!(SC::PWMEN7, 23, 1);
        assert_field!(SC::FLTPS, 24, 4);
        assert_field!(MODE::FAULTM, 5, 2);
        assert_field!(COMBINE::MCOMBINE3, 31, 1);
        assert_field!(COMBINE::DTEN1, 12, 1);
        assert_field!(DEADTIME::DTVALEX, 16, 4);
        assert_field!(FLTCTRL::FFVAL, 8, 4);
        assert_field!(SYNCONF::HWSOC, 20, 1);
        assert_field!(CV_MIRROR::VAL, 16, 16);
        assert_field!(MOD_MIRROR::FRACMOD, 11, 5);
    }

    #[test]
    fn both_instances_have_all_lines() {
        assert_eq!(FTM_IRQS[1], [15; 8]);
        assert_eq!(FTM_FAULT_IRQS, [13, 16]);
        assert_eq!(FTM_OVERFLOW_IRQS, FTM_RELOAD_IRQS);
        assert_eq!(FTM_BASE_ADDRS[1] - FTM_BASE_ADDRS[0], 0x1000);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            SC [PS, CLKS, CPWMS, RIE, RF, TOIE, TOF, PWMEN0, PWMEN1, PWMEN2, PWMEN3, PWMEN4, PWMEN5,
                PWMEN6, PWMEN7, FLTPS],
            CNT [COUNT],
            MOD [MOD],
            CNSC [DMA, ICRST, ELSA, ELSB, MSA, MSB, CHIE, CHF, TRIGMODE, CHIS, CHOV],
            CNV [VAL],
            CNTIN [INIT],
            CHANNELS [CH0, CH1, CH2, CH3, CH4, CH5, CH6, CH7],
            MODE [FTMEN, INIT, WPDIS, PWMSYNC, CAPTEST, FAULTM, FAULTIE],
            SYNC [CNTMIN, CNTMAX, REINIT, SYNCHOM, TRIG0, TRIG1, TRIG2, SWSYNC],
            COMBINE [COMBINE0, COMP0, DECAPEN0, DECAP0, DTEN0, SYNCEN0, FAULTEN0, MCOMBINE0,
                COMBINE1, COMP1, DECAPEN1, DECAP1, DTEN1, SYNCEN1, FAULTEN1, MCOMBINE1, COMBINE2,
                COMP2, DECAPEN2, DECAP2, DTEN2, SYNCEN2, FAULTEN2, MCOMBINE2, COMBINE3, COMP3,
                DECAPEN3, DECAP3, DTEN3, SYNCEN3, FAULTEN3, MCOMBINE3],
            DEADTIME [DTVAL, DTPS, DTVALEX],
            EXTTRIG [CH2TRIG, CH3TRIG, CH4TRIG, CH5TRIG, CH0TRIG, CH1TRIG, INITTRIGEN, TRIGF,
                CH6TRIG, CH7TRIG],
            FMS [FAULTF0, FAULTF1, FAULTF2, FAULTF3, FAULTIN, WPEN, FAULTF],
            FILTER [CH0FVAL, CH1FVAL, CH2FVAL, CH3FVAL],
            FLTCTRL [FAULT0EN, FAULT1EN, FAULT2EN, FAULT3EN, FFLTR0EN, FFLTR1EN, FFLTR2EN, FFLTR3EN,
                FFVAL, FSTATE],
            QDCTRL [QUADEN, TOFDIR, QUADIR, QUADMODE, PHBPOL, PHAPOL, PHBFLTREN, PHAFLTREN],
            CONF [LDFQ, BDMMODE, GTBEEN, GTBEOUT, ITRIGR],
            FLTPOL [FLT0POL, FLT1POL, FLT2POL, FLT3POL],
            SYNCONF [HWTRIGMODE, CNTINC, INVC, SWOC, SYNCMODE, SWRSTCNT, SWWRBUF, SWOM, SWINVC,
                SWSOC, HWRSTCNT, HWWRBUF, HWOM, HWINVC, HWSOC],
            INVCTRL [INV0EN, INV1EN, INV2EN, INV3EN],
            SWOCTRL [OC, OCV],
            PWMLOAD [CHSEL, HCSEL, LDOK, GLEN, GLDOK],
            HCR [HCVAL],
            MOD_MIRROR [FRACMOD, MOD],
            CV_MIRROR [FRACVAL, VAL],
        );
    }
}
