// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Trigger Multiplexing Control (TRGMUX).
//!
//! Each target peripheral owns one register with up to four 6-bit trigger
//! source selectors. Slots for peripherals not present on this part are
//! reserved.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const TRGMUX_INSTANCE_COUNT: usize = 1;
pub const TRGMUX_TRGMUXN_COUNT: usize = 26;

pub const TRGMUX_DMAMUX0_INDEX: usize = 0;
pub const TRGMUX_EXTOUT0_INDEX: usize = 1;
pub const TRGMUX_EXTOUT1_INDEX: usize = 2;
pub const TRGMUX_ADC0_INDEX: usize = 3;
pub const TRGMUX_CMP0_INDEX: usize = 7;
pub const TRGMUX_FTM0_INDEX: usize = 10;
pub const TRGMUX_FTM1_INDEX: usize = 11;
pub const TRGMUX_PDB0_INDEX: usize = 14;
pub const TRGMUX_FLEXIO_INDEX: usize = 17;
pub const TRGMUX_LPIT0_INDEX: usize = 18;
pub const TRGMUX_LPUART0_INDEX: usize = 19;
pub const TRGMUX_LPUART1_INDEX: usize = 20;
pub const TRGMUX_LPI2C0_INDEX: usize = 21;
pub const TRGMUX_LPSPI0_INDEX: usize = 23;
pub const TRGMUX_LPSPI1_INDEX: usize = 24;
pub const TRGMUX_LPTMR0_INDEX: usize = 25;

register_structs! {
    pub TrgmuxRegisters {
        /// TRGMUX register n
        (0x00 => pub trgmuxn: [ReadWrite<u32, TRGMUXN::Register>; TRGMUX_TRGMUXN_COUNT]),
        (0x68 => @END),
    }
}

register_bitfields![u32,
    pub TRGMUXN [
        // The four selectors share one source encoding.
        SEL0 OFFSET(0) NUMBITS(6) [
            Disabled = 0,
            Vdd = 1,
            TrgmuxIn0 = 2,
            TrgmuxIn1 = 3,
            TrgmuxIn2 = 4,
            TrgmuxIn3 = 5,
            TrgmuxIn4 = 6,
            TrgmuxIn5 = 7,
            TrgmuxIn6 = 8,
            TrgmuxIn7 = 9,
            TrgmuxIn8 = 10,
            TrgmuxIn9 = 11,
            Cmp0Out = 14,
            LpitCh0 = 17,
            LpitCh1 = 18,
            LpitCh2 = 19,
            LpitCh3 = 20,
            Lptmr0 = 21,
            Ftm0InitTrig = 22,
            Ftm0ExtTrig = 23,
            Ftm1InitTrig = 24,
            Ftm1ExtTrig = 25,
            Adc0Sc1aCoco = 30,
            Adc0Sc1bCoco = 31,
            Pdb0Ch0Trig = 34,
            Pdb0PulseOut = 36,
            RtcAlarm = 43,
            RtcSecond = 44,
            FlexioTrig0 = 45,
            FlexioTrig1 = 46,
            FlexioTrig2 = 47,
            FlexioTrig3 = 48,
            Lpuart0RxData = 49,
            Lpuart0TxData = 50,
            Lpuart0RxIdle = 51,
            Lpuart1RxData = 52,
            Lpuart1TxData = 53,
            Lpuart1RxIdle = 54,
            Lpi2c0MasterTrig = 55,
            Lpi2c0SlaveTrig = 56,
            Lpspi0Frame = 59,
            Lpspi0RxData = 60,
            Lpspi1Frame = 61,
            Lpspi1RxData = 62,
            SimSwTrig = 63
        ],
        SEL1 OFFSET(8) NUMBITS(6) [
            Disabled = 0,
            Vdd = 1,
            TrgmuxIn0 = 2,
            TrgmuxIn1 = 3,
            TrgmuxIn2 = 4,
            TrgmuxIn3 = 5,
            TrgmuxIn4 = 6,
            TrgmuxIn5 = 7,
            TrgmuxIn6 = 8,
            TrgmuxIn7 = 9,
            TrgmuxIn8 = 10,
            TrgmuxIn9 = 11,
            Cmp0Out = 14,
            LpitCh0 = 17,
            LpitCh1 = 18,
            LpitCh2 = 19,
            LpitCh3 = 20,
            Lptmr0 = 21,
            Ftm0InitTrig = 22,
            Ftm0ExtTrig = 23,
            Ftm1InitTrig = 24,
            Ftm1ExtTrig = 25,
            Adc0Sc1aCoco = 30,
            Adc0Sc1bCoco = 31,
            Pdb0Ch0Trig = 34,
            Pdb0PulseOut = 36,
            RtcAlarm = 43,
            RtcSecond = 44,
            FlexioTrig0 = 45,
            FlexioTrig1 = 46,
            FlexioTrig2 = 47,
            FlexioTrig3 = 48,
            Lpuart0RxData = 49,
            Lpuart0TxData = 50,
            Lpuart0RxIdle = 51,
            Lpuart1RxData = 52,
            Lpuart1TxData = 53,
            Lpuart1RxIdle = 54,
            Lpi2c0MasterTrig = 55,
            Lpi2c0SlaveTrig = 56,
            Lpspi0Frame = 59,
            Lpspi0RxData = 60,
            Lpspi1Frame = 61,
            Lpspi1RxData = 62,
            SimSwTrig = 63
        ],
        SEL2 OFFSET(16) NUMBITS(6) [
            Disabled = 0,
            Vdd = 1,
            TrgmuxIn0 = 2,
            TrgmuxIn1 = 3,
            TrgmuxIn2 = 4,
            TrgmuxIn3 = 5,
            TrgmuxIn4 = 6,
            TrgmuxIn5 = 7,
            TrgmuxIn6 = 8,
            TrgmuxIn7 = 9,
            TrgmuxIn8 = 10,
            TrgmuxIn9 = 11,
            Cmp0Out = 14,
            LpitCh0 = 17,
            LpitCh1 = 18,
            LpitCh2 = 19,
            LpitCh3 = 20,
            Lptmr0 = 21,
            Ftm0InitTrig = 22,
            Ftm0ExtTrig = 23,
            Ftm1InitTrig = 24,
            Ftm1ExtTrig = 25,
            Adc0Sc1aCoco = 30,
            Adc0Sc1bCoco = 31,
            Pdb0Ch0Trig = 34,
            Pdb0PulseOut = 36,
            RtcAlarm = 43,
            RtcSecond = 44,
            FlexioTrig0 = 45,
            FlexioTrig1 = 46,
            FlexioTrig2 = 47,
            FlexioTrig3 = 48,
            Lpuart0RxData = 49,
            Lpuart0TxData = 50,
            Lpuart0RxIdle = 51,
            Lpuart1RxData = 52,
            Lpuart1TxData = 53,
            Lpuart1RxIdle = 54,
            Lpi2c0MasterTrig = 55,
            Lpi2c0SlaveTrig = 56,
            Lpspi0Frame = 59,
            Lpspi0RxData = 60,
            Lpspi1Frame = 61,
            Lpspi1RxData = 62,
            SimSwTrig = 63
        ],
        SEL3 OFFSET(24) NUMBITS(6) [
            Disabled = 0,
            Vdd = 1,
            TrgmuxIn0 = 2,
            TrgmuxIn1 = 3,
            TrgmuxIn2 = 4,
            TrgmuxIn3 = 5,
            TrgmuxIn4 = 6,
            TrgmuxIn5 = 7,
            TrgmuxIn6 = 8,
            TrgmuxIn7 = 9,
            TrgmuxIn8 = 10,
            TrgmuxIn9 = 11,
            Cmp0Out = 14,
            LpitCh0 = 17,
            LpitCh1 = 18,
            LpitCh2 = 19,
            LpitCh3 = 20,
            Lptmr0 = 21,
            Ftm0InitTrig = 22,
            Ftm0ExtTrig = 23,
            Ftm1InitTrig = 24,
            Ftm1ExtTrig = 25,
            Adc0Sc1aCoco = 30,
            Adc0Sc1bCoco = 31,
            Pdb0Ch0Trig = 34,
            Pdb0PulseOut = 36,
            RtcAlarm = 43,
            RtcSecond = 44,
            FlexioTrig0 = 45,
            FlexioTrig1 = 46,
            FlexioTrig2 = 47,
            FlexioTrig3 = 48,
            Lpuart0RxData = 49,
            Lpuart0TxData = 50,
            Lpuart0RxIdle = 51,
            Lpuart1RxData = 52,
            Lpuart1TxData = 53,
            Lpuart1RxIdle = 54,
            Lpi2c0MasterTrig = 55,
            Lpi2c0SlaveTrig = 56,
            Lpspi0Frame = 59,
            Lpspi0RxData = 60,
            Lpspi1Frame = 61,
            Lpspi1RxData = 62,
            SimSwTrig = 63
        ],
        /// Register lock, cleared only by reset
        LK OFFSET(31) NUMBITS(1) []
    ]
];

/// Bit position of selector `SELn` within a TRGMUX register.
pub const fn selector_shift(n: usize) -> Option<usize> {
    if n < 4 {
        Some(n * 8)
    } else {
        None
    }
}

/// Trigger outputs of the TRGMUX.
///
/// The value of each target is `4 * register + selector`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum TriggerTarget {
    DmaCh0 = 0,
    DmaCh1 = 1,
    DmaCh2 = 2,
    DmaCh3 = 3,
    TrgmuxOut0 = 4,
    TrgmuxOut1 = 5,
    TrgmuxOut2 = 6,
    TrgmuxOut3 = 7,
    TrgmuxOut4 = 8,
    TrgmuxOut5 = 9,
    Adc0AdhwtTla0 = 12,
    Adc0AdhwtTla1 = 13,
    Adc0AdhwtTla2 = 14,
    Adc0AdhwtTla3 = 15,
    Cmp0Sample = 28,
    Ftm0Hwtrig0 = 40,
    Ftm0Fault0 = 41,
    Ftm0Fault1 = 42,
    Ftm0Fault2 = 43,
    Ftm1Hwtrig0 = 44,
    Ftm1Fault0 = 45,
    Ftm1Fault1 = 46,
    Ftm1Fault2 = 47,
    Pdb0TrgIn = 56,
    FlexioTrgTim0 = 68,
    FlexioTrgTim1 = 69,
    FlexioTrgTim2 = 70,
    FlexioTrgTim3 = 71,
    LpitTrgCh0 = 72,
    LpitTrgCh1 = 73,
    LpitTrgCh2 = 74,
    LpitTrgCh3 = 75,
    Lpuart0Trg = 76,
    Lpuart1Trg = 80,
    Lpi2c0Trg = 84,
    Lpspi0Trg = 92,
    Lpspi1Trg = 96,
    Lptmr0Alt0 = 100,
}

impl TriggerTarget {
    pub const ALL: [TriggerTarget; 38] = [
        TriggerTarget::DmaCh0,
        TriggerTarget::DmaCh1,
        TriggerTarget::DmaCh2,
        TriggerTarget::DmaCh3,
        TriggerTarget::TrgmuxOut0,
        TriggerTarget::TrgmuxOut1,
        TriggerTarget::TrgmuxOut2,
        TriggerTarget::TrgmuxOut3,
        TriggerTarget::TrgmuxOut4,
        TriggerTarget::TrgmuxOut5,
        TriggerTarget::Adc0AdhwtTla0,
        TriggerTarget::Adc0AdhwtTla1,
        TriggerTarget::Adc0AdhwtTla2,
        TriggerTarget::Adc0AdhwtTla3,
        TriggerTarget::Cmp0Sample,
        TriggerTarget::Ftm0Hwtrig0,
        TriggerTarget::Ftm0Fault0,
        TriggerTarget::Ftm0Fault1,
        TriggerTarget::Ftm0Fault2,
        TriggerTarget::Ftm1Hwtrig0,
        TriggerTarget::Ftm1Fault0,
        TriggerTarget::Ftm1Fault1,
        TriggerTarget::Ftm1Fault2,
        TriggerTarget::Pdb0TrgIn,
        TriggerTarget::FlexioTrgTim0,
        TriggerTarget::FlexioTrgTim1,
        TriggerTarget::FlexioTrgTim2,
        TriggerTarget::FlexioTrgTim3,
        TriggerTarget::LpitTrgCh0,
        TriggerTarget::LpitTrgCh1,
        TriggerTarget::LpitTrgCh2,
        TriggerTarget::LpitTrgCh3,
        TriggerTarget::Lpuart0Trg,
        TriggerTarget::Lpuart1Trg,
        TriggerTarget::Lpi2c0Trg,
        TriggerTarget::Lpspi0Trg,
        TriggerTarget::Lpspi1Trg,
        TriggerTarget::Lptmr0Alt0,
    ];

    /// Index into `trgmuxn` of the register holding this target.
    pub const fn register_index(self) -> usize {
        self as usize / 4
    }

    /// Selector (`SEL0`..`SEL3`) driving this target.
    pub const fn selector(self) -> usize {
        self as usize % 4
    }
}

pub const TRGMUX_BASE_ADDR: usize = 0x4006_3000;

pub const TRGMUX_BASE: StaticRef<TrgmuxRegisters> =
    unsafe { StaticRef::new(TRGMUX_BASE_ADDR as *const TrgmuxRegisters) };

pub const TRGMUX_BASE_ADDRS: [usize; TRGMUX_INSTANCE_COUNT] = [TRGMUX_BASE_ADDR];
pub const TRGMUX_BASE_PTRS: [StaticRef<TrgmuxRegisters>; TRGMUX_INSTANCE_COUNT] = [TRGMUX_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn selectors() {
        assert_eq!(core::mem::size_of::<TrgmuxRegisters>(), 0x68);
        assert_field!(TRGMUXN::SEL0, 0, 6);
        assert_field!(TRGMUXN::SEL3, 24, 6);
        assert_field!(TRGMUXN::LK, 31, 1);
        assert_eq!(selector_shift(0), Some(TRGMUXN::SEL0.shift));
        assert_eq!(selector_shift(2), Some(TRGMUXN::SEL2.shift));
        assert_eq!(selector_shift(3), Some(TRGMUXN::SEL3.shift));
        assert_eq!(selector_shift(4), None);
        assert!(TRGMUX_LPTMR0_INDEX < TRGMUX_TRGMUXN_COUNT);
    }

    #[test]
    fn trigger_sources() {
        assert_eq!(u32::from(TRGMUXN::SEL0::Vdd), 1);
        assert_eq!(u32::from(TRGMUXN::SEL0::Cmp0Out), 14);
        assert_eq!(u32::from(TRGMUXN::SEL1::LpitCh0), 17 << 8);
        assert_eq!(u32::from(TRGMUXN::SEL2::RtcAlarm), 43 << 16);
        assert_eq!(u32::from(TRGMUXN::SEL3::SimSwTrig), 63 << 24);
    }

    #[test]
    fn trigger_targets() {
        assert_eq!(TriggerTarget::DmaCh2.register_index(), TRGMUX_DMAMUX0_INDEX);
        assert_eq!(TriggerTarget::DmaCh2.selector(), 2);
        assert_eq!(TriggerTarget::Adc0AdhwtTla3.register_index(), TRGMUX_ADC0_INDEX);
        assert_eq!(TriggerTarget::Adc0AdhwtTla3.selector(), 3);
        assert_eq!(TriggerTarget::Cmp0Sample.register_index(), TRGMUX_CMP0_INDEX);
        assert_eq!(TriggerTarget::Ftm1Fault2.register_index(), TRGMUX_FTM1_INDEX);
        assert_eq!(TriggerTarget::Pdb0TrgIn.register_index(), TRGMUX_PDB0_INDEX);
        assert_eq!(TriggerTarget::Lpuart1Trg.register_index(), TRGMUX_LPUART1_INDEX);
        assert_eq!(TriggerTarget::Lpspi1Trg.register_index(), TRGMUX_LPSPI1_INDEX);
        assert_eq!(TriggerTarget::Lptmr0Alt0.register_index(), TRGMUX_LPTMR0_INDEX);
        assert_eq!(TriggerTarget::Lptmr0Alt0 as u32, 100);

        for target in TriggerTarget::ALL {
            assert!(target.register_index() < TRGMUX_TRGMUXN_COUNT);
        }
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            TRGMUXN [SEL0, SEL1, SEL2, SEL3, LK],
        );
    }
}
