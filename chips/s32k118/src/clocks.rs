// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Clock names and their peripheral clock control mapping.
//!
//! Each clock has a stable number shared with the vendor clock manager so
//! tables indexed by clock number can be exchanged with it. Peripheral
//! clocks map to a `PCCn` register; the remaining clocks are produced by SCG
//! or gated in SIM.

use crate::pcc;

/// Size of tables indexed by clock number.
pub const CLOCK_NAME_COUNT: usize = 70;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ClockName {
    // Main clocks
    Core = 0,
    Bus = 1,
    Slow = 2,
    ClkOut = 3,

    // SCG
    Sirc = 4,
    Firc = 5,
    Sosc = 6,
    RtcClkIn = 8,
    ScgClkOut = 9,
    SircDiv1 = 10,
    SircDiv2 = 11,
    FircDiv1 = 12,
    FircDiv2 = 13,
    SoscDiv1 = 14,
    SoscDiv2 = 15,

    // SIM
    SimFtm0ClockSel = 21,
    SimFtm1ClockSel = 22,
    SimClkOutSel = 23,
    SimRtcClk = 24,
    SimLpo = 25,
    SimLpo1K = 26,
    SimLpo32K = 27,
    SimLpo128K = 28,
    SimEim = 29,
    SimErm = 30,
    SimDma = 31,
    SimMpu = 32,
    SimMscm = 33,

    // PCC, interface clock from BUS_CLK
    Cmp0 = 41,
    Crc0 = 42,
    Dmamux0 = 43,
    PortA = 44,
    PortB = 45,
    PortC = 46,
    PortD = 47,
    PortE = 48,
    Rtc0 = 49,

    // PCC, interface clock from SYS_CLK
    FlexCan0 = 51,
    Pdb0 = 52,

    // PCC, interface clock from SLOW_CLK
    Ftfc0 = 54,

    // PCC, functional clock from the first asynchronous divider
    Ftm0 = 56,
    Ftm1 = 57,

    // PCC, functional clock from the second asynchronous divider
    Adc0 = 59,
    FlexIo0 = 60,
    Lpi2c0 = 61,
    Lpit0 = 62,
    Lpspi0 = 63,
    Lpspi1 = 64,
    Lptmr0 = 65,
    Lpuart0 = 66,
    Lpuart1 = 67,
}

/// Feature flags of a peripheral clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeripheralFeatures(pub u8);

impl PeripheralFeatures {
    pub const NONE: PeripheralFeatures = PeripheralFeatures(0);
    /// Clock gating is in SIM rather than PCC.
    pub const CLOCK_GATING_IN_SIM: PeripheralFeatures = PeripheralFeatures(1 << 0);
    /// PCC implements a fractional multiplier.
    pub const MULTIPLIER: PeripheralFeatures = PeripheralFeatures(1 << 1);
    /// PCC implements a divider.
    pub const DIVIDER: PeripheralFeatures = PeripheralFeatures(1 << 2);
    /// Functional clock comes from the `*DIV1` asynchronous outputs.
    pub const PROTOCOL_CLOCK_FROM_ASYNC1: PeripheralFeatures = PeripheralFeatures(1 << 3);
    /// Functional clock comes from the `*DIV2` asynchronous outputs.
    pub const PROTOCOL_CLOCK_FROM_ASYNC2: PeripheralFeatures = PeripheralFeatures(1 << 4);
    pub const INT_CLOCK_FROM_BUS_CLOCK: PeripheralFeatures = PeripheralFeatures(1 << 5);
    pub const INT_CLOCK_FROM_SYS_CLOCK: PeripheralFeatures = PeripheralFeatures(1 << 6);
    pub const INT_CLOCK_FROM_SLOW_CLOCK: PeripheralFeatures = PeripheralFeatures(1 << 7);

    pub const fn union(self, other: PeripheralFeatures) -> PeripheralFeatures {
        PeripheralFeatures(self.0 | other.0)
    }

    pub const fn contains(self, other: PeripheralFeatures) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for PeripheralFeatures {
    type Output = PeripheralFeatures;
    fn bitor(self, rhs: PeripheralFeatures) -> PeripheralFeatures {
        self.union(rhs)
    }
}

const SIM_GATED: PeripheralFeatures = PeripheralFeatures::CLOCK_GATING_IN_SIM
    .union(PeripheralFeatures::INT_CLOCK_FROM_SYS_CLOCK);
const ASYNC1_SYS: PeripheralFeatures = PeripheralFeatures::PROTOCOL_CLOCK_FROM_ASYNC1
    .union(PeripheralFeatures::INT_CLOCK_FROM_SYS_CLOCK);
const ASYNC2_BUS: PeripheralFeatures = PeripheralFeatures::PROTOCOL_CLOCK_FROM_ASYNC2
    .union(PeripheralFeatures::INT_CLOCK_FROM_BUS_CLOCK);

impl ClockName {
    pub const ALL: [ClockName; 51] = [
        ClockName::Core,
        ClockName::Bus,
        ClockName::Slow,
        ClockName::ClkOut,
        ClockName::Sirc,
        ClockName::Firc,
        ClockName::Sosc,
        ClockName::RtcClkIn,
        ClockName::ScgClkOut,
        ClockName::SircDiv1,
        ClockName::SircDiv2,
        ClockName::FircDiv1,
        ClockName::FircDiv2,
        ClockName::SoscDiv1,
        ClockName::SoscDiv2,
        ClockName::SimFtm0ClockSel,
        ClockName::SimFtm1ClockSel,
        ClockName::SimClkOutSel,
        ClockName::SimRtcClk,
        ClockName::SimLpo,
        ClockName::SimLpo1K,
        ClockName::SimLpo32K,
        ClockName::SimLpo128K,
        ClockName::SimEim,
        ClockName::SimErm,
        ClockName::SimDma,
        ClockName::SimMpu,
        ClockName::SimMscm,
        ClockName::Cmp0,
        ClockName::Crc0,
        ClockName::Dmamux0,
        ClockName::PortA,
        ClockName::PortB,
        ClockName::PortC,
        ClockName::PortD,
        ClockName::PortE,
        ClockName::Rtc0,
        ClockName::FlexCan0,
        ClockName::Pdb0,
        ClockName::Ftfc0,
        ClockName::Ftm0,
        ClockName::Ftm1,
        ClockName::Adc0,
        ClockName::FlexIo0,
        ClockName::Lpi2c0,
        ClockName::Lpit0,
        ClockName::Lpspi0,
        ClockName::Lpspi1,
        ClockName::Lptmr0,
        ClockName::Lpuart0,
        ClockName::Lpuart1,
    ];

    pub fn from_u32(value: u32) -> Option<ClockName> {
        ClockName::ALL.iter().copied().find(|c| *c as u32 == value)
    }

    /// Index of the `PCCn` register gating this clock.
    pub const fn pcc_index(self) -> Option<usize> {
        let index = match self {
            ClockName::Cmp0 => pcc::PCC_CMP0_INDEX,
            ClockName::Crc0 => pcc::PCC_CRC_INDEX,
            ClockName::Dmamux0 => pcc::PCC_DMAMUX_INDEX,
            ClockName::PortA => pcc::PCC_PORTA_INDEX,
            ClockName::PortB => pcc::PCC_PORTB_INDEX,
            ClockName::PortC => pcc::PCC_PORTC_INDEX,
            ClockName::PortD => pcc::PCC_PORTD_INDEX,
            ClockName::PortE => pcc::PCC_PORTE_INDEX,
            ClockName::Rtc0 => pcc::PCC_RTC_INDEX,
            ClockName::FlexCan0 => pcc::PCC_FLEXCAN0_INDEX,
            ClockName::Pdb0 => pcc::PCC_PDB0_INDEX,
            ClockName::Ftfc0 => pcc::PCC_FTFC_INDEX,
            ClockName::Ftm0 => pcc::PCC_FTM0_INDEX,
            ClockName::Ftm1 => pcc::PCC_FTM1_INDEX,
            ClockName::Adc0 => pcc::PCC_ADC0_INDEX,
            ClockName::FlexIo0 => pcc::PCC_FLEXIO_INDEX,
            ClockName::Lpi2c0 => pcc::PCC_LPI2C0_INDEX,
            ClockName::Lpit0 => pcc::PCC_LPIT_INDEX,
            ClockName::Lpspi0 => pcc::PCC_LPSPI0_INDEX,
            ClockName::Lpspi1 => pcc::PCC_LPSPI1_INDEX,
            ClockName::Lptmr0 => pcc::PCC_LPTMR0_INDEX,
            ClockName::Lpuart0 => pcc::PCC_LPUART0_INDEX,
            ClockName::Lpuart1 => pcc::PCC_LPUART1_INDEX,
            _ => return None,
        };
        Some(index)
    }

    pub const fn features(self) -> PeripheralFeatures {
        match self {
            ClockName::SimEim
            | ClockName::SimErm
            | ClockName::SimDma
            | ClockName::SimMpu
            | ClockName::SimMscm => SIM_GATED,
            ClockName::Cmp0
            | ClockName::Crc0
            | ClockName::Dmamux0
            | ClockName::PortA
            | ClockName::PortB
            | ClockName::PortC
            | ClockName::PortD
            | ClockName::PortE
            | ClockName::Rtc0 => PeripheralFeatures::INT_CLOCK_FROM_BUS_CLOCK,
            ClockName::FlexCan0 | ClockName::Pdb0 => PeripheralFeatures::INT_CLOCK_FROM_SYS_CLOCK,
            ClockName::Ftfc0 => PeripheralFeatures::INT_CLOCK_FROM_SLOW_CLOCK,
            ClockName::Ftm0 | ClockName::Ftm1 => ASYNC1_SYS,
            ClockName::Lptmr0 => PeripheralFeatures::MULTIPLIER
                .union(PeripheralFeatures::DIVIDER)
                .union(ASYNC2_BUS),
            ClockName::Adc0
            | ClockName::FlexIo0
            | ClockName::Lpi2c0
            | ClockName::Lpit0
            | ClockName::Lpspi0
            | ClockName::Lpspi1
            | ClockName::Lpuart0
            | ClockName::Lpuart1 => ASYNC2_BUS,
            _ => PeripheralFeatures::NONE,
        }
    }
}
