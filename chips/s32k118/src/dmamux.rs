// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! DMA request multiplexer (DMAMUX).
//!
//! | ENBL | TRIG | Function                                                |
//! |------|------|---------------------------------------------------------|
//! |   0  |   X  | DMA channel is disabled                                 |
//! |   1  |   0  | DMA channel is enabled with no triggering (transparent) |
//! |   1  |   1  | DMA channel is enabled with LPIT periodic triggering    |

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const DMAMUX_INSTANCE_COUNT: usize = 1;
pub const DMAMUX_CHCFG_COUNT: usize = 4;

register_structs! {
    pub DmamuxRegisters {
        /// Channel Configuration registers, one per eDMA channel
        (0x000 => pub chcfg: [ReadWrite<u8, CHCFG::Register>; DMAMUX_CHCFG_COUNT]),
        (0x004 => @END),
    }
}

register_bitfields![u8,
    /// Setting multiple CHCFG registers with the same source value results in
    /// unpredictable behavior, even if a channel is disabled.
    pub CHCFG [
        /// DMA channel source (slot number)
        SOURCE OFFSET(0) NUMBITS(6) [
            Disabled = 0,
            Lpuart0Rx = 2,
            Lpuart0Tx = 3,
            Lpuart1Rx = 4,
            Lpuart1Tx = 5,
            FlexioShifter0 = 10,
            FlexioShifter1 = 11,
            FlexioShifter2 = 12,
            FlexioShifter3 = 13,
            Lpspi0Rx = 14,
            Lpspi0Tx = 15,
            Lpspi1Rx = 16,
            Lpspi1Tx = 17,
            Ftm1Channel0 = 20,
            Ftm1Channel1 = 21,
            Ftm1Channel2 = 22,
            Ftm1Channel3 = 23,
            Ftm1Channel4 = 24,
            Ftm1Channel5 = 25,
            Ftm1Channel6 = 26,
            Ftm1Channel7 = 27,
            /// FTM0 channels 0 to 7, or-ed
            Ftm0Channels = 36,
            Adc0 = 42,
            Lpi2c0Rx = 44,
            Lpi2c0Tx = 45,
            Pdb0 = 46,
            Cmp0 = 48,
            PortA = 49,
            PortB = 50,
            PortC = 51,
            PortD = 52,
            PortE = 53,
            Flexcan0 = 54,
            Lptmr0 = 59,
            AlwaysEnabled0 = 62,
            AlwaysEnabled1 = 63
        ],
        /// DMA channel trigger enable
        TRIG OFFSET(6) NUMBITS(1) [],
        /// DMA channel enable
        ENBL OFFSET(7) NUMBITS(1) []
    ]
];

pub const DMAMUX_BASE_ADDR: usize = 0x4002_1000;

pub const DMAMUX_BASE: StaticRef<DmamuxRegisters> =
    unsafe { StaticRef::new(DMAMUX_BASE_ADDR as *const DmamuxRegisters) };

pub const DMAMUX_BASE_ADDRS: [usize; DMAMUX_INSTANCE_COUNT] = [DMAMUX_BASE_ADDR];
pub const DMAMUX_BASE_PTRS: [StaticRef<DmamuxRegisters>; DMAMUX_INSTANCE_COUNT] = [DMAMUX_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn byte_wide_configuration() {
        assert_eq!(core::mem::size_of::<DmamuxRegisters>(), 4);
        assert_field!(CHCFG::SOURCE, 0, 6);
        assert_field!(CHCFG::TRIG, 6, 1);
        assert_field!(CHCFG::ENBL, 7, 1);
        assert_eq!(u8::from(CHCFG::ENBL::SET + CHCFG::SOURCE.val(0x7F)), 0xBF);
    }

    #[test]
    fn request_sources() {
        assert_eq!(u8::from(CHCFG::SOURCE::Lpuart0Rx), 2);
        assert_eq!(u8::from(CHCFG::SOURCE::Lpspi1Tx), 17);
        assert_eq!(u8::from(CHCFG::SOURCE::Ftm0Channels), 36);
        assert_eq!(u8::from(CHCFG::SOURCE::Flexcan0), 54);
        assert_eq!(u8::from(CHCFG::SOURCE::AlwaysEnabled1), 63);
        assert_eq!(u8::from(CHCFG::ENBL::SET + CHCFG::SOURCE::Flexcan0), 0x80 | 54);

        let chcfg = LocalRegisterCopy::<u8, CHCFG::Register>::new(0x80 | 42);
        assert_eq!(chcfg.read_as_enum(CHCFG::SOURCE), Some(CHCFG::SOURCE::Value::Adc0));
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            CHCFG [SOURCE, TRIG, ENBL],
        );
    }
}
