// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Port control and interrupts (PORT).
//!
//! Each of the five ports has one pin control register (`PCR`) per pin. The
//! global pin control registers write the low or high half-word of several
//! PCRs at once; [`global_pin_control`] and [`global_interrupt_control`]
//! compute the values for a pin mask.

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::gpio::{self, GpioRegisters};
use crate::interrupts;
use crate::static_ref::StaticRef;

pub const PORT_INSTANCE_COUNT: usize = 5;
pub const PORT_PCR_COUNT: usize = 32;

register_structs! {
    pub PortRegisters {
        /// Pin Control Register n
        (0x00 => pub pcr: [ReadWrite<u32, PCR::Register>; PORT_PCR_COUNT]),
        /// Global Pin Control Low Register
        (0x80 => pub gpclr: WriteOnly<u32, GPC::Register>),
        /// Global Pin Control High Register
        (0x84 => pub gpchr: WriteOnly<u32, GPC::Register>),
        /// Global Interrupt Control Low Register
        (0x88 => pub giclr: WriteOnly<u32, GIC::Register>),
        /// Global Interrupt Control High Register
        (0x8C => pub gichr: WriteOnly<u32, GIC::Register>),
        (0x90 => _reserved0),
        /// Interrupt Status Flag Register
        (0xA0 => pub isfr: ReadWrite<u32>),
        (0xA4 => _reserved1),
        /// Digital Filter Enable Register
        (0xC0 => pub dfer: ReadWrite<u32>),
        /// Digital Filter Clock Register
        (0xC4 => pub dfcr: ReadWrite<u32, DFCR::Register>),
        /// Digital Filter Width Register
        (0xC8 => pub dfwr: ReadWrite<u32, DFWR::Register>),
        (0xCC => @END),
    }
}

register_bitfields![u32,
    pub PCR [
        /// Pull select
        PS OFFSET(0) NUMBITS(1) [
            PullDown = 0,
            PullUp = 1
        ],
        /// Pull enable
        PE OFFSET(1) NUMBITS(1) [],
        /// Passive filter enable
        PFE OFFSET(4) NUMBITS(1) [],
        /// Drive strength enable
        DSE OFFSET(6) NUMBITS(1) [],
        /// Pin mux control
        MUX OFFSET(8) NUMBITS(3) [
            Disabled = 0,
            Gpio = 1,
            Alt2 = 2,
            Alt3 = 3,
            Alt4 = 4,
            Alt5 = 5,
            Alt6 = 6,
            Alt7 = 7
        ],
        /// Lock register
        LK OFFSET(15) NUMBITS(1) [],
        /// Interrupt configuration
        IRQC OFFSET(16) NUMBITS(4) [
            Disabled = 0x0,
            DmaRisingEdge = 0x1,
            DmaFallingEdge = 0x2,
            DmaEitherEdge = 0x3,
            LogicZero = 0x8,
            RisingEdge = 0x9,
            FallingEdge = 0xA,
            EitherEdge = 0xB,
            LogicOne = 0xC
        ],
        /// Interrupt status flag
        ISF OFFSET(24) NUMBITS(1) []
    ],
    pub GPC [
        /// Global pin write data
        GPWD OFFSET(0) NUMBITS(16) [],
        /// Global pin write enable
        GPWE OFFSET(16) NUMBITS(16) []
    ],
    pub GIC [
        /// Global interrupt write enable
        GIWE OFFSET(0) NUMBITS(16) [],
        /// Global interrupt write data
        GIWD OFFSET(16) NUMBITS(16) []
    ],
    pub DFCR [
        /// Clock source: bus clock or LPO
        CS OFFSET(0) NUMBITS(1) [
            BusClock = 0,
            Lpo = 1
        ]
    ],
    pub DFWR [
        FILT OFFSET(0) NUMBITS(5) []
    ]
];

pub const PORTA_BASE_ADDR: usize = 0x4004_9000;
pub const PORTB_BASE_ADDR: usize = 0x4004_A000;
pub const PORTC_BASE_ADDR: usize = 0x4004_B000;
pub const PORTD_BASE_ADDR: usize = 0x4004_C000;
pub const PORTE_BASE_ADDR: usize = 0x4004_D000;

pub const PORTA_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(PORTA_BASE_ADDR as *const PortRegisters) };
pub const PORTB_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(PORTB_BASE_ADDR as *const PortRegisters) };
pub const PORTC_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(PORTC_BASE_ADDR as *const PortRegisters) };
pub const PORTD_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(PORTD_BASE_ADDR as *const PortRegisters) };
pub const PORTE_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(PORTE_BASE_ADDR as *const PortRegisters) };

pub const PORT_BASE_ADDRS: [usize; PORT_INSTANCE_COUNT] = [
    PORTA_BASE_ADDR,
    PORTB_BASE_ADDR,
    PORTC_BASE_ADDR,
    PORTD_BASE_ADDR,
    PORTE_BASE_ADDR,
];
pub const PORT_BASE_PTRS: [StaticRef<PortRegisters>; PORT_INSTANCE_COUNT] =
    [PORTA_BASE, PORTB_BASE, PORTC_BASE, PORTD_BASE, PORTE_BASE];

// All five ports share one interrupt line.
pub const PORT_IRQS: [u32; PORT_INSTANCE_COUNT] = [interrupts::PORT; PORT_INSTANCE_COUNT];

/// One of the five pin ports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortId {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
}

impl PortId {
    pub const ALL: [PortId; PORT_INSTANCE_COUNT] =
        [PortId::A, PortId::B, PortId::C, PortId::D, PortId::E];

    /// Pin control block of this port.
    pub fn port(self) -> StaticRef<PortRegisters> {
        PORT_BASE_PTRS[self as usize]
    }

    /// GPIO data block of this port.
    pub fn gpio(self) -> StaticRef<GpioRegisters> {
        gpio::GPIO_BASE_PTRS[self as usize]
    }
}

/// `(GPCLR, GPCHR)` values that write `pcr_low` into the low half-word of
/// every PCR selected by `pins`.
pub fn global_pin_control(pins: u32, pcr_low: u16) -> (u32, u32) {
    let data = GPC::GPWD.val(u32::from(pcr_low));
    let low = u32::from(data + GPC::GPWE.val(pins & 0xFFFF));
    let high = u32::from(data + GPC::GPWE.val(pins >> 16));
    (low, high)
}

/// `(GICLR, GICHR)` values that write `pcr_high` into the upper half-word
/// (the interrupt configuration) of every PCR selected by `pins`.
pub fn global_interrupt_control(pins: u32, pcr_high: u16) -> (u32, u32) {
    let data = GIC::GIWD.val(u32::from(pcr_high));
    let low = u32::from(data + GIC::GIWE.val(pins & 0xFFFF));
    let high = u32::from(data + GIC::GIWE.val(pins >> 16));
    (low, high)
}

/// Iterator over the pin numbers flagged in an `ISFR` value.
pub struct PinOffsets(pub u32);

impl Iterator for PinOffsets {
    type Item = u32;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 != 0 {
            let offset = self.0.trailing_zeros();
            self.0 &= self.0 - 1;
            Some(offset)
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let popcnt = self.0.count_ones() as usize;
        (popcnt, Some(popcnt))
    }
}

impl ExactSizeIterator for PinOffsets {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use std::collections::HashSet;

    #[test]
    fn pin_control_layout() {
        assert_eq!(core::mem::offset_of!(PortRegisters, gpclr), 0x80);
        assert_eq!(core::mem::offset_of!(PortRegisters, isfr), 0xA0);
        assert_eq!(core::mem::offset_of!(PortRegisters, dfwr), 0xC8);
        assert_eq!(core::mem::size_of::<PortRegisters>(), 0xCC);
        assert_field!(PCR::MUX, 8, 3);
        assert_field!(PCR::IRQC, 16, 4);
        assert_field!(PCR::ISF, 24, 1);
        assert_field!(GPC::GPWE, 16, 16);
        assert_field!(GIC::GIWD, 16, 16);
    }

    #[test]
    fn global_control_splits_pin_mask() {
        let pcr = u32::from(PCR::MUX::Gpio + PCR::PE::SET) as u16;
        // Pins 0, 1 and 17
        let (low, high) = global_pin_control(0x0002_0003, pcr);
        assert_eq!(low, 0x0003_0102);
        assert_eq!(high, 0x0002_0102);

        let (low, high) = global_interrupt_control(0x8000_0000, 0x0009);
        assert_eq!(low, 0x0009_0000);
        assert_eq!(high, 0x0009_8000);
    }

    #[test]
    fn port_ids_match_tables() {
        for id in PortId::ALL {
            assert_eq!(id.port().address(), PORT_BASE_ADDRS[id as usize]);
            assert_eq!(id.gpio().address(), gpio::GPIO_BASE_ADDRS[id as usize]);
        }
    }

    #[test]
    fn pin_offsets() {
        fn check(offsets: PinOffsets, expected: impl Iterator<Item = u32> + Clone) {
            assert_eq!(offsets.len(), expected.clone().count());
            let expected: HashSet<_> = expected.collect();
            let actual: HashSet<_> = offsets.collect();
            assert_eq!(expected, actual);
        }

        assert_eq!(PinOffsets(0).next(), None);
        check(PinOffsets(u32::MAX), 0..32);
        check(PinOffsets(0x5555_5555), (0..32).step_by(2));
        check(PinOffsets(0xAAAA_AAAA), (0..32).skip(1).step_by(2));
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            PCR [PS, PE, PFE, DSE, MUX, LK, IRQC, ISF],
            GPC [GPWD, GPWE],
            GIC [GIWE, GIWD],
            DFCR [CS],
            DFWR [FILT],
        );
    }
}
