// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! System Clock Generator (SCG).
//!
//! Three clock sources on this part: the system oscillator (SOSC), the slow
//! internal RC (SIRC, 2 or 8 MHz) and the fast internal RC (FIRC, 48 MHz).
//! There is no PLL. Each source has two asynchronous dividers feeding the
//! PCC.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const SCG_INSTANCE_COUNT: usize = 1;

register_structs! {
    pub ScgRegisters {
        /// Version ID Register
        (0x000 => pub verid: ReadOnly<u32>),
        /// Parameter Register
        (0x004 => pub param: ReadOnly<u32, PARAM::Register>),
        (0x008 => _reserved0),
        /// Clock Status Register
        (0x010 => pub csr: ReadOnly<u32, CLOCK_CONFIG::Register>),
        /// Run Clock Control Register
        (0x014 => pub rccr: ReadWrite<u32, CLOCK_CONFIG::Register>),
        /// VLPR Clock Control Register
        (0x018 => pub vccr: ReadWrite<u32, CLOCK_CONFIG::Register>),
        (0x01C => _reserved1),
        /// SCG CLKOUT Configuration Register
        (0x020 => pub clkoutcnfg: ReadWrite<u32, CLKOUTCNFG::Register>),
        (0x024 => _reserved2),
        /// System OSC Control Status Register
        (0x100 => pub sosccsr: ReadWrite<u32, SOSCCSR::Register>),
        /// System OSC Divide Register
        (0x104 => pub soscdiv: ReadWrite<u32, ASYNC_DIV::Register>),
        /// System Oscillator Configuration Register
        (0x108 => pub sosccfg: ReadWrite<u32, SOSCCFG::Register>),
        (0x10C => _reserved3),
        /// Slow IRC Control Status Register
        (0x200 => pub sirccsr: ReadWrite<u32, SIRCCSR::Register>),
        /// Slow IRC Divide Register
        (0x204 => pub sircdiv: ReadWrite<u32, ASYNC_DIV::Register>),
        /// Slow IRC Configuration Register
        (0x208 => pub sirccfg: ReadWrite<u32, SIRCCFG::Register>),
        (0x20C => _reserved4),
        /// Fast IRC Control Status Register
        (0x300 => pub firccsr: ReadWrite<u32, FIRCCSR::Register>),
        /// Fast IRC Divide Register
        (0x304 => pub fircdiv: ReadWrite<u32, ASYNC_DIV::Register>),
        /// Fast IRC Configuration Register
        (0x308 => pub firccfg: ReadWrite<u32, FIRCCFG::Register>),
        (0x30C => @END),
    }
}

register_bitfields![u32,
    pub PARAM [
        /// Clock presence, one bit per clock source
        CLKPRES OFFSET(0) NUMBITS(8) [],
        /// Divider presence
        DIVPRES OFFSET(27) NUMBITS(5) []
    ],
    // Layout shared by CSR, RCCR and VCCR.
    pub CLOCK_CONFIG [
        /// Slow clock divide ratio, divide by DIVSLOW + 1
        DIVSLOW OFFSET(0) NUMBITS(4) [],
        /// Bus clock divide ratio, divide by DIVBUS + 1
        DIVBUS OFFSET(4) NUMBITS(4) [],
        /// Core clock divide ratio, divide by DIVCORE + 1
        DIVCORE OFFSET(16) NUMBITS(4) [],
        /// System clock source
        SCS OFFSET(24) NUMBITS(4) [
            Sosc = 1,
            Sirc = 2,
            Firc = 3
        ]
    ],
    pub CLKOUTCNFG [
        CLKOUTSEL OFFSET(24) NUMBITS(4) [
            SlowClock = 0,
            Sosc = 1,
            Sirc = 2,
            Firc = 3
        ]
    ],
    pub SOSCCSR [
        /// System OSC enable
        SOSCEN OFFSET(0) NUMBITS(1) [],
        /// System OSC clock monitor enable
        SOSCCM OFFSET(16) NUMBITS(1) [],
        /// System OSC clock monitor reset enable
        SOSCCMRE OFFSET(17) NUMBITS(1) [],
        /// Lock register
        LK OFFSET(23) NUMBITS(1) [],
        /// System OSC valid
        SOSCVLD OFFSET(24) NUMBITS(1) [],
        /// System OSC selected
        SOSCSEL OFFSET(25) NUMBITS(1) [],
        /// System OSC clock error
        SOSCERR OFFSET(26) NUMBITS(1) []
    ],
    // Layout shared by SOSCDIV, SIRCDIV and FIRCDIV.
    pub ASYNC_DIV [
        DIV1 OFFSET(0) NUMBITS(3) [
            Disabled = 0,
            DivideBy1 = 1,
            DivideBy2 = 2,
            DivideBy4 = 3,
            DivideBy8 = 4,
            DivideBy16 = 5,
            DivideBy32 = 6,
            DivideBy64 = 7
        ],
        DIV2 OFFSET(8) NUMBITS(3) [
            Disabled = 0,
            DivideBy1 = 1,
            DivideBy2 = 2,
            DivideBy4 = 3,
            DivideBy8 = 4,
            DivideBy16 = 5,
            DivideBy32 = 6,
            DivideBy64 = 7
        ]
    ],
    pub SOSCCFG [
        /// External reference select
        EREFS OFFSET(2) NUMBITS(1) [
            External = 0,
            Crystal = 1
        ],
        /// High gain oscillator select
        HGO OFFSET(3) NUMBITS(1) [],
        /// System OSC range select
        RANGE OFFSET(4) NUMBITS(2) [
            Medium = 2,
            High = 3
        ]
    ],
    pub SIRCCSR [
        SIRCEN OFFSET(0) NUMBITS(1) [],
        /// Enabled in stop modes
        SIRCSTEN OFFSET(1) NUMBITS(1) [],
        /// Enabled in VLP modes
        SIRCLPEN OFFSET(2) NUMBITS(1) [],
        LK OFFSET(23) NUMBITS(1) [],
        SIRCVLD OFFSET(24) NUMBITS(1) [],
        SIRCSEL OFFSET(25) NUMBITS(1) []
    ],
    pub SIRCCFG [
        RANGE OFFSET(0) NUMBITS(1) [
            Low2MHz = 0,
            High8MHz = 1
        ]
    ],
    pub FIRCCSR [
        FIRCEN OFFSET(0) NUMBITS(1) [],
        /// FIRC regulator disable
        FIRCREGOFF OFFSET(3) NUMBITS(1) [],
        LK OFFSET(23) NUMBITS(1) [],
        FIRCVLD OFFSET(24) NUMBITS(1) [],
        FIRCSEL OFFSET(25) NUMBITS(1) [],
        FIRCERR OFFSET(26) NUMBITS(1) []
    ],
    pub FIRCCFG [
        RANGE OFFSET(0) NUMBITS(2) [
            Trimmed48MHz = 0
        ]
    ]
];

/// Division factor selected by an asynchronous `DIV1`/`DIV2` field value,
/// or `None` when the output is disabled.
pub const fn async_divider(div: u32) -> Option<u32> {
    match div {
        1..=7 => Some(1 << (div - 1)),
        _ => None,
    }
}

pub const SCG_BASE_ADDR: usize = 0x4006_4000;

pub const SCG_BASE: StaticRef<ScgRegisters> =
    unsafe { StaticRef::new(SCG_BASE_ADDR as *const ScgRegisters) };

pub const SCG_BASE_ADDRS: [usize; SCG_INSTANCE_COUNT] = [SCG_BASE_ADDR];
pub const SCG_BASE_PTRS: [StaticRef<ScgRegisters>; SCG_INSTANCE_COUNT] = [SCG_BASE];
pub const SCG_IRQS: [u32; SCG_INSTANCE_COUNT] = [interrupts::SCG_CMU_LVD_LVWSCG];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::offset_of;

    #[test]
    fn source_blocks_are_page_aligned() {
        assert_eq!(offset_of!(ScgRegisters, csr), 0x10);
        assert_eq!(offset_of!(ScgRegisters, clkoutcnfg), 0x20);
        assert_eq!(offset_of!(ScgRegisters, sosccsr), 0x100);
        assert_eq!(offset_of!(ScgRegisters, sirccfg), 0x208);
        assert_eq!(offset_of!(ScgRegisters, firccfg), 0x308);
        assert_eq!(core::mem::size_of::<ScgRegisters>(), 0x30C);
    }

    #[test]
    fn fields() {
        assert_field!(CLOCK_CONFIG::DIVCORE, 16, 4);
        assert_field!(CLOCK_CONFIG::SCS, 24, 4);
        assert_field!(ASYNC_DIV::DIV2, 8, 3);
        assert_field!(SOSCCFG::RANGE, 4, 2);
        assert_field!(FIRCCSR::FIRCERR, 26, 1);
    }

    #[test]
    fn async_dividers() {
        assert_eq!(async_divider(0), None);
        assert_eq!(async_divider(1), Some(1));
        assert_eq!(async_divider(4), Some(8));
        assert_eq!(async_divider(7), Some(64));
        assert_eq!(async_divider(8), None);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            PARAM [CLKPRES, DIVPRES],
            CLOCK_CONFIG [DIVSLOW, DIVBUS, DIVCORE, SCS],
            CLKOUTCNFG [CLKOUTSEL],
            SOSCCSR [SOSCEN, SOSCCM, SOSCCMRE, LK, SOSCVLD, SOSCSEL, SOSCERR],
            ASYNC_DIV [DIV1, DIV2],
            SOSCCFG [EREFS, HGO, RANGE],
            SIRCCSR [SIRCEN, SIRCSTEN, SIRCLPEN, LK, SIRCVLD, SIRCSEL],
            SIRCCFG [RANGE],
            FIRCCSR [FIRCEN, FIRCREGOFF, LK, FIRCVLD, FIRCSEL, FIRCERR],
            FIRCCFG [RANGE],
        );
    }
}
