// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Analog comparator (CMP) with 8-bit DAC and round-robin channel scan.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const CMP_INSTANCE_COUNT: usize = 1;

register_structs! {
    pub CmpRegisters {
        // CMP Control Register 0
        (0x000 => pub c0: ReadWrite<u32, C0::Register>),
        // CMP Control Register 1
        (0x004 => pub c1: ReadWrite<u32, C1::Register>),
        // CMP Control Register 2
        (0x008 => pub c2: ReadWrite<u32, C2::Register>),
        (0x00C => @END),
    }
}

register_bitfields![u32,
    pub C0 [
        /// Comparator hysteresis control
        HYSTCTR OFFSET(0) NUMBITS(2) [
            Level0 = 0,
            Level1 = 1,
            Level2 = 2,
            Level3 = 3
        ],
        /// Comparator hard block offset control
        HBOFFSET OFFSET(2) NUMBITS(1) [],
        /// Filter sample count
        FILTER_CNT OFFSET(4) NUMBITS(3) [],
        /// Comparator module enable
        EN OFFSET(8) NUMBITS(1) [],
        /// Comparator output pin enable
        OPE OFFSET(9) NUMBITS(1) [],
        /// Comparator output select
        COS OFFSET(10) NUMBITS(1) [],
        /// Comparator invert
        INVT OFFSET(11) NUMBITS(1) [],
        /// Power mode select
        PMODE OFFSET(12) NUMBITS(1) [
            LowSpeed = 0,
            HighSpeed = 1
        ],
        /// Windowing enable
        WE OFFSET(14) NUMBITS(1) [],
        /// Sample enable
        SE OFFSET(15) NUMBITS(1) [],
        /// Filter sample period
        FPR OFFSET(16) NUMBITS(8) [],
        /// Analog comparator output
        COUT OFFSET(24) NUMBITS(1) [],
        /// Analog comparator flag falling
        CFF OFFSET(25) NUMBITS(1) [],
        /// Analog comparator flag rising
        CFR OFFSET(26) NUMBITS(1) [],
        /// Comparator interrupt enable falling
        IEF OFFSET(27) NUMBITS(1) [],
        /// Comparator interrupt enable rising
        IER OFFSET(28) NUMBITS(1) [],
        /// DMA enable
        DMAEN OFFSET(30) NUMBITS(1) []
    ],
    pub C1 [
        /// DAC output voltage select
        VOSEL OFFSET(0) NUMBITS(8) [],
        /// Minus input MUX control
        MSEL OFFSET(8) NUMBITS(3) [],
        /// Plus input MUX control
        PSEL OFFSET(11) NUMBITS(3) [],
        /// Supply voltage reference source select
        VRSEL OFFSET(14) NUMBITS(1) [],
        /// DAC enable
        DACEN OFFSET(15) NUMBITS(1) [],
        /// Round-robin channel enables
        CHN0 OFFSET(16) NUMBITS(1) [],
        CHN1 OFFSET(17) NUMBITS(1) [],
        CHN2 OFFSET(18) NUMBITS(1) [],
        CHN3 OFFSET(19) NUMBITS(1) [],
        CHN4 OFFSET(20) NUMBITS(1) [],
        CHN5 OFFSET(21) NUMBITS(1) [],
        CHN6 OFFSET(22) NUMBITS(1) [],
        CHN7 OFFSET(23) NUMBITS(1) [],
        /// Selection of the input to the negative port of the comparator
        INNSEL OFFSET(24) NUMBITS(2) [
            Dac = 0,
            Mux = 1
        ],
        /// Selection of the input to the positive port of the comparator
        INPSEL OFFSET(27) NUMBITS(2) [
            Dac = 0,
            Mux = 1
        ]
    ],
    pub C2 [
        /// Pre-set state of channel comparison outputs
        ACON OFFSET(0) NUMBITS(8) [],
        /// Comparator and DAC initialization delay modulus
        INITMOD OFFSET(8) NUMBITS(6) [],
        /// Number of sample clocks
        NSAM OFFSET(14) NUMBITS(2) [],
        /// Channel input changed flags
        CH0F OFFSET(16) NUMBITS(1) [],
        CH1F OFFSET(17) NUMBITS(1) [],
        CH2F OFFSET(18) NUMBITS(1) [],
        CH3F OFFSET(19) NUMBITS(1) [],
        CH4F OFFSET(20) NUMBITS(1) [],
        CH5F OFFSET(21) NUMBITS(1) [],
        CH6F OFFSET(22) NUMBITS(1) [],
        CH7F OFFSET(23) NUMBITS(1) [],
        /// Fixed MUX channel
        FXMXCH OFFSET(25) NUMBITS(3) [],
        /// Fixed MUX port
        FXMP OFFSET(29) NUMBITS(1) [
            PlusFixed = 0,
            MinusFixed = 1
        ],
        /// Round-robin interrupt enable
        RRIE OFFSET(30) NUMBITS(1) [],
        /// Round-robin enable
        RRE OFFSET(31) NUMBITS(1) []
    ]
];

pub const CMP0_BASE_ADDR: usize = 0x4007_3000;

pub const CMP0_BASE: StaticRef<CmpRegisters> =
    unsafe { StaticRef::new(CMP0_BASE_ADDR as *const CmpRegisters) };

pub const CMP_BASE_ADDRS: [usize; CMP_INSTANCE_COUNT] = [CMP0_BASE_ADDR];
pub const CMP_BASE_PTRS: [StaticRef<CmpRegisters>; CMP_INSTANCE_COUNT] = [CMP0_BASE];
pub const CMP_IRQS: [u32; CMP_INSTANCE_COUNT] = [interrupts::CMP0];
