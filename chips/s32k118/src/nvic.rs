// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Cortex-M0+ Nested Vectored Interrupt Controller (NVIC).
//!
//! ARMv6-M implements a single word of enable/pending bits and eight
//! priority registers, one byte per interrupt. Only the top
//! [`PRIO_BITS`] bits of each priority byte are implemented.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const NVIC_INSTANCE_COUNT: usize = 1;
pub const NVIC_IP_COUNT: usize = 8;

/// Number of implemented priority bits.
pub const PRIO_BITS: u32 = 2;

register_structs! {
    pub NvicRegisters {
        /// Interrupt Set Enable Register
        (0x000 => pub iser: ReadWrite<u32, NvicSetClear::Register>),
        (0x004 => _reserved0),
        /// Interrupt Clear Enable Register
        (0x080 => pub icer: ReadWrite<u32, NvicSetClear::Register>),
        (0x084 => _reserved1),
        /// Interrupt Set Pending Register
        (0x100 => pub ispr: ReadWrite<u32, NvicSetClear::Register>),
        (0x104 => _reserved2),
        /// Interrupt Clear Pending Register
        (0x180 => pub icpr: ReadWrite<u32, NvicSetClear::Register>),
        (0x184 => _reserved3),
        /// Interrupt Priority Registers
        (0x300 => pub ipr: [ReadWrite<u32, NvicInterruptPriority::Register>; NVIC_IP_COUNT]),
        (0x320 => @END),
    }
}

register_bitfields![u32,
    pub NvicSetClear [
        /// Bit n controls interrupt n. Bits for unimplemented interrupts are
        /// RAZ/WI.
        BITS OFFSET(0) NUMBITS(32)
    ],

    pub NvicInterruptPriority [
        PRI_0 OFFSET(0) NUMBITS(8),
        PRI_1 OFFSET(8) NUMBITS(8),
        PRI_2 OFFSET(16) NUMBITS(8),
        PRI_3 OFFSET(24) NUMBITS(8)
    ]
];

/// Priority register holding interrupt `irq`.
pub const fn ipr_index(irq: u32) -> usize {
    (irq / 4) as usize
}

/// Bit position of the priority byte of `irq` within its priority register.
pub const fn ipr_byte_shift(irq: u32) -> usize {
    (irq % 4) as usize * 8
}

/// Lowest urgency level the priority bits can express.
pub const LOWEST_PRIORITY: u8 = (1 << PRIO_BITS) - 1;

/// Priority byte for a logical priority level (0 is the most urgent).
/// Levels past [`LOWEST_PRIORITY`] saturate to it.
pub const fn encode_priority(priority: u8) -> u8 {
    let level = if priority > LOWEST_PRIORITY {
        LOWEST_PRIORITY
    } else {
        priority
    };
    level << (8 - PRIO_BITS)
}

pub const NVIC_BASE_ADDR: usize = 0xE000_E100;

pub const NVIC_BASE: StaticRef<NvicRegisters> =
    unsafe { StaticRef::new(NVIC_BASE_ADDR as *const NvicRegisters) };

pub const NVIC_BASE_ADDRS: [usize; NVIC_INSTANCE_COUNT] = [NVIC_BASE_ADDR];
pub const NVIC_BASE_PTRS: [StaticRef<NvicRegisters>; NVIC_INSTANCE_COUNT] = [NVIC_BASE];
