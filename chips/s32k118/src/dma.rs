// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Enhanced Direct Memory Access (eDMA) controller.
//!
//! Four channels, each described by a 32-byte transfer control descriptor
//! (TCD). The channel priority registers are stored in reverse order within
//! each group of four; [`ChannelPriorityRegisters`] hides that so they can be
//! indexed by channel number.

use core::ops::Index;

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const DMA_INSTANCE_COUNT: usize = 1;
pub const DMA_CHANNELS: usize = 4;
/// Width of the channel number in a virtual channel index.
pub const DMA_CH_WIDTH: u32 = 4;

/// Index of the `DCHPRI` byte holding the priority of `channel`.
///
/// Pattern follows 3, 2, 1, 0 for the four channels.
pub const fn dchpri_index(channel: usize) -> usize {
    channel ^ 3
}

/// Split a virtual channel number into `(instance, channel)`.
pub const fn virtual_channel(vch: u32) -> (u32, u32) {
    (vch >> DMA_CH_WIDTH, vch & (DMA_CHANNELS as u32 - 1))
}

/// Channel priority registers, indexed by channel.
#[repr(transparent)]
pub struct ChannelPriorityRegisters([ReadWrite<u8, DCHPRI::Register>; DMA_CHANNELS]);

impl Index<usize> for ChannelPriorityRegisters {
    type Output = ReadWrite<u8, DCHPRI::Register>;
    fn index(&self, channel: usize) -> &ReadWrite<u8, DCHPRI::Register> {
        &self.0[dchpri_index(channel)]
    }
}

register_structs! {
    /// eDMA registers.
    pub DmaRegisters {
        /// Control Register
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Error Status Register
        (0x004 => pub es: ReadOnly<u32, ES::Register>),
        (0x008 => _reserved0),
        /// Enable Request Register
        (0x00C => pub erq: ReadWrite<u32, CHANNELS::Register>),
        (0x010 => _reserved1),
        /// Enable Error Interrupt Register
        (0x014 => pub eei: ReadWrite<u32, CHANNELS::Register>),
        /// Clear Enable Error Interrupt Register
        (0x018 => pub ceei: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Set Enable Error Interrupt Register
        (0x019 => pub seei: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Clear Enable Request Register
        (0x01A => pub cerq: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Set Enable Request Register
        (0x01B => pub serq: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Clear DONE Status Bit Register
        (0x01C => pub cdne: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Set START Bit Register
        (0x01D => pub ssrt: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Clear Error Register
        (0x01E => pub cerr: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Clear Interrupt Request Register
        (0x01F => pub cint: WriteOnly<u8, CHANNEL_OP::Register>),
        (0x020 => _reserved2),
        /// Interrupt Request Register
        (0x024 => pub int: ReadWrite<u32, CHANNELS::Register>),
        (0x028 => _reserved3),
        /// Error Register
        (0x02C => pub err: ReadWrite<u32, CHANNELS::Register>),
        (0x030 => _reserved4),
        /// Hardware Request Status Register
        (0x034 => pub hrs: ReadOnly<u32, CHANNELS::Register>),
        (0x038 => _reserved5),
        /// Enable Asynchronous Request in Stop Register
        (0x044 => pub ears: ReadWrite<u32, CHANNELS::Register>),
        (0x048 => _reserved6),
        /// Channel Priority Registers
        (0x100 => pub dchpri: ChannelPriorityRegisters),
        (0x104 => _reserved7),
        /// Transfer Control Descriptors
        (0x1000 => pub tcd: [TransferControlDescriptor; DMA_CHANNELS]),
        (0x1080 => @END),
    },

    pub TransferControlDescriptor {
        /// Source Address
        (0x00 => pub saddr: ReadWrite<u32>),
        /// Signed Source Address Offset
        (0x04 => pub soff: ReadWrite<u16>),
        /// Transfer Attributes
        (0x06 => pub attr: ReadWrite<u16, ATTR::Register>),
        /// Minor Byte Count, layout depends on CR[EMLM]
        (0x08 => pub nbytes: ReadWrite<u32, NBYTES::Register>),
        /// Last Source Address Adjustment
        (0x0C => pub slast: ReadWrite<u32>),
        /// Destination Address
        (0x10 => pub daddr: ReadWrite<u32>),
        /// Signed Destination Address Offset
        (0x14 => pub doff: ReadWrite<u16>),
        /// Current Minor Loop Link, Major Loop Count
        (0x16 => pub citer: ReadWrite<u16, ITER::Register>),
        /// Last Destination Address Adjustment/Scatter Gather Address
        (0x18 => pub dlastsga: ReadWrite<u32>),
        /// Control and Status
        (0x1C => pub csr: ReadWrite<u16, CSR::Register>),
        /// Beginning Minor Loop Link, Major Loop Count
        (0x1E => pub biter: ReadWrite<u16, ITER::Register>),
        (0x20 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Enable debug
        EDBG OFFSET(1) NUMBITS(1) [],
        /// Enable round robin channel arbitration
        ERCA OFFSET(2) NUMBITS(1) [],
        /// Halt on error
        HOE OFFSET(4) NUMBITS(1) [],
        /// Halt DMA operations
        HALT OFFSET(5) NUMBITS(1) [],
        /// Continuous link mode
        CLM OFFSET(6) NUMBITS(1) [],
        /// Enable minor loop mapping
        EMLM OFFSET(7) NUMBITS(1) [],
        /// Error cancel transfer
        ECX OFFSET(16) NUMBITS(1) [],
        /// Cancel transfer
        CX OFFSET(17) NUMBITS(1) [],
        /// DMA active status
        ACTIVE OFFSET(31) NUMBITS(1) []
    ],
    pub ES [
        DBE OFFSET(0) NUMBITS(1) [],
        SBE OFFSET(1) NUMBITS(1) [],
        SGE OFFSET(2) NUMBITS(1) [],
        NCE OFFSET(3) NUMBITS(1) [],
        DOE OFFSET(4) NUMBITS(1) [],
        DAE OFFSET(5) NUMBITS(1) [],
        SOE OFFSET(6) NUMBITS(1) [],
        SAE OFFSET(7) NUMBITS(1) [],
        /// Channel number of the last recorded error
        ERRCHN OFFSET(8) NUMBITS(2) [],
        /// Channel priority error
        CPE OFFSET(14) NUMBITS(1) [],
        ECX OFFSET(16) NUMBITS(1) [],
        /// At least one ERR bit is set
        VLD OFFSET(31) NUMBITS(1) []
    ],
    // ERQ, EEI, INT, ERR, HRS and EARS: one bit per channel
    pub CHANNELS [
        CH0 OFFSET(0) NUMBITS(1) [],
        CH1 OFFSET(1) NUMBITS(1) [],
        CH2 OFFSET(2) NUMBITS(1) [],
        CH3 OFFSET(3) NUMBITS(1) []
    ],
    // One register holds every layout of the minor loop byte count. Which
    // fields apply depends on CR[EMLM] and the offset enables.
    pub NBYTES [
        /// Minor loop byte count, minor loop mapping disabled
        MLNO OFFSET(0) NUMBITS(32) [],
        /// Minor loop byte count, mapping enabled and offsets disabled
        MLOFFNO OFFSET(0) NUMBITS(30) [],
        /// Minor loop byte count, mapping and an offset enabled
        MLOFFYES OFFSET(0) NUMBITS(10) [],
        /// Signed minor loop offset
        MLOFF OFFSET(10) NUMBITS(20) [],
        /// Destination minor loop offset enable
        DMLOE OFFSET(30) NUMBITS(1) [],
        /// Source minor loop offset enable
        SMLOE OFFSET(31) NUMBITS(1) []
    ]
];

register_bitfields![u16,
    pub ATTR [
        /// Destination data transfer size
        DSIZE OFFSET(0) NUMBITS(3) [
            Bits8 = 0,
            Bits16 = 1,
            Bits32 = 2,
            Bytes16 = 4
        ],
        /// Destination address modulo
        DMOD OFFSET(3) NUMBITS(5) [],
        /// Source data transfer size
        SSIZE OFFSET(8) NUMBITS(3) [
            Bits8 = 0,
            Bits16 = 1,
            Bits32 = 2,
            Bytes16 = 4
        ],
        /// Source address modulo
        SMOD OFFSET(11) NUMBITS(5) []
    ],
    // CITER and BITER, with and without channel linking
    pub ITER [
        /// Major iteration count, linking disabled
        CITER OFFSET(0) NUMBITS(15) [],
        /// Major iteration count, linking enabled
        CITER_LE OFFSET(0) NUMBITS(9) [],
        /// Minor loop link channel number
        LINKCH OFFSET(9) NUMBITS(2) [],
        /// Enable channel-to-channel linking on minor loop complete
        ELINK OFFSET(15) NUMBITS(1) []
    ],
    pub CSR [
        /// Channel start
        START OFFSET(0) NUMBITS(1) [],
        /// Interrupt when major count is complete
        INTMAJOR OFFSET(1) NUMBITS(1) [],
        /// Interrupt when major count is half complete
        INTHALF OFFSET(2) NUMBITS(1) [],
        /// Disable request when the major loop completes
        DREQ OFFSET(3) NUMBITS(1) [],
        /// Enable scatter/gather
        ESG OFFSET(4) NUMBITS(1) [],
        /// Enable channel-to-channel linking on major loop complete
        MAJORELINK OFFSET(5) NUMBITS(1) [],
        ACTIVE OFFSET(6) NUMBITS(1) [],
        DONE OFFSET(7) NUMBITS(1) [],
        /// Major loop link channel number
        MAJORLINKCH OFFSET(8) NUMBITS(2) [],
        /// Bandwidth control
        BWC OFFSET(14) NUMBITS(2) [
            NoStalls = 0b00,
            FourCycles = 0b10,
            EightCycles = 0b11
        ]
    ]
];

register_bitfields![u8,
    pub DCHPRI [
        /// Channel arbitration priority
        CHPRI OFFSET(0) NUMBITS(2) [],
        /// Disable preempt ability
        DPA OFFSET(6) NUMBITS(1) [],
        /// Enable channel preemption
        ECP OFFSET(7) NUMBITS(1) []
    ],
    // CEEI, SEEI, CERQ, SERQ, CDNE, SSRT, CERR and CINT
    pub CHANNEL_OP [
        /// Channel to act on
        CHANNEL OFFSET(0) NUMBITS(2) [],
        /// Act on all channels
        ALL OFFSET(6) NUMBITS(1) [],
        /// No operation, ignore the other bits
        NOP OFFSET(7) NUMBITS(1) []
    ]
];

pub const DMA_BASE_ADDR: usize = 0x4000_8000;

pub const DMA_BASE: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new(DMA_BASE_ADDR as *const DmaRegisters) };

pub const DMA_BASE_ADDRS: [usize; DMA_INSTANCE_COUNT] = [DMA_BASE_ADDR];
pub const DMA_BASE_PTRS: [StaticRef<DmaRegisters>; DMA_INSTANCE_COUNT] = [DMA_BASE];

pub const DMA_CHN_IRQS: [[u32; DMA_CHANNELS]; DMA_INSTANCE_COUNT] = [[
    interrupts::DMA0,
    interrupts::DMA1,
    interrupts::DMA2,
    interrupts::DMA3,
]];
pub const DMA_ERROR_IRQS: [u32; DMA_INSTANCE_COUNT] = [interrupts::DMA_ERROR];
