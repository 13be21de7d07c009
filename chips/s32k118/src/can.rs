// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! FlexCAN controller with CAN FD and pretended networking.
//!
//! The message buffers live in a 512 byte RAM exposed as `RAMn` words. The
//! size of a buffer depends on the payload size selected in `FDCTRL.MBDSR0`,
//! see [`message_buffer_count`] and [`message_buffer_word`].

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const CAN_INSTANCE_COUNT: usize = 1;
pub const CAN_RAMN_COUNT: usize = 128;
pub const CAN_RXIMR_COUNT: usize = 32;
pub const CAN_WMB_COUNT: usize = 4;

/// Largest message buffer count, reached with 8 byte payloads.
pub const CAN_MAX_MB_NUM: usize = 32;

register_structs! {
    pub CanRegisters {
        // Module Configuration Register
        (0x000 => pub mcr: ReadWrite<u32, MCR::Register>),
        // Control 1 register
        (0x004 => pub ctrl1: ReadWrite<u32, CTRL1::Register>),
        // Free Running Timer
        (0x008 => pub timer: ReadWrite<u32, TIMER::Register>),
        (0x00C => _reserved0),
        // Rx Mailboxes Global Mask Register
        (0x010 => pub rxmgmask: ReadWrite<u32, RXMGMASK::Register>),
        // Rx 14 Mask register
        (0x014 => pub rx14mask: ReadWrite<u32, RX14MASK::Register>),
        // Rx 15 Mask register
        (0x018 => pub rx15mask: ReadWrite<u32, RX15MASK::Register>),
        // Error Counter
        (0x01C => pub ecr: ReadWrite<u32, ECR::Register>),
        // Error and Status 1 register
        (0x020 => pub esr1: ReadWrite<u32, ESR1::Register>),
        (0x024 => _reserved1),
        // Interrupt Masks 1 register
        (0x028 => pub imask1: ReadWrite<u32, IMASK1::Register>),
        (0x02C => _reserved2),
        // Interrupt Flags 1 register
        (0x030 => pub iflag1: ReadWrite<u32, IFLAG1::Register>),
        // Control 2 register
        (0x034 => pub ctrl2: ReadWrite<u32, CTRL2::Register>),
        // Error and Status 2 register
        (0x038 => pub esr2: ReadOnly<u32, ESR2::Register>),
        (0x03C => _reserved3),
        // CRC Register
        (0x044 => pub crcr: ReadOnly<u32, CRCR::Register>),
        // Rx FIFO Global Mask register
        (0x048 => pub rxfgmask: ReadWrite<u32, RXFGMASK::Register>),
        // Rx FIFO Information Register
        (0x04C => pub rxfir: ReadOnly<u32, RXFIR::Register>),
        // CAN Bit Timing Register
        (0x050 => pub cbt: ReadWrite<u32, CBT::Register>),
        (0x054 => _reserved4),
        // Embedded RAM, message buffers
        (0x080 => pub ramn: [ReadWrite<u32, RAMN::Register>; CAN_RAMN_COUNT]),
        (0x280 => _reserved5),
        // Rx Individual Mask Registers
        (0x880 => pub rximr: [ReadWrite<u32, RXIMR::Register>; CAN_RXIMR_COUNT]),
        (0x900 => _reserved6),
        // Pretended Networking Control 1 Register
        (0xB00 => pub ctrl1_pn: ReadWrite<u32, CTRL1_PN::Register>),
        // Pretended Networking Control 2 Register
        (0xB04 => pub ctrl2_pn: ReadWrite<u32, CTRL2_PN::Register>),
        // Pretended Networking Wake Up Match Register
        (0xB08 => pub wu_mtc: ReadWrite<u32, WU_MTC::Register>),
        // Pretended Networking ID Filter 1 Register
        (0xB0C => pub flt_id1: ReadWrite<u32, FLT_ID1::Register>),
        // Pretended Networking DLC Filter Register
        (0xB10 => pub flt_dlc: ReadWrite<u32, FLT_DLC::Register>),
        // Pretended Networking Payload Low Filter 1 Register
        (0xB14 => pub pl1_lo: ReadWrite<u32, PAYLOAD_LO::Register>),
        // Pretended Networking Payload High Filter 1 Register
        (0xB18 => pub pl1_hi: ReadWrite<u32, PAYLOAD_HI::Register>),
        // Pretended Networking ID Filter 2 Register / ID Mask Register
        (0xB1C => pub flt_id2_idmask: ReadWrite<u32, FLT_ID2_IDMASK::Register>),
        // Pretended Networking Payload Low Filter 2 Register / Payload Low Mask
        (0xB20 => pub pl2_plmask_lo: ReadWrite<u32, PAYLOAD_LO::Register>),
        // Pretended Networking Payload High Filter 2 Register / Payload High Mask
        (0xB24 => pub pl2_plmask_hi: ReadWrite<u32, PAYLOAD_HI::Register>),
        (0xB28 => _reserved7),
        // Wake Up Message Buffers
        (0xB40 => pub wmb: [WakeupMessageBuffer; CAN_WMB_COUNT]),
        (0xB80 => _reserved8),
        // CAN FD Control Register
        (0xC00 => pub fdctrl: ReadWrite<u32, FDCTRL::Register>),
        // CAN FD Bit Timing Register
        (0xC04 => pub fdcbt: ReadWrite<u32, FDCBT::Register>),
        // CAN FD CRC Register
        (0xC08 => pub fdcrc: ReadOnly<u32, FDCRC::Register>),
        (0xC0C => @END),
    },

    pub WakeupMessageBuffer {
        // Wake Up Message Buffer Register for C/S
        (0x00 => pub cs: ReadOnly<u32, WMB_CS::Register>),
        // Wake Up Message Buffer Register for ID
        (0x04 => pub id: ReadOnly<u32, WMB_ID::Register>),
        // Wake Up Message Buffer Register for Data 0-3
        (0x08 => pub d03: ReadOnly<u32, PAYLOAD_LO::Register>),
        // Wake Up Message Buffer Register Data 4-7
        (0x0C => pub d47: ReadOnly<u32, PAYLOAD_HI::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub MCR [
        /// Number of the last message buffer
        MAXMB OFFSET(0) NUMBITS(7) [],
        /// ID acceptance mode
        IDAM OFFSET(8) NUMBITS(2) [
            FormatA = 0,
            FormatB = 1,
            FormatC = 2,
            FormatD = 3
        ],
        /// CAN FD operation enable
        FDEN OFFSET(11) NUMBITS(1) [],
        /// Abort enable
        AEN OFFSET(12) NUMBITS(1) [],
        /// Local priority enable
        LPRIOEN OFFSET(13) NUMBITS(1) [],
        /// Pretended networking enable
        PNET_EN OFFSET(14) NUMBITS(1) [],
        /// DMA enable
        DMA OFFSET(15) NUMBITS(1) [],
        /// Individual Rx masking and queue enable
        IRMQ OFFSET(16) NUMBITS(1) [],
        /// Self reception disable
        SRXDIS OFFSET(17) NUMBITS(1) [],
        /// Low-power mode acknowledge
        LPMACK OFFSET(20) NUMBITS(1) [],
        /// Warning interrupt enable
        WRNEN OFFSET(21) NUMBITS(1) [],
        /// Supervisor mode
        SUPV OFFSET(23) NUMBITS(1) [],
        /// Freeze mode acknowledge
        FRZACK OFFSET(24) NUMBITS(1) [],
        /// Soft reset
        SOFTRST OFFSET(25) NUMBITS(1) [],
        /// FlexCAN not ready
        NOTRDY OFFSET(27) NUMBITS(1) [],
        /// Halt FlexCAN
        HALT OFFSET(28) NUMBITS(1) [],
        /// Rx FIFO enable
        RFEN OFFSET(29) NUMBITS(1) [],
        /// Freeze enable
        FRZ OFFSET(30) NUMBITS(1) [],
        /// Module disable
        MDIS OFFSET(31) NUMBITS(1) []
    ],
    pub CTRL1 [
        PROPSEG OFFSET(0) NUMBITS(3) [],
        /// Listen-only mode
        LOM OFFSET(3) NUMBITS(1) [],
        /// Lowest buffer transmitted first
        LBUF OFFSET(4) NUMBITS(1) [],
        /// Timer sync
        TSYN OFFSET(5) NUMBITS(1) [],
        /// Bus off recovery
        BOFFREC OFFSET(6) NUMBITS(1) [],
        /// CAN bit sampling
        SMP OFFSET(7) NUMBITS(1) [],
        RWRNMSK OFFSET(10) NUMBITS(1) [],
        TWRNMSK OFFSET(11) NUMBITS(1) [],
        /// Loop back mode
        LPB OFFSET(12) NUMBITS(1) [],
        /// CAN engine clock source
        CLKSRC OFFSET(13) NUMBITS(1) [
            Oscillator = 0,
            PeripheralClock = 1
        ],
        ERRMSK OFFSET(14) NUMBITS(1) [],
        BOFFMSK OFFSET(15) NUMBITS(1) [],
        PSEG2 OFFSET(16) NUMBITS(3) [],
        PSEG1 OFFSET(19) NUMBITS(3) [],
        /// Resync jump width
        RJW OFFSET(22) NUMBITS(2) [],
        /// Prescaler division factor
        PRESDIV OFFSET(24) NUMBITS(8) []
    ],
    pub TIMER [
        TIMER OFFSET(0) NUMBITS(16) []
    ],
    pub RXMGMASK [
        MG OFFSET(0) NUMBITS(32) []
    ],
    pub RX14MASK [
        RX14M OFFSET(0) NUMBITS(32) []
    ],
    pub RX15MASK [
        RX15M OFFSET(0) NUMBITS(32) []
    ],
    pub ECR [
        TXERRCNT OFFSET(0) NUMBITS(8) [],
        RXERRCNT OFFSET(8) NUMBITS(8) [],
        TXERRCNT_FAST OFFSET(16) NUMBITS(8) [],
        RXERRCNT_FAST OFFSET(24) NUMBITS(8) []
    ],
    pub ESR1 [
        ERRINT OFFSET(1) NUMBITS(1) [],
        BOFFINT OFFSET(2) NUMBITS(1) [],
        RX OFFSET(3) NUMBITS(1) [],
        /// Fault confinement state
        FLTCONF OFFSET(4) NUMBITS(2) [
            ErrorActive = 0,
            ErrorPassive = 1,
            BusOff = 2
        ],
        TX OFFSET(6) NUMBITS(1) [],
        IDLE OFFSET(7) NUMBITS(1) [],
        RXWRN OFFSET(8) NUMBITS(1) [],
        TXWRN OFFSET(9) NUMBITS(1) [],
        STFERR OFFSET(10) NUMBITS(1) [],
        FRMERR OFFSET(11) NUMBITS(1) [],
        CRCERR OFFSET(12) NUMBITS(1) [],
        ACKERR OFFSET(13) NUMBITS(1) [],
        BIT0ERR OFFSET(14) NUMBITS(1) [],
        BIT1ERR OFFSET(15) NUMBITS(1) [],
        RWRNINT OFFSET(16) NUMBITS(1) [],
        TWRNINT OFFSET(17) NUMBITS(1) [],
        SYNCH OFFSET(18) NUMBITS(1) [],
        BOFFDONEINT OFFSET(19) NUMBITS(1) [],
        ERRINT_FAST OFFSET(20) NUMBITS(1) [],
        ERROVR OFFSET(21) NUMBITS(1) [],
        STFERR_FAST OFFSET(26) NUMBITS(1) [],
        FRMERR_FAST OFFSET(27) NUMBITS(1) [],
        CRCERR_FAST OFFSET(28) NUMBITS(1) [],
        BIT0ERR_FAST OFFSET(30) NUMBITS(1) [],
        BIT1ERR_FAST OFFSET(31) NUMBITS(1) []
    ],
    pub IMASK1 [
        BUF31TO0M OFFSET(0) NUMBITS(32) []
    ],
    pub IFLAG1 [
        BUF0I OFFSET(0) NUMBITS(1) [],
        BUF4TO1I OFFSET(1) NUMBITS(4) [],
        /// Also Rx FIFO frames available
        BUF5I OFFSET(5) NUMBITS(1) [],
        /// Also Rx FIFO warning
        BUF6I OFFSET(6) NUMBITS(1) [],
        /// Also Rx FIFO overflow
        BUF7I OFFSET(7) NUMBITS(1) [],
        BUF31TO8I OFFSET(8) NUMBITS(24) []
    ],
    pub CTRL2 [
        /// Edge filter disable
        EDFLTDIS OFFSET(11) NUMBITS(1) [],
        /// ISO CAN FD enable
        ISOCANFDEN OFFSET(12) NUMBITS(1) [],
        /// Protocol exception enable
        PREXCEN OFFSET(14) NUMBITS(1) [],
        TIMER_SRC OFFSET(15) NUMBITS(1) [],
        /// Entire frame arbitration field comparison enable for Rx mailboxes
        EACEN OFFSET(16) NUMBITS(1) [],
        /// Remote request storing
        RRS OFFSET(17) NUMBITS(1) [],
        /// Mailboxes reception priority
        MRP OFFSET(18) NUMBITS(1) [],
        /// Tx arbitration start delay
        TASD OFFSET(19) NUMBITS(5) [],
        /// Number of Rx FIFO filters
        RFFN OFFSET(24) NUMBITS(4) [],
        BOFFDONEMSK OFFSET(30) NUMBITS(1) [],
        ERRMSK_FAST OFFSET(31) NUMBITS(1) []
    ],
    pub ESR2 [
        /// Inactive mailbox
        IMB OFFSET(13) NUMBITS(1) [],
        /// Valid priority status
        VPS OFFSET(14) NUMBITS(1) [],
        /// Lowest priority Tx mailbox
        LPTM OFFSET(16) NUMBITS(7) []
    ],
    pub CRCR [
        TXCRC OFFSET(0) NUMBITS(15) [],
        MBCRC OFFSET(16) NUMBITS(7) []
    ],
    pub RXFGMASK [
        FGM OFFSET(0) NUMBITS(32) []
    ],
    pub RXFIR [
        IDHIT OFFSET(0) NUMBITS(9) []
    ],
    pub CBT [
        EPSEG2 OFFSET(0) NUMBITS(5) [],
        EPSEG1 OFFSET(5) NUMBITS(5) [],
        EPROPSEG OFFSET(10) NUMBITS(6) [],
        ERJW OFFSET(16) NUMBITS(5) [],
        EPRESDIV OFFSET(21) NUMBITS(10) [],
        /// Bit timing format enable, selects CBT over CTRL1
        BTF OFFSET(31) NUMBITS(1) []
    ],
    pub RAMN [
        DATA_BYTE_3 OFFSET(0) NUMBITS(8) [],
        DATA_BYTE_2 OFFSET(8) NUMBITS(8) [],
        DATA_BYTE_1 OFFSET(16) NUMBITS(8) [],
        DATA_BYTE_0 OFFSET(24) NUMBITS(8) []
    ],
    pub RXIMR [
        MI OFFSET(0) NUMBITS(32) []
    ],
    pub CTRL1_PN [
        /// Filtering combination selection
        FCS OFFSET(0) NUMBITS(2) [
            IdOnly = 0,
            IdAndPayload = 1,
            IdOnlyNMatches = 2,
            IdAndPayloadNMatches = 3
        ],
        /// ID filtering selection
        IDFS OFFSET(2) NUMBITS(2) [
            Exact = 0,
            GreaterOrEqual = 1,
            SmallerOrEqual = 2,
            Range = 3
        ],
        /// Payload filtering selection
        PLFS OFFSET(4) NUMBITS(2) [
            Exact = 0,
            GreaterOrEqual = 1,
            SmallerOrEqual = 2,
            Range = 3
        ],
        /// Number of messages matching the same filtering criteria
        NMATCH OFFSET(8) NUMBITS(8) [],
        WUMF_MSK OFFSET(16) NUMBITS(1) [],
        WTOF_MSK OFFSET(17) NUMBITS(1) []
    ],
    pub CTRL2_PN [
        MATCHTO OFFSET(0) NUMBITS(16) []
    ],
    pub WU_MTC [
        MCOUNTER OFFSET(8) NUMBITS(8) [],
        /// Wake up by match flag
        WUMF OFFSET(16) NUMBITS(1) [],
        /// Wake up by timeout flag
        WTOF OFFSET(17) NUMBITS(1) []
    ],
    pub FLT_ID1 [
        FLT_ID1 OFFSET(0) NUMBITS(29) [],
        FLT_RTR OFFSET(29) NUMBITS(1) [],
        FLT_IDE OFFSET(30) NUMBITS(1) []
    ],
    pub FLT_DLC [
        FLT_DLC_HI OFFSET(0) NUMBITS(4) [],
        FLT_DLC_LO OFFSET(16) NUMBITS(4) []
    ],
    // Payload words as laid out in PL1/PL2 filters and wake up buffers
    pub PAYLOAD_LO [
        DATA_BYTE_3 OFFSET(0) NUMBITS(8) [],
        DATA_BYTE_2 OFFSET(8) NUMBITS(8) [],
        DATA_BYTE_1 OFFSET(16) NUMBITS(8) [],
        DATA_BYTE_0 OFFSET(24) NUMBITS(8) []
    ],
    pub PAYLOAD_HI [
        DATA_BYTE_7 OFFSET(0) NUMBITS(8) [],
        DATA_BYTE_6 OFFSET(8) NUMBITS(8) [],
        DATA_BYTE_5 OFFSET(16) NUMBITS(8) [],
        DATA_BYTE_4 OFFSET(24) NUMBITS(8) []
    ],
    pub FLT_ID2_IDMASK [
        FLT_ID2_IDMASK OFFSET(0) NUMBITS(29) [],
        RTR_MSK OFFSET(29) NUMBITS(1) [],
        IDE_MSK OFFSET(30) NUMBITS(1) []
    ],
    pub WMB_CS [
        DLC OFFSET(16) NUMBITS(4) [],
        RTR OFFSET(20) NUMBITS(1) [],
        IDE OFFSET(21) NUMBITS(1) [],
        SRR OFFSET(22) NUMBITS(1) []
    ],
    pub WMB_ID [
        ID OFFSET(0) NUMBITS(29) []
    ],
    pub FDCTRL [
        /// Transceiver delay compensation value
        TDCVAL OFFSET(0) NUMBITS(6) [],
        /// Transceiver delay compensation offset
        TDCOFF OFFSET(8) NUMBITS(5) [],
        TDCFAIL OFFSET(14) NUMBITS(1) [],
        TDCEN OFFSET(15) NUMBITS(1) [],
        /// Message buffer data size for region 0
        MBDSR0 OFFSET(16) NUMBITS(2) [
            Bytes8 = 0,
            Bytes16 = 1,
            Bytes32 = 2,
            Bytes64 = 3
        ],
        /// Bit rate switch enable
        FDRATE OFFSET(31) NUMBITS(1) []
    ],
    pub FDCBT [
        FPSEG2 OFFSET(0) NUMBITS(3) [],
        FPSEG1 OFFSET(5) NUMBITS(3) [],
        FPROPSEG OFFSET(10) NUMBITS(5) [],
        FRJW OFFSET(16) NUMBITS(3) [],
        FPRESDIV OFFSET(20) NUMBITS(10) []
    ],
    pub FDCRC [
        FD_TXCRC OFFSET(0) NUMBITS(21) [],
        FD_MBCRC OFFSET(24) NUMBITS(7) []
    ],

    // Words 0 and 1 of every message buffer in RAMn
    pub MB_CS [
        TIME_STAMP OFFSET(0) NUMBITS(16) [],
        DLC OFFSET(16) NUMBITS(4) [],
        RTR OFFSET(20) NUMBITS(1) [],
        IDE OFFSET(21) NUMBITS(1) [],
        SRR OFFSET(22) NUMBITS(1) [],
        CODE OFFSET(24) NUMBITS(4) [
            RxInactive = 0x0,
            RxFull = 0x2,
            RxEmpty = 0x4,
            RxOverrun = 0x6,
            RxRanswer = 0xA,
            TxInactive = 0x8,
            TxAbort = 0x9,
            TxData = 0xC,
            TxTanswer = 0xE
        ],
        /// Error state indicator
        ESI OFFSET(29) NUMBITS(1) [],
        /// Bit rate switch
        BRS OFFSET(30) NUMBITS(1) [],
        /// Extended data length, marks a CAN FD frame
        EDL OFFSET(31) NUMBITS(1) []
    ],
    pub MB_ID [
        EXT OFFSET(0) NUMBITS(29) [],
        STD OFFSET(18) NUMBITS(11) [],
        PRIO OFFSET(29) NUMBITS(3) []
    ]
];

pub const CAN0_BASE_ADDR: usize = 0x4002_4000;

pub const CAN0_BASE: StaticRef<CanRegisters> =
    unsafe { StaticRef::new(CAN0_BASE_ADDR as *const CanRegisters) };

pub const CAN_BASE_ADDRS: [usize; CAN_INSTANCE_COUNT] = [CAN0_BASE_ADDR];
pub const CAN_BASE_PTRS: [StaticRef<CanRegisters>; CAN_INSTANCE_COUNT] = [CAN0_BASE];

// All status interrupts of CAN0 are ORed onto one line, and so are all of
// its message buffers.
pub const CAN_RX_WARNING_IRQS: [u32; CAN_INSTANCE_COUNT] = [interrupts::CAN0_ORED_ERR_WAKEUP];
pub const CAN_TX_WARNING_IRQS: [u32; CAN_INSTANCE_COUNT] = [interrupts::CAN0_ORED_ERR_WAKEUP];
pub const CAN_WAKE_UP_IRQS: [u32; CAN_INSTANCE_COUNT] = [interrupts::CAN0_ORED_ERR_WAKEUP];
pub const CAN_ERROR_IRQS: [u32; CAN_INSTANCE_COUNT] = [interrupts::CAN0_ORED_ERR_WAKEUP];
pub const CAN_BUS_OFF_IRQS: [u32; CAN_INSTANCE_COUNT] = [interrupts::CAN0_ORED_ERR_WAKEUP];
pub const CAN_ORED_0_15_MB_IRQS: [u32; CAN_INSTANCE_COUNT] = [interrupts::CAN0_ORED_0_31_MB];
pub const CAN_ORED_16_31_MB_IRQS: [u32; CAN_INSTANCE_COUNT] = [interrupts::CAN0_ORED_0_31_MB];

/// Payload bytes of one message buffer for an `FDCTRL.MBDSR0` encoding.
pub const fn payload_size(mbdsr: u32) -> usize {
    8 << (mbdsr & 0x3)
}

/// Number of message buffers that fit the RAM for an `MBDSR0` encoding.
pub const fn message_buffer_count(mbdsr: u32) -> usize {
    let bytes = 8 + payload_size(mbdsr);
    let count = (CAN_RAMN_COUNT * 4) / bytes;
    if count > CAN_MAX_MB_NUM {
        CAN_MAX_MB_NUM
    } else {
        count
    }
}

/// Index into `RAMn` of the control/status word of message buffer `mb`.
///
/// Returns `None` when `mb` does not fit with the selected payload size.
pub fn message_buffer_word(mb: usize, mbdsr: u32) -> Option<usize> {
    if mb >= message_buffer_count(mbdsr) {
        return None;
    }
    Some(mb * (2 + payload_size(mbdsr) / 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn pretended_networking_block() {
        assert_eq!(core::mem::offset_of!(CanRegisters, ramn), 0x80);
        assert_eq!(core::mem::offset_of!(CanRegisters, rximr), 0x880);
        assert_eq!(core::mem::offset_of!(CanRegisters, ctrl1_pn), 0xB00);
        assert_eq!(core::mem::offset_of!(CanRegisters, wmb), 0xB40);
        assert_eq!(core::mem::offset_of!(CanRegisters, fdctrl), 0xC00);
        assert_eq!(core::mem::size_of::<WakeupMessageBuffer>(), 0x10);
        assert_eq!(core::mem::size_of::<CanRegisters>(), 0xC0C);
    }

    #[test]
    fn fields() {
        assert_field!(MCR::MAXMB, 0, 7);
        assert_field!(MCR::IDAM, 8, 2);
        assert_field!(MCR::MDIS, 31, 1);
        assert_field!(CTRL1::PRESDIV, 24, 8);
        assert_field!(ESR1::FLTCONF, 4, 2);
        assert_field!(CTRL2::TASD, 19, 5);
        assert_field!(CTRL2::RFFN, 24, 4);
        assert_field!(CBT::EPRESDIV, 21, 10);
        assert_field!(FDCTRL::MBDSR0, 16, 2);
        assert_field!(FDCBT::FPRESDIV, 20, 10);
        assert_field!(FDCRC::FD_TXCRC, 0, 21);
        assert_field!(MB_ID::STD, 18, 11);
        assert_field!(MB_CS::CODE, 24, 4);
        assert_field!(IMASK1::BUF31TO0M, 0, 32);
    }

    #[test]
    fn message_buffer_geometry() {
        assert_eq!(message_buffer_count(0), 32);
        assert_eq!(message_buffer_count(1), 21);
        assert_eq!(message_buffer_count(2), 12);
        assert_eq!(message_buffer_count(3), 7);

        assert_eq!(message_buffer_word(0, 0), Some(0));
        assert_eq!(message_buffer_word(31, 0), Some(124));
        assert_eq!(message_buffer_word(6, 3), Some(108));
        assert_eq!(message_buffer_word(7, 3), None);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            MCR [MAXMB, IDAM, FDEN, AEN, LPRIOEN, PNET_EN, DMA, IRMQ, SRXDIS, LPMACK, WRNEN, SUPV,
                FRZACK, SOFTRST, NOTRDY, HALT, RFEN, FRZ, MDIS],
            CTRL1 [PROPSEG, LOM, LBUF, TSYN, BOFFREC, SMP, RWRNMSK, TWRNMSK, LPB, CLKSRC, ERRMSK,
                BOFFMSK, PSEG2, PSEG1, RJW, PRESDIV],
            TIMER [TIMER],
            RXMGMASK [MG],
            RX14MASK [RX14M],
            RX15MASK [RX15M],
            ECR [TXERRCNT, RXERRCNT, TXERRCNT_FAST, RXERRCNT_FAST],
            ESR1 [ERRINT, BOFFINT, RX, FLTCONF, TX, IDLE, RXWRN, TXWRN, STFERR, FRMERR, CRCERR,
                ACKERR, BIT0ERR, BIT1ERR, RWRNINT, TWRNINT, SYNCH, BOFFDONEINT, ERRINT_FAST, ERROVR,
                STFERR_FAST, FRMERR_FAST, CRCERR_FAST, BIT0ERR_FAST, BIT1ERR_FAST],
            IMASK1 [BUF31TO0M],
            IFLAG1 [BUF0I, BUF4TO1I, BUF5I, BUF6I, BUF7I, BUF31TO8I],
            CTRL2 [EDFLTDIS, ISOCANFDEN, PREXCEN, TIMER_SRC, EACEN, RRS, MRP, TASD, RFFN,
                BOFFDONEMSK, ERRMSK_FAST],
            ESR2 [IMB, VPS, LPTM],
            CRCR [TXCRC, MBCRC],
            RXFGMASK [FGM],
            RXFIR [IDHIT],
            CBT [EPSEG2, EPSEG1, EPROPSEG, ERJW, EPRESDIV, BTF],
            RAMN [DATA_BYTE_3, DATA_BYTE_2, DATA_BYTE_1, DATA_BYTE_0],
            RXIMR [MI],
            CTRL1_PN [FCS, IDFS, PLFS, NMATCH, WUMF_MSK, WTOF_MSK],
            CTRL2_PN [MATCHTO],
            WU_MTC [MCOUNTER, WUMF, WTOF],
            FLT_ID1 [FLT_ID1, FLT_RTR, FLT_IDE],
            FLT_DLC [FLT_DLC_HI, FLT_DLC_LO],
            PAYLOAD_LO [DATA_BYTE_3, DATA_BYTE_2, DATA_BYTE_1, DATA_BYTE_0],
            PAYLOAD_HI [DATA_BYTE_7, DATA_BYTE_6, DATA_BYTE_5, DATA_BYTE_4],
            FLT_ID2_IDMASK [FLT_ID2_IDMASK, RTR_MSK, IDE_MSK],
            WMB_CS [DLC, RTR, IDE, SRR],
            WMB_ID [ID],
            FDCTRL [TDCVAL, TDCOFF, TDCFAIL, TDCEN, MBDSR0, FDRATE],
            FDCBT [FPSEG2, FPSEG1, FPROPSEG, FRJW, FPRESDIV],
            FDCRC [FD_TXCRC, FD_MBCRC],
            MB_CS [TIME_STAMP, DLC, RTR, IDE, SRR, CODE, ESI, BRS, EDL],
            MB_ID [EXT, STD, PRIO],
        );
    }
}
