// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Device feature constants.
//!
//! Sizes, frequencies and magic values that drivers need but that are not
//! encoded in any register description.

pub use crate::adc::{
    DEFAULT_SAMPLE_TIME as ADC_DEFAULT_SAMPLE_TIME, DEFAULT_USER_GAIN as ADC_DEFAULT_USER_GAIN,
};
pub use crate::crc::{
    DEFAULT_POLYNOMIAL as CRC_DEFAULT_POLYNOMIAL, DEFAULT_SEED as CRC_DEFAULT_SEED,
};
pub use crate::lpuart::{
    DEFAULT_OSR as LPUART_DEFAULT_OSR, DEFAULT_SBR as LPUART_DEFAULT_SBR,
    FIFO_REG_FLAGS_MASK as LPUART_FIFO_REG_FLAGS_MASK, FIFO_RESET_MASK as LPUART_FIFO_RESET_MASK,
    FIFO_SIZE as LPUART_FIFO_SIZE, STAT_REG_FLAGS_MASK as LPUART_STAT_REG_FLAGS_MASK,
};
pub use crate::mpu::{
    MASTER_CORE as MPU_MASTER_CORE, MASTER_COUNT as MPU_MASTER_COUNT,
    MASTER_DEBUGGER as MPU_MASTER_DEBUGGER, MASTER_DMA as MPU_MASTER_DMA,
    SLAVE_COUNT as MPU_SLAVE_COUNT, SLAVE_FLASH_BOOTROM as MPU_SLAVE_FLASH_BOOTROM,
    SLAVE_SRAM_MTB_DWT_MCM as MPU_SLAVE_SRAM_MTB_DWT_MCM,
};
pub use crate::wdog::{
    CS_RESET_VALUE as WDOG_CS_RESET_VALUE, REFRESH_KEY as WDOG_TRIGGER_VALUE,
    REFRESH_KEY_16 as WDOG_TRIGGER16_VALUES, TOVAL_RESET_VALUE as WDOG_TO_RESET_VALUE,
    UNLOCK_KEY as WDOG_UNLOCK_VALUE, UNLOCK_KEY_16 as WDOG_UNLOCK16_VALUES,
};

// Program flash
pub const FLS_PF_BLOCK_COUNT: u32 = 1;
pub const FLS_PF_BLOCK_SIZE: u32 = 0x4_0000;
pub const FLS_PF_BLOCK_SECTOR_SIZE: u32 = 2048;
pub const FLS_PF_BLOCK_WRITE_UNIT_SIZE: u32 = 8;
pub const FLS_PF_START_ADDRESS: u32 = 0x0000_0000;

// FlexNVM
pub const FLS_DF_BLOCK_COUNT: u32 = 1;
pub const FLS_DF_BLOCK_SIZE: u32 = 32 * 1024;
pub const FLS_DF_BLOCK_SECTOR_SIZE: u32 = 2048;
pub const FLS_DF_BLOCK_WRITE_UNIT_SIZE: u32 = 8;
pub const FLS_DF_START_ADDRESS: u32 = 0x1000_0000;

// FlexRAM
pub const FLS_FLEX_RAM_SIZE: u32 = 2048;
pub const FLS_FLEX_RAM_START_ADDRESS: u32 = 0x1400_0000;

/// Address alignment of block, sector and section commands.
pub const FLS_CMD_ADDRESS_ALIGNMENT: u32 = 8;
/// Address alignment of the program check command.
pub const FLS_CHECK_CMD_ADDRESS_ALIGNMENT: u32 = 4;

/// SIRC frequency when `SIRCCFG.RANGE` selects the high range.
pub const SCG_SIRC_HIGH_RANGE_FREQ: u32 = 8_000_000;
/// FIRC frequency in the trimmed 48 MHz range.
pub const SCG_FIRC_FREQ0: u32 = 48_000_000;

pub use crate::nvic::PRIO_BITS as NVIC_PRIO_BITS;
pub use crate::scb::VECTKEY as SCB_VECTKEY;

pub const DMA_CHANNELS: usize = crate::dma::DMA_CHANNELS;
pub const DMA_VIRTUAL_CHANNELS: usize = DMA_CHANNELS * crate::dma::DMA_INSTANCE_COUNT;
pub const DMAMUX_CHANNELS: usize = crate::dmamux::DMAMUX_CHCFG_COUNT;

pub const FTM_CHANNEL_COUNT: usize = crate::ftm::FTM_CHANNEL_COUNT;
pub const PORT_COUNT: usize = crate::port::PORT_INSTANCE_COUNT;

// LPUART status flags, as bit positions in STAT.
pub const LPUART_STAT_TDRE: u32 = 1 << 23;
pub const LPUART_STAT_TC: u32 = 1 << 22;
pub const LPUART_STAT_RDRF: u32 = 1 << 21;
pub const LPUART_STAT_IDLE: u32 = 1 << 20;
pub const LPUART_STAT_OR: u32 = 1 << 19;
pub const LPUART_STAT_NF: u32 = 1 << 18;
pub const LPUART_STAT_FE: u32 = 1 << 17;
pub const LPUART_STAT_PF: u32 = 1 << 16;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lpuart::STAT;

    #[test]
    fn flash_geometry() {
        assert_eq!(FLS_PF_BLOCK_SIZE / FLS_PF_BLOCK_SECTOR_SIZE, 128);
        assert_eq!(FLS_DF_BLOCK_SIZE / FLS_DF_BLOCK_SECTOR_SIZE, 16);
        assert_eq!(crate::ftfc::dflash_size(0b0000), Some(FLS_DF_BLOCK_SIZE));
        assert_eq!(
            crate::cse_pram::CSE_PRAM_BASE_ADDR as u32,
            FLS_FLEX_RAM_START_ADDRESS + FLS_FLEX_RAM_SIZE
        );
    }

    #[test]
    fn lpuart_flags_match_register_fields() {
        assert_eq!(LPUART_STAT_TDRE, u32::from(STAT::TDRE::SET));
        assert_eq!(LPUART_STAT_RDRF, u32::from(STAT::RDRF::SET));
        assert_eq!(LPUART_STAT_OR, u32::from(STAT::OR::SET));
        assert_eq!(LPUART_STAT_PF, u32::from(STAT::PF::SET));
        let single_flags = LPUART_STAT_IDLE
            | LPUART_STAT_OR
            | LPUART_STAT_NF
            | LPUART_STAT_FE
            | LPUART_STAT_PF;
        assert_eq!(LPUART_STAT_REG_FLAGS_MASK & single_flags, single_flags);
        assert_eq!(LPUART_STAT_REG_FLAGS_MASK & LPUART_STAT_TDRE, 0);
        assert_eq!(LPUART_STAT_REG_FLAGS_MASK, 0xC01F_C000);
        assert_eq!(LPUART_FIFO_RESET_MASK, 0x0003_C000);
        assert_eq!((LPUART_DEFAULT_OSR, LPUART_DEFAULT_SBR), (0x0F, 0x04));
        assert_eq!((ADC_DEFAULT_SAMPLE_TIME, ADC_DEFAULT_USER_GAIN), (0x0C, 0x04));
    }

    #[test]
    fn keys() {
        assert_eq!(WDOG_UNLOCK_VALUE, 0xD928_C520);
        assert_eq!(SCB_VECTKEY, 0x05FA);
        assert_eq!(NVIC_PRIO_BITS, 2);
    }
}
