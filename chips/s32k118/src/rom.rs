// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! CoreSight ROM table.

use tock_registers::registers::ReadOnly;
use tock_registers::{register_bitfields, register_structs};

use crate::mtb::IdentificationRegisters;
use crate::static_ref::StaticRef;

pub const ROM_INSTANCE_COUNT: usize = 1;
pub const ROM_ENTRY_COUNT: usize = 3;

register_structs! {
    pub RomRegisters {
        /// Entry n, one per component in the table
        (0x000 => pub entry: [ReadOnly<u32, ENTRY::Register>; ROM_ENTRY_COUNT]),
        /// End of Table Marker Register
        (0x00C => pub tablemark: ReadOnly<u32>),
        (0x010 => _reserved0),
        /// System Access Register
        (0xFCC => pub sysaccess: ReadOnly<u32>),
        (0xFD0 => pub id: IdentificationRegisters),
        (0x1000 => @END),
    }
}

register_bitfields![u32,
    pub ENTRY [
        /// Entry present
        PRESENT OFFSET(0) NUMBITS(1) [],
        /// 32-bit format
        FORMAT OFFSET(1) NUMBITS(1) [],
        /// Signed offset from the table base, in 4 KiB units
        ADDRESS_OFFSET OFFSET(12) NUMBITS(20) []
    ]
];

/// Address of the component described by ROM table entry `entry`, if the
/// entry is present.
pub fn component_address(table_base: usize, entry: u32) -> Option<usize> {
    if entry & 1 == 0 {
        return None;
    }
    // Two's complement offset, so wrapping addition handles negative values.
    Some((table_base as u32).wrapping_add(entry & !0xFFF) as usize)
}

pub const ROM_BASE_ADDR: usize = 0xF000_2000;

pub const ROM_BASE: StaticRef<RomRegisters> =
    unsafe { StaticRef::new(ROM_BASE_ADDR as *const RomRegisters) };

pub const ROM_BASE_ADDRS: [usize; ROM_INSTANCE_COUNT] = [ROM_BASE_ADDR];
pub const ROM_BASE_PTRS: [StaticRef<RomRegisters>; ROM_INSTANCE_COUNT] = [ROM_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn layout() {
        assert_eq!(core::mem::offset_of!(RomRegisters, tablemark), 0xC);
        assert_eq!(core::mem::offset_of!(RomRegisters, sysaccess), 0xFCC);
        assert_eq!(core::mem::size_of::<RomRegisters>(), 0x1000);
        assert_field!(ENTRY::ADDRESS_OFFSET, 12, 20);
    }

    #[test]
    fn entries_resolve_to_trace_blocks() {
        // MTB sits two pages below the table, MTB_DWT one page below.
        assert_eq!(
            component_address(ROM_BASE_ADDR, 0xFFFF_E003),
            Some(crate::mtb::MTB_BASE_ADDR)
        );
        assert_eq!(
            component_address(ROM_BASE_ADDR, 0xFFFF_F003),
            Some(crate::mtb::MTB_DWT_BASE_ADDR)
        );
        assert_eq!(component_address(ROM_BASE_ADDR, 0), None);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            ENTRY [PRESENT, FORMAT, ADDRESS_OFFSET],
        );
    }
}
