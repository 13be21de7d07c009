// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Consistency checks over the peripheral catalog.

use std::collections::HashMap;
use std::fmt;

use s32k118::pcc::PCC_PCCN_COUNT;
use s32k118::peripherals::{PeripheralInfo, PeripheralKind};

#[derive(Debug, PartialEq, Eq)]
pub enum Problem {
    DuplicateName(&'static str),
    Overlap(&'static str, &'static str),
    Misaligned(&'static str, usize),
    EmptyBlock(&'static str),
    IrqOutOfRange(&'static str, u32),
    PccOutOfRange(&'static str, usize),
    PccShared(&'static str, &'static str, usize),
    UnnamedIrq(usize),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::DuplicateName(name) => write!(f, "{} appears more than once", name),
            Problem::Overlap(a, b) => write!(f, "{} overlaps {}", a, b),
            Problem::Misaligned(name, base) => {
                write!(f, "{} base {:#010x} is not word aligned", name, base)
            }
            Problem::EmptyBlock(name) => write!(f, "{} has an empty register block", name),
            Problem::IrqOutOfRange(name, irq) => {
                write!(f, "{} uses IRQ {} which is not wired to the NVIC", name, irq)
            }
            Problem::PccOutOfRange(name, index) => {
                write!(f, "{} uses PCC slot {} past the end of PCC", name, index)
            }
            Problem::PccShared(a, b, index) => {
                write!(f, "{} and {} share PCC slot {}", a, b, index)
            }
            Problem::UnnamedIrq(irq) => write!(f, "IRQ {} has no name", irq),
        }
    }
}

/// Run every check over `peripherals`, with `irq_names` indexed by device
/// interrupt number.
pub fn audit(peripherals: &[PeripheralInfo], irq_names: &[&str]) -> Vec<Problem> {
    let mut problems = Vec::new();

    let mut names: HashMap<String, usize> = HashMap::new();
    for p in peripherals {
        *names.entry(p.name.to_ascii_uppercase()).or_default() += 1;
    }
    for p in peripherals {
        if names.remove(&p.name.to_ascii_uppercase()).is_some_and(|n| n > 1) {
            problems.push(Problem::DuplicateName(p.name));
        }
    }

    for p in peripherals {
        if p.size == 0 {
            problems.push(Problem::EmptyBlock(p.name));
        }
        if p.base % 4 != 0 {
            problems.push(Problem::Misaligned(p.name, p.base));
        }
        for &irq in p.irqs {
            if irq as usize >= irq_names.len() {
                problems.push(Problem::IrqOutOfRange(p.name, irq));
            }
        }
    }

    // The System Control Space blocks nest inside each other.
    let mapped: Vec<&PeripheralInfo> = peripherals
        .iter()
        .filter(|p| p.kind != PeripheralKind::Core)
        .collect();
    for (i, a) in mapped.iter().enumerate() {
        for b in &mapped[i + 1..] {
            if a.overlaps(b) {
                problems.push(Problem::Overlap(a.name, b.name));
            }
        }
    }

    let mut owners: HashMap<usize, &'static str> = HashMap::new();
    for p in peripherals {
        let Some(index) = p.pcc_index() else {
            continue;
        };
        if index >= PCC_PCCN_COUNT {
            problems.push(Problem::PccOutOfRange(p.name, index));
        } else if let Some(first) = owners.insert(index, p.name) {
            problems.push(Problem::PccShared(first, p.name, index));
        }
    }

    for (irq, name) in irq_names.iter().enumerate() {
        if name.trim().is_empty() {
            problems.push(Problem::UnnamedIrq(irq));
        }
    }

    log::debug!(
        "audited {} peripherals and {} interrupt lines",
        peripherals.len(),
        irq_names.len()
    );
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use s32k118::clocks::ClockName;
    use s32k118::interrupts::IRQ_NAMES;
    use s32k118::peripherals::PERIPHERALS;

    const fn block(name: &'static str, base: usize, size: usize) -> PeripheralInfo {
        PeripheralInfo {
            name,
            description: "",
            base,
            size,
            irqs: &[],
            clock: None,
            kind: PeripheralKind::Bus,
        }
    }

    #[test]
    fn chip_catalog_is_consistent() {
        assert_eq!(audit(PERIPHERALS, &IRQ_NAMES), vec![]);
    }

    #[test]
    fn overlapping_blocks() {
        let catalog = [block("A", 0x1000, 0x100), block("B", 0x10FC, 0x10)];
        assert_eq!(audit(&catalog, &["X"]), vec![Problem::Overlap("A", "B")]);

        let adjacent = [block("A", 0x1000, 0x100), block("B", 0x1100, 0x10)];
        assert!(audit(&adjacent, &["X"]).is_empty());
    }

    #[test]
    fn core_blocks_may_nest() {
        let mut outer = block("OUTER", 0xE000_E000, 0xD28);
        let mut inner = block("INNER", 0xE000_E010, 0x10);
        outer.kind = PeripheralKind::Core;
        inner.kind = PeripheralKind::Core;
        assert!(audit(&[outer, inner], &["X"]).is_empty());
    }

    #[test]
    fn duplicate_names_ignore_case() {
        let catalog = [block("uart", 0x1000, 4), block("UART", 0x2000, 4)];
        assert_eq!(audit(&catalog, &["X"]), vec![Problem::DuplicateName("uart")]);
    }

    #[test]
    fn interrupt_out_of_range() {
        let mut p = block("TIMER", 0x1000, 4);
        p.irqs = &[0, 2];
        assert_eq!(
            audit(&[p], &["A", "B"]),
            vec![Problem::IrqOutOfRange("TIMER", 2)]
        );
    }

    #[test]
    fn shared_pcc_slot() {
        let mut a = block("A", 0x1000, 4);
        let mut b = block("B", 0x2000, 4);
        a.clock = Some(ClockName::PortA);
        b.clock = Some(ClockName::PortA);
        assert_eq!(
            audit(&[a, b], &["X"]),
            vec![Problem::PccShared("A", "B", 73)]
        );
    }

    #[test]
    fn bad_shapes() {
        let catalog = [block("ODD", 0x1002, 4), block("EMPTY", 0x2000, 0)];
        assert_eq!(
            audit(&catalog, &["IRQ0", " "]),
            vec![
                Problem::Misaligned("ODD", 0x1002),
                Problem::EmptyBlock("EMPTY"),
                Problem::UnnamedIrq(1),
            ]
        );
    }
}
