// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Human readable output for each subcommand.

use std::io::{self, Write};

use colored::Colorize;

use s32k118::clocks::PeripheralFeatures;
use s32k118::interrupts::{self, CORE_EXCEPTIONS, IRQ_NAMES};
use s32k118::peripherals::{self, PeripheralInfo};

use crate::audit::Problem;

const FEATURE_NAMES: [(PeripheralFeatures, &str); 8] = [
    (PeripheralFeatures::CLOCK_GATING_IN_SIM, "gated in SIM"),
    (PeripheralFeatures::MULTIPLIER, "PCC multiplier"),
    (PeripheralFeatures::DIVIDER, "PCC divider"),
    (PeripheralFeatures::PROTOCOL_CLOCK_FROM_ASYNC1, "functional clock from *DIV1"),
    (PeripheralFeatures::PROTOCOL_CLOCK_FROM_ASYNC2, "functional clock from *DIV2"),
    (PeripheralFeatures::INT_CLOCK_FROM_BUS_CLOCK, "interface clock from BUS_CLK"),
    (PeripheralFeatures::INT_CLOCK_FROM_SYS_CLOCK, "interface clock from SYS_CLK"),
    (PeripheralFeatures::INT_CLOCK_FROM_SLOW_CLOCK, "interface clock from SLOW_CLK"),
];

pub fn feature_names(features: PeripheralFeatures) -> Vec<&'static str> {
    FEATURE_NAMES
        .iter()
        .filter(|(flag, _)| features.contains(*flag))
        .map(|(_, name)| *name)
        .collect()
}

fn irq_list(irqs: &[u32]) -> String {
    irqs.iter()
        .map(|irq| irq.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Memory map, sorted by base address.
pub fn list<W: Write>(out: &mut W, catalog: &[PeripheralInfo]) -> io::Result<()> {
    let mut sorted: Vec<&PeripheralInfo> = catalog.iter().collect();
    sorted.sort_by_key(|p| (p.base, p.name));

    writeln!(
        out,
        "{:<10} {:>12} {:>12} {:>7}  {}",
        "NAME".bold(),
        "BASE".bold(),
        "END".bold(),
        "SIZE".bold(),
        "IRQS".bold()
    )?;
    for p in sorted {
        writeln!(
            out,
            "{:<10} {:#012x} {:#012x} {:>#7x}  {}",
            p.name.cyan(),
            p.base,
            p.end(),
            p.size,
            irq_list(p.irqs)
        )?;
    }
    Ok(())
}

pub fn show<W: Write>(out: &mut W, p: &PeripheralInfo) -> io::Result<()> {
    writeln!(out, "{} - {}", p.name.cyan().bold(), p.description)?;
    writeln!(out, "  kind:  {:?}", p.kind)?;
    writeln!(out, "  base:  {:#010x}", p.base)?;
    writeln!(out, "  end:   {:#010x}", p.end())?;
    writeln!(out, "  size:  {:#x} bytes", p.size)?;

    if p.irqs.is_empty() {
        writeln!(out, "  irqs:  {}", "none".dimmed())?;
    } else {
        writeln!(out, "  irqs:")?;
        for &irq in p.irqs {
            let name = interrupts::irq_name(irq).unwrap_or("?");
            writeln!(out, "    {:>2}  {}", irq, name)?;
        }
    }

    match p.clock {
        Some(clock) => {
            writeln!(out, "  clock: {:?} (#{})", clock, clock as u32)?;
            match clock.pcc_index() {
                Some(index) => writeln!(out, "  pcc:   PCCn[{}]", index)?,
                None => writeln!(out, "  pcc:   {}", "none".dimmed())?,
            }
            for name in feature_names(clock.features()) {
                writeln!(out, "         {}", name)?;
            }
        }
        None => writeln!(out, "  clock: {}", "always on".dimmed())?,
    }
    Ok(())
}

/// Vector table: core exceptions, then device interrupts with their users.
pub fn irqs<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{:>4} {:>5}  {}", "SLOT".bold(), "IRQn".bold(), "NAME".bold())?;
    for (irqn, name) in CORE_EXCEPTIONS {
        writeln!(out, "{:>4} {:>5}  {}", interrupts::vector_slot(irqn), irqn, name)?;
    }
    for (irq, name) in IRQ_NAMES.iter().enumerate() {
        let users: Vec<&str> = peripherals::users_of_irq(irq as u32)
            .map(|p| p.name)
            .collect();
        writeln!(
            out,
            "{:>4} {:>5}  {:<22} {}",
            interrupts::vector_slot(irq as i32),
            irq,
            name,
            users.join(" ").cyan()
        )?;
    }
    Ok(())
}

pub fn problems<W: Write>(out: &mut W, problems: &[Problem]) -> io::Result<()> {
    if problems.is_empty() {
        writeln!(out, "{}", "catalog is consistent".green())?;
    }
    for problem in problems {
        writeln!(out, "{} {}", "problem:".red().bold(), problem)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use s32k118::clocks::ClockName;
    use s32k118::peripherals::{find, PERIPHERALS};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn list_is_sorted_by_address() {
        let text = render(|out| list(out, PERIPHERALS));
        let lines: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(lines.len(), PERIPHERALS.len());
        assert!(lines[0].starts_with("CSE_PRAM"));
        assert!(lines.last().unwrap().starts_with("MCM"));
    }

    #[test]
    fn show_lists_interrupts_and_clock() {
        let text = render(|out| show(out, find("FTM0").unwrap()));
        assert!(text.contains("0x40038000"));
        assert!(text.contains("FTM0_Fault"));
        assert!(text.contains("PCCn[56]"));
        assert!(text.contains("functional clock from *DIV1"));
    }

    #[test]
    fn vector_table() {
        let text = render(irqs);
        assert!(text.contains("  15    -1  SysTick"));
        assert!(text.contains("PORTA PORTB PORTC PORTD PORTE"));
        assert_eq!(text.lines().count(), 1 + 5 + 32);
    }

    #[test]
    fn features() {
        assert_eq!(
            feature_names(ClockName::Lptmr0.features()),
            vec![
                "PCC multiplier",
                "PCC divider",
                "functional clock from *DIV2",
                "interface clock from BUS_CLK"
            ]
        );
        assert!(feature_names(ClockName::Core.features()).is_empty());
    }
}
