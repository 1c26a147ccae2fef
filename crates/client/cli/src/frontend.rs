//! Console implementations of the runtime's collaborator traits.

use arena_core::{ActionId, BattleEvent, Combatant, CombatantId};
use arena_runtime::{EventSink, IntentProvider, TargetView, TurnView};

use crate::prompt;

pub const DIVIDER: &str = "|----------------------------------------------------------------|";

/// Formats a stat without a trailing `.0` for whole values.
fn stat(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

fn stats(combatant: &Combatant) -> String {
    format!(
        "HP: {} || Attack: {} | {}",
        stat(combatant.life),
        stat(combatant.attack),
        combatant.class_kind
    )
}

/// Numbered-menu action and target prompts over stdin.
pub struct ConsoleProvider;

impl IntentProvider for ConsoleProvider {
    fn choose_action(&mut self, view: &TurnView<'_>) -> ActionId {
        println!();
        println!("{}, it's your turn | {}", view.actor.name, stats(view.actor));
        println!("Your enemies are:");
        for enemy in view.roster.opponents_of(view.actor.id) {
            println!(" * {} | {}", enemy.name, stats(enemy));
        }
        for (idx, spec) in view.actions.iter().enumerate() {
            println!("{}. {}", idx + 1, spec.display_name);
        }

        loop {
            let line = prompt::read_trimmed("What is your move? ");
            match line.parse::<usize>() {
                Ok(choice) if (1..=view.actions.len()).contains(&choice) => {
                    return view.actions[choice - 1].id;
                }
                _ => println!("Please enter a valid choice."),
            }
        }
    }

    fn choose_target(&mut self, view: &TargetView<'_>) -> CombatantId {
        println!("|----------------------|");
        for (idx, target) in view.candidates.iter().enumerate() {
            println!("{}. {} | {}", idx + 1, target.name, stats(target));
        }

        loop {
            let line = prompt::read_trimmed("Choose which foe you want to attack: ");
            match line.parse::<usize>() {
                Ok(choice) if (1..=view.candidates.len()).contains(&choice) => {
                    return view.candidates[choice - 1].id;
                }
                _ => println!("Please select a valid target."),
            }
        }
    }
}

/// Renders battle events as the flavor lines players read.
pub struct ConsolePrinter;

impl EventSink for ConsolePrinter {
    fn notify(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::TurnStarted { .. } => {}
            BattleEvent::Damage {
                actor,
                target,
                amount,
                remaining_life,
            } => {
                println!(
                    "{} attacked {}. {}'s life reduced by {} to {}.",
                    actor.name,
                    target.name,
                    target.name,
                    stat(*amount),
                    stat(*remaining_life)
                );
                println!("{DIVIDER}");
            }
            BattleEvent::LifeRestored {
                actor,
                amount,
                new_life,
            } => {
                println!(
                    "{} recovers {} life, rising to {}.",
                    actor.name,
                    stat(*amount),
                    stat(*new_life)
                );
                println!("{DIVIDER}");
            }
            BattleEvent::AttackRaised {
                actor,
                amount,
                new_attack,
            } => {
                println!(
                    "{}'s attack increased by {} to {}.",
                    actor.name,
                    stat(*amount),
                    stat(*new_attack)
                );
                println!("{DIVIDER}");
            }
            BattleEvent::AttackLowered {
                actor,
                target,
                amount,
                new_attack,
            } => {
                if actor.id == target.id {
                    println!(
                        "{}'s attack decreased by {} to {}.",
                        target.name,
                        stat(*amount),
                        stat(*new_attack)
                    );
                } else {
                    println!(
                        "{} cowers before {}! Attack reduced by {} to {}.",
                        target.name,
                        actor.name,
                        stat(*amount),
                        stat(*new_attack)
                    );
                }
                println!("{DIVIDER}");
            }
            BattleEvent::Eliminated { combatant } => {
                println!("{} has fallen and leaves the arena.", combatant.name);
                println!("{DIVIDER}");
            }
            BattleEvent::Winner { combatant } => {
                println!();
                println!("Congratulations! {} is the winner!", combatant.name);
            }
        }
    }
}
