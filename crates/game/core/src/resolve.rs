//! Action resolvers: the per-move stat formulas.
//!
//! Resolvers are pure. Each takes the acting combatant and its target (for
//! SELF actions the actor is passed as its own target) and returns a
//! [`Resolution`]: the stat deltas to apply plus the events describing the
//! outcome. The engine applies deltas through
//! [`Combatant::apply_delta`]; nothing here mutates state.
//!
//! Reference formulas are reproduced exactly. "Floored" damage truncates
//! toward zero, matching integer attack-point display expectations.

use crate::catalog::ActionId;
use crate::combatant::{Combatant, CombatantId, StatField};
use crate::event::{BattleEvent, CombatantRef};

/// Which combatant a delta applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Actor,
    Target,
}

/// A single stat mutation produced by a resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatDelta {
    pub subject: Role,
    pub field: StatField,
    pub delta: f64,
}

impl StatDelta {
    pub const fn new(subject: Role, field: StatField, delta: f64) -> Self {
        Self {
            subject,
            field,
            delta,
        }
    }
}

/// Outcome of resolving one action: deltas to apply, events to report.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub deltas: Vec<StatDelta>,
    pub events: Vec<BattleEvent>,
}

/// Formula failures. Only reachable through broken engine invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Cast Spell divides by the caster's life, which is only zero when a
    /// defeated combatant was allowed to act.
    #[error("cast spell divided by zero life of {actor}")]
    DivisionByZero { actor: CombatantId },
}

/// Resolves one action against concrete combatants.
pub fn resolve(
    action: ActionId,
    actor: &Combatant,
    target: &Combatant,
) -> Result<Resolution, ResolveError> {
    match action {
        ActionId::BasicAttack => Ok(basic_attack(actor, target)),
        ActionId::Meditate => Ok(meditate(actor)),
        ActionId::AnimalHelp => Ok(animal_help(actor)),
        ActionId::Fight => Ok(fight(actor, target)),
        ActionId::Brawl => Ok(brawl(actor, target)),
        ActionId::Train => Ok(train(actor)),
        ActionId::Roar => Ok(roar(actor, target)),
        ActionId::Curse => Ok(curse(actor, target)),
        ActionId::Summon => Ok(summon(actor)),
        ActionId::CastSpell => cast_spell(actor, target),
    }
}

fn damage_to(actor: &Combatant, target: &Combatant, amount: f64) -> Resolution {
    Resolution {
        deltas: vec![StatDelta::new(Role::Target, StatField::Life, -amount)],
        events: vec![BattleEvent::Damage {
            actor: CombatantRef::of(actor),
            target: CombatantRef::of(target),
            amount,
            remaining_life: target.life - amount,
        }],
    }
}

/// target.life -= actor.attack
fn basic_attack(actor: &Combatant, target: &Combatant) -> Resolution {
    damage_to(actor, target, actor.attack)
}

/// actor.life += 10; actor.attack -= 2
fn meditate(actor: &Combatant) -> Resolution {
    let me = CombatantRef::of(actor);
    Resolution {
        deltas: vec![
            StatDelta::new(Role::Actor, StatField::Life, 10.0),
            StatDelta::new(Role::Actor, StatField::Attack, -2.0),
        ],
        events: vec![
            BattleEvent::LifeRestored {
                actor: me.clone(),
                amount: 10.0,
                new_life: actor.life + 10.0,
            },
            BattleEvent::AttackLowered {
                actor: me.clone(),
                target: me,
                amount: 2.0,
                new_attack: actor.attack - 2.0,
            },
        ],
    }
}

/// actor.attack += 5
fn animal_help(actor: &Combatant) -> Resolution {
    attack_raised(actor, 5.0)
}

/// target.life -= trunc(0.25 * actor.life + 0.75 * actor.attack)
fn fight(actor: &Combatant, target: &Combatant) -> Resolution {
    let damage = (0.25 * actor.life + 0.75 * actor.attack).trunc();
    damage_to(actor, target, damage)
}

/// target.life -= 2 * actor.attack; actor.life += trunc(0.5 * actor.attack)
fn brawl(actor: &Combatant, target: &Combatant) -> Resolution {
    let damage = 2.0 * actor.attack;
    let healed = (0.5 * actor.attack).trunc();
    Resolution {
        deltas: vec![
            StatDelta::new(Role::Target, StatField::Life, -damage),
            StatDelta::new(Role::Actor, StatField::Life, healed),
        ],
        events: vec![
            BattleEvent::Damage {
                actor: CombatantRef::of(actor),
                target: CombatantRef::of(target),
                amount: damage,
                remaining_life: target.life - damage,
            },
            BattleEvent::LifeRestored {
                actor: CombatantRef::of(actor),
                amount: healed,
                new_life: actor.life + healed,
            },
        ],
    }
}

/// actor.attack += 2; actor.life += 2
fn train(actor: &Combatant) -> Resolution {
    let me = CombatantRef::of(actor);
    Resolution {
        deltas: vec![
            StatDelta::new(Role::Actor, StatField::Attack, 2.0),
            StatDelta::new(Role::Actor, StatField::Life, 2.0),
        ],
        events: vec![
            BattleEvent::AttackRaised {
                actor: me.clone(),
                amount: 2.0,
                new_attack: actor.attack + 2.0,
            },
            BattleEvent::LifeRestored {
                actor: me,
                amount: 2.0,
                new_life: actor.life + 2.0,
            },
        ],
    }
}

/// target.attack -= 3
fn roar(actor: &Combatant, target: &Combatant) -> Resolution {
    attack_lowered(actor, target, 3.0)
}

/// target.attack -= 2
fn curse(actor: &Combatant, target: &Combatant) -> Resolution {
    attack_lowered(actor, target, 2.0)
}

/// actor.attack += 3
fn summon(actor: &Combatant) -> Resolution {
    attack_raised(actor, 3.0)
}

/// target.life -= actor.attack / actor.life (fractional)
fn cast_spell(actor: &Combatant, target: &Combatant) -> Result<Resolution, ResolveError> {
    if actor.life == 0.0 {
        return Err(ResolveError::DivisionByZero { actor: actor.id });
    }
    Ok(damage_to(actor, target, actor.attack / actor.life))
}

fn attack_raised(actor: &Combatant, amount: f64) -> Resolution {
    Resolution {
        deltas: vec![StatDelta::new(Role::Actor, StatField::Attack, amount)],
        events: vec![BattleEvent::AttackRaised {
            actor: CombatantRef::of(actor),
            amount,
            new_attack: actor.attack + amount,
        }],
    }
}

fn attack_lowered(actor: &Combatant, target: &Combatant, amount: f64) -> Resolution {
    Resolution {
        deltas: vec![StatDelta::new(Role::Target, StatField::Attack, -amount)],
        events: vec![BattleEvent::AttackLowered {
            actor: CombatantRef::of(actor),
            target: CombatantRef::of(target),
            amount,
            new_attack: target.attack - amount,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::ClassKind;

    fn warrior() -> Combatant {
        Combatant::new(CombatantId(0), "Garrosh", ClassKind::Warrior)
    }

    fn druid() -> Combatant {
        Combatant::new(CombatantId(1), "Malfurion", ClassKind::Druid)
    }

    fn mage() -> Combatant {
        Combatant::new(CombatantId(2), "Jaina", ClassKind::Mage)
    }

    fn delta_for(resolution: &Resolution, subject: Role, field: StatField) -> f64 {
        resolution
            .deltas
            .iter()
            .filter(|d| d.subject == subject && d.field == field)
            .map(|d| d.delta)
            .sum()
    }

    #[test]
    fn basic_attack_deals_actor_attack() {
        let actor = warrior();
        let target = druid();
        let resolution = resolve(ActionId::BasicAttack, &actor, &target).unwrap();
        assert_eq!(delta_for(&resolution, Role::Target, StatField::Life), -10.0);
    }

    #[test]
    fn meditate_trades_attack_for_life() {
        let actor = druid();
        let resolution = resolve(ActionId::Meditate, &actor, &actor).unwrap();
        assert_eq!(delta_for(&resolution, Role::Actor, StatField::Life), 10.0);
        assert_eq!(delta_for(&resolution, Role::Actor, StatField::Attack), -2.0);
    }

    #[test]
    fn animal_help_raises_attack_by_five() {
        let actor = druid();
        let resolution = resolve(ActionId::AnimalHelp, &actor, &actor).unwrap();
        assert_eq!(delta_for(&resolution, Role::Actor, StatField::Attack), 5.0);
    }

    #[test]
    fn fight_damage_is_truncated_weighted_sum() {
        // trunc(0.25 * 20 + 0.75 * 5) = trunc(8.75) = 8
        let actor = druid();
        let target = warrior();
        let resolution = resolve(ActionId::Fight, &actor, &target).unwrap();
        assert_eq!(delta_for(&resolution, Role::Target, StatField::Life), -8.0);
    }

    #[test]
    fn brawl_doubles_attack_and_heals_half() {
        // attack 10: target takes 20, actor heals trunc(5) = 5
        let actor = warrior();
        let target = mage();
        let resolution = resolve(ActionId::Brawl, &actor, &target).unwrap();
        assert_eq!(delta_for(&resolution, Role::Target, StatField::Life), -20.0);
        assert_eq!(delta_for(&resolution, Role::Actor, StatField::Life), 5.0);
        // attack=10 against life=20 leaves the target at exactly 0
        match &resolution.events[0] {
            BattleEvent::Damage { remaining_life, .. } => assert_eq!(*remaining_life, 0.0),
            other => panic!("expected damage event, got {other:?}"),
        }
    }

    #[test]
    fn brawl_heal_truncates_toward_zero() {
        let actor = warrior().with_stats(20.0, 7.0);
        let target = mage();
        let resolution = resolve(ActionId::Brawl, &actor, &target).unwrap();
        assert_eq!(delta_for(&resolution, Role::Actor, StatField::Life), 3.0);
    }

    #[test]
    fn train_raises_both_stats_by_two() {
        let actor = warrior();
        let resolution = resolve(ActionId::Train, &actor, &actor).unwrap();
        assert_eq!(delta_for(&resolution, Role::Actor, StatField::Attack), 2.0);
        assert_eq!(delta_for(&resolution, Role::Actor, StatField::Life), 2.0);
    }

    #[test]
    fn roar_lowers_target_attack_by_three() {
        let actor = warrior();
        let target = druid();
        let resolution = resolve(ActionId::Roar, &actor, &target).unwrap();
        assert_eq!(delta_for(&resolution, Role::Target, StatField::Attack), -3.0);
    }

    #[test]
    fn curse_lowers_target_attack_by_two() {
        let actor = mage();
        let target = warrior();
        let resolution = resolve(ActionId::Curse, &actor, &target).unwrap();
        assert_eq!(delta_for(&resolution, Role::Target, StatField::Attack), -2.0);
    }

    #[test]
    fn summon_raises_attack_by_three() {
        let actor = mage();
        let resolution = resolve(ActionId::Summon, &actor, &actor).unwrap();
        assert_eq!(delta_for(&resolution, Role::Actor, StatField::Attack), 3.0);
    }

    #[test]
    fn cast_spell_deals_fractional_damage() {
        // attack 10 / life 20 = 0.5
        let actor = mage();
        let target = warrior();
        let resolution = resolve(ActionId::CastSpell, &actor, &target).unwrap();
        assert_eq!(delta_for(&resolution, Role::Target, StatField::Life), -0.5);
    }

    #[test]
    fn cast_spell_guards_division_by_zero() {
        let mut actor = mage();
        actor.life = 0.0;
        let target = warrior();
        assert_eq!(
            resolve(ActionId::CastSpell, &actor, &target).unwrap_err(),
            ResolveError::DivisionByZero {
                actor: CombatantId(2)
            }
        );
    }

    #[test]
    fn damage_events_report_predicted_remaining_life() {
        let actor = warrior();
        let target = druid();
        let resolution = resolve(ActionId::BasicAttack, &actor, &target).unwrap();
        match &resolution.events[0] {
            BattleEvent::Damage {
                amount,
                remaining_life,
                ..
            } => {
                assert_eq!(*amount, 10.0);
                assert_eq!(*remaining_life, 10.0);
            }
            other => panic!("expected damage event, got {other:?}"),
        }
    }
}
