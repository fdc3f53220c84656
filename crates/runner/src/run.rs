use anyhow::Result;
use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bestiary_domain::{
    AnyCreature, BirthDate, CreatureName, DamageOutcome, DomainError, Dragon, Elf, HealOutcome,
    Orc, RestoreOutcome,
};

const DRAGON_HEALTH: i32 = 90;
const DRAGON_FIRE_POWER: i32 = 15;

const ELF_HEALTH: i32 = 70;
const ELF_MANA: i32 = 8;

const ORC_HEALTH: i32 = 85;
const ORC_RAGE: i32 = 4;

const VETERAN_ORC_RAGE: i32 = 18;

pub fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bestiary=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Assembling the bestiary");

    let mut smolder = Dragon::new(
        CreatureName::new("Smolder")?,
        birth_date(2015, 7, 4)?,
        DRAGON_HEALTH,
        DRAGON_FIRE_POWER,
    )?;
    let mut elowen = Elf::new(
        CreatureName::new("Elowen")?,
        birth_date(2019, 11, 2)?,
        ELF_HEALTH,
        ELF_MANA,
    )?;
    let mut gruk = Orc::new(
        CreatureName::new("Gruk")?,
        birth_date(2021, 1, 20)?,
        ORC_HEALTH,
        ORC_RAGE,
    )?;
    let mut urzok = Orc::new(
        CreatureName::new("Urzok")?,
        birth_date(2012, 3, 15)?,
        ORC_HEALTH,
        VETERAN_ORC_RAGE,
    )?;

    for summary in [
        smolder.summary(),
        elowen.summary(),
        gruk.summary(),
        urzok.summary(),
    ] {
        tracing::info!("{summary}");
    }

    tracing::info!("--- combat begins ---");

    // Dragon vs elf: the first breath succeeds, the second runs dry.
    let outcome = smolder.breathe_fire(elowen.creature_mut())?;
    report_hit("Smolder", "Elowen", &outcome);

    match smolder.breathe_fire(elowen.creature_mut()) {
        Ok(outcome) => report_hit("Smolder", "Elowen", &outcome),
        Err(err) if err.is_resource_shortage() => {
            tracing::warn!("Smolder falters: {err}");
            if let RestoreOutcome::Restored { new_level, .. } = smolder.restore_fire_power(20)? {
                tracing::info!("Smolder rekindles to fire power {new_level}");
            }
            let outcome = smolder.breathe_fire(elowen.creature_mut())?;
            report_hit("Smolder", "Elowen", &outcome);
        }
        Err(err) => return Err(err.into()),
    }

    // Elf vs orc: same shape, mana instead of fire power.
    let outcome = elowen.cast_spell(gruk.creature_mut())?;
    report_hit("Elowen", "Gruk", &outcome);

    match elowen.cast_spell(gruk.creature_mut()) {
        Ok(outcome) => report_hit("Elowen", "Gruk", &outcome),
        Err(err) if err.is_resource_shortage() => {
            tracing::warn!("Elowen falters: {err}");
            if let RestoreOutcome::Restored { new_level, .. } = elowen.restore_mana(10)? {
                tracing::info!("Elowen meditates back to mana {new_level}");
            }
            let outcome = elowen.cast_spell(gruk.creature_mut())?;
            report_hit("Elowen", "Gruk", &outcome);
        }
        Err(err) => return Err(err.into()),
    }

    // Gruk is too calm to berserk; rage has no restore, it only builds in battle.
    match gruk.berserk(smolder.creature_mut()) {
        Ok(outcome) => report_hit("Gruk", "Smolder", &outcome),
        Err(err @ DomainError::LowRage { .. }) => {
            tracing::warn!("Gruk stays calm: {err}");
        }
        Err(err) => return Err(err.into()),
    }

    // Urzok starts angry enough for the frenzied damage tier.
    let outcome = urzok.berserk(smolder.creature_mut())?;
    tracing::info!("Urzok's rage climbs to {}", urzok.rage());
    report_hit("Urzok", "Smolder", &outcome);

    // Negative amounts are recoverable, caller-expected rejections.
    match elowen.creature_mut().take_damage(-1) {
        Err(DomainError::InvalidDamage { amount }) => {
            tracing::warn!("rejected negative damage: {amount}");
        }
        other => anyhow::bail!("negative damage must be rejected, got {other:?}"),
    }
    match elowen.creature_mut().heal(-1) {
        Err(DomainError::InvalidHeal { amount }) => {
            tracing::warn!("rejected negative healing: {amount}");
        }
        other => anyhow::bail!("negative healing must be rejected, got {other:?}"),
    }

    match elowen.creature_mut().heal(15)? {
        HealOutcome::Healed { new_health, .. } => {
            tracing::info!("Elowen mends her wounds to health {new_health}");
        }
        HealOutcome::Revived { new_health } => {
            tracing::info!("Elowen rises again at health {new_health}");
        }
        HealOutcome::AlreadyFull => tracing::info!("Elowen is already whole"),
    }

    tracing::info!("--- the dust settles ---");

    let roster: Vec<AnyCreature> = vec![
        smolder.into(),
        elowen.into(),
        gruk.into(),
        urzok.into(),
    ];
    for member in &roster {
        let status = if member.creature().is_alive() {
            "alive"
        } else {
            "down"
        };
        tracing::info!("[{}] {} ({status})", member.kind(), member.summary());
    }

    Ok(())
}

fn birth_date(year: i32, month: u32, day: u32) -> Result<BirthDate> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::anyhow!("invalid calendar date: {year}-{month:02}-{day:02}"))?;
    Ok(BirthDate::new(date)?)
}

fn report_hit(attacker: &str, target: &str, outcome: &DamageOutcome) {
    match outcome {
        DamageOutcome::Wounded {
            damage_dealt,
            remaining_health,
        } => {
            tracing::info!(
                "{attacker} hits {target} for {damage_dealt}, leaving them at {remaining_health}"
            );
        }
        DamageOutcome::Slain { damage_dealt } => {
            tracing::info!("{attacker} fells {target} with a {damage_dealt} damage blow");
        }
        DamageOutcome::AlreadyDown => {
            tracing::info!("{attacker} strikes {target}, but they are already down");
        }
    }
}
