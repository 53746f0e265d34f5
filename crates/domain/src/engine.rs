use std::fmt;

use crate::{
    ExerciseSlot, LogKey, OneRepMaxTable, PerformanceEntry, PerformanceLog, Position,
    ProgramConfig, ProgramTemplate, Quantity, Role, SlotID, Week, format_weight,
    main_lift::{self, MainLiftInput},
    pullup::{self, PullUpInput},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetWeight {
    /// Load in the unit of the 1RM table, 0 means bodyweight.
    Load(f64),
    UserChoice,
}

impl TargetWeight {
    #[must_use]
    pub fn load(self) -> Option<f64> {
        match self {
            TargetWeight::Load(load) => Some(load),
            TargetWeight::UserChoice => None,
        }
    }
}

impl fmt::Display for TargetWeight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TargetWeight::Load(load) => write!(f, "{}", format_weight(*load)),
            TargetWeight::UserChoice => write!(f, "User Choice"),
        }
    }
}

/// Actual performance shown next to a prescription.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Actual {
    pub weight: f64,
    pub reps: u32,
    /// The weight is the target weight rather than a logged value.
    pub prefilled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub key: LogKey,
    pub slot: ExerciseSlot,
    pub sets: Quantity,
    pub reps: Quantity,
    pub target_weight: TargetWeight,
    pub notes: String,
    pub actual: Actual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayPrescription {
    pub label: String,
    pub prescriptions: Vec<Prescription>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekPrescription {
    pub week: Week,
    pub days: Vec<DayPrescription>,
}

/// Computes prescriptions from the template, the lifter's 1RM table and the performance log.
///
/// The engine holds no mutable state and performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: ProgramConfig,
    template: ProgramTemplate,
}

impl Engine {
    #[must_use]
    pub fn new(config: ProgramConfig, template: ProgramTemplate) -> Self {
        Self { config, template }
    }

    #[must_use]
    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    #[must_use]
    pub fn template(&self) -> &ProgramTemplate {
        &self.template
    }

    #[must_use]
    pub fn prescribe_week(
        &self,
        week: Week,
        one_rep_max: &OneRepMaxTable,
        log: &PerformanceLog,
    ) -> WeekPrescription {
        let days = self
            .template
            .days(week)
            .iter()
            .enumerate()
            .map(|(day, d)| DayPrescription {
                label: d.label.clone(),
                prescriptions: d
                    .exercises
                    .iter()
                    .enumerate()
                    .map(|(exercise, slot)| {
                        self.prescribe_slot(
                            LogKey::new(week, day, exercise),
                            slot,
                            one_rep_max,
                            log,
                        )
                    })
                    .collect(),
            })
            .collect();
        WeekPrescription { week, days }
    }

    #[must_use]
    pub fn prescribe(
        &self,
        week: Week,
        position: Position,
        one_rep_max: &OneRepMaxTable,
        log: &PerformanceLog,
    ) -> Option<Prescription> {
        let slot = self.template.slot(week, position)?;
        Some(self.prescribe_slot(
            LogKey { week, position },
            slot,
            one_rep_max,
            log,
        ))
    }

    fn prescribe_slot(
        &self,
        key: LogKey,
        slot: &ExerciseSlot,
        one_rep_max: &OneRepMaxTable,
        log: &PerformanceLog,
    ) -> Prescription {
        let config = &self.config;
        let week = key.week;
        let prev_week = self.previous_entry(week, slot.id, log);

        let (sets, reps, target_weight, mut notes) = match slot.role {
            Role::MainLiftUpper | Role::MainLiftLower => {
                let target = main_lift::target(
                    config,
                    &MainLiftInput {
                        week,
                        one_rep_max: one_rep_max.get_or_baseline(&slot.name, config),
                        prev_week,
                    },
                );
                (
                    config.main_lift.sets(week).clone(),
                    config.main_lift.reps(week).clone(),
                    TargetWeight::Load(target.weight),
                    format!("{} {}", slot.notes, target.notes),
                )
            }
            Role::Pullup => {
                let prev_week = prev_week.unwrap_or_default();
                let suggestion = pullup::suggest(
                    config,
                    &PullUpInput {
                        week,
                        max_reps: one_rep_max
                            .get_or_baseline(&config.pullup.exercise_name, config),
                        prev_week_weight: prev_week.actual_weight,
                        prev_week_reps: prev_week.actual_reps,
                    },
                );
                (
                    suggestion.sets,
                    suggestion.reps,
                    TargetWeight::Load(suggestion.weight),
                    suggestion.notes,
                )
            }
            Role::Accessory | Role::Core => {
                let (sets, reps) = if week.is_deload() {
                    (
                        config.accessory.deload_sets.clone(),
                        config.accessory.deload_reps.clone(),
                    )
                } else {
                    (slot.base_sets.clone(), slot.base_reps.clone())
                };
                (
                    sets,
                    reps,
                    TargetWeight::UserChoice,
                    format!(
                        "{} {}",
                        slot.notes,
                        main_lift::accessory_notes(week, &slot.base_reps)
                    ),
                )
            }
        };

        let logged = log.get(&key).copied().unwrap_or_default();
        let mut actual = Actual {
            weight: logged.actual_weight,
            reps: logged.actual_reps,
            prefilled: false,
        };
        if week.is_first() && !slot.role.is_user_choice() {
            if let Some(load) = target_weight.load() {
                actual.weight = load;
                actual.prefilled = true;
                notes.push_str(" (Actual Wt pre-filled w/ Target)");
            }
        }

        Prescription {
            key,
            slot: slot.clone(),
            sets,
            reps,
            target_weight,
            notes: notes.trim().to_string(),
            actual,
        }
    }

    /// Entry of the same slot in the preceding week, looked up by slot identifier.
    fn previous_entry(
        &self,
        week: Week,
        id: SlotID,
        log: &PerformanceLog,
    ) -> Option<PerformanceEntry> {
        let prev_week = week.previous()?;
        let position = self.template.position(prev_week, id)?;
        log.get(&LogKey {
            week: prev_week,
            position,
        })
        .copied()
    }
}
