use std::collections::BTreeSet;

use derive_more::Deref;
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::{Quantity, Week};

#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    MainLiftUpper,
    MainLiftLower,
    Pullup,
    Accessory,
    Core,
}

impl Role {
    #[must_use]
    pub fn is_main_lift(self) -> bool {
        matches!(self, Role::MainLiftUpper | Role::MainLiftLower)
    }

    /// Roles whose target load is left to the lifter.
    #[must_use]
    pub fn is_user_choice(self) -> bool {
        matches!(self, Role::Accessory | Role::Core)
    }
}

/// Identifies a slot across all weeks of the program, independent of the exercise name.
#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SlotID(Uuid);

impl SlotID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SlotID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SlotID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSlot {
    pub id: SlotID,
    pub name: String,
    pub role: Role,
    pub base_sets: Quantity,
    pub base_reps: Quantity,
    pub rest: String,
    pub rpe: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub label: String,
    pub exercises: Vec<ExerciseSlot>,
}

/// Position of a slot within a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub day: usize,
    pub exercise: usize,
}

/// Schedule of six weeks, each with the same days and slots.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramTemplate {
    weeks: Vec<Vec<Day>>,
}

impl ProgramTemplate {
    pub fn new(weeks: Vec<Vec<Day>>) -> Result<Self, TemplateError> {
        let expected_weeks = Week::all().count();
        if weeks.len() != expected_weeks {
            return Err(TemplateError::WeekCount(weeks.len()));
        }

        let reference = &weeks[0];
        if reference.is_empty() {
            return Err(TemplateError::NoDays);
        }

        let mut ids = BTreeSet::new();
        for slot in reference.iter().flat_map(|day| &day.exercises) {
            if slot.id.is_nil() || !ids.insert(slot.id) {
                return Err(TemplateError::InvalidSlotID(slot.id));
            }
        }

        for (week, days) in Week::all().zip(&weeks) {
            if days.len() != reference.len() {
                return Err(TemplateError::DayCount {
                    week,
                    expected: reference.len(),
                    actual: days.len(),
                });
            }
            for (day, (exercises, reference_day)) in days
                .iter()
                .map(|d| &d.exercises)
                .zip(reference)
                .enumerate()
            {
                if exercises.len() != reference_day.exercises.len() {
                    return Err(TemplateError::ExerciseCount {
                        week,
                        day,
                        expected: reference_day.exercises.len(),
                        actual: exercises.len(),
                    });
                }
                for (exercise, (slot, reference_slot)) in
                    exercises.iter().zip(&reference_day.exercises).enumerate()
                {
                    if slot.id != reference_slot.id || slot.role != reference_slot.role {
                        return Err(TemplateError::SlotMismatch {
                            week,
                            day,
                            exercise,
                        });
                    }
                }
            }
        }

        Ok(Self { weeks })
    }

    #[must_use]
    pub fn days(&self, week: Week) -> &[Day] {
        &self.weeks[week.index()]
    }

    #[must_use]
    pub fn slot(&self, week: Week, position: Position) -> Option<&ExerciseSlot> {
        self.days(week)
            .get(position.day)
            .and_then(|day| day.exercises.get(position.exercise))
    }

    #[must_use]
    pub fn position(&self, week: Week, id: SlotID) -> Option<Position> {
        self.days(week)
            .iter()
            .enumerate()
            .find_map(|(day, d)| {
                d.exercises
                    .iter()
                    .position(|slot| slot.id == id)
                    .map(|exercise| Position { day, exercise })
            })
    }

    /// The four-day upper/lower split used by default.
    #[must_use]
    pub fn standard() -> Self {
        let weeks = Week::all().map(standard_week).collect();
        Self { weeks }
    }
}

impl Default for ProgramTemplate {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TemplateError {
    #[error("template must contain 6 weeks ({0})")]
    WeekCount(usize),
    #[error("template must contain at least one day")]
    NoDays,
    #[error("slot identifier must be non-nil and unique ({0:?})")]
    InvalidSlotID(SlotID),
    #[error("week {week} must contain {expected} days ({actual})")]
    DayCount {
        week: Week,
        expected: usize,
        actual: usize,
    },
    #[error("day {day} of week {week} must contain {expected} exercises ({actual})")]
    ExerciseCount {
        week: Week,
        day: usize,
        expected: usize,
        actual: usize,
    },
    #[error("exercise {exercise} of day {day} in week {week} differs from week 1")]
    SlotMismatch {
        week: Week,
        day: usize,
        exercise: usize,
    },
}

fn standard_week(week: Week) -> Vec<Day> {
    let loaded_core = (3..=5).contains(&u8::from(week));
    let plank = if loaded_core { "Weighted Plank" } else { "Plank" };
    let leg_raise = if loaded_core {
        "Weighted Hanging Leg Raise"
    } else {
        "Hanging Leg Raise"
    };
    let pullup = crate::PULLUP_EXERCISE_NAME;

    vec![
        day(
            "Monday (UA)",
            vec![
                slot(11, "Incline DB Press", Role::MainLiftUpper, "3-4", "Main Lift"),
                slot(12, "Overhead Press (OHP)", Role::Accessory, "2-3", "Lighter OHP day"),
                slot(13, pullup, Role::Pullup, "See T2", "Follow specific progression"),
                slot(14, "Barbell Row", Role::Accessory, "1.5-2", "Accessory"),
                slot(15, "Triceps Pushdown", Role::Accessory, "1-1.5", "Accessory"),
            ],
        ),
        day(
            "Tuesday (LA)",
            vec![
                slot(21, "Back Squat", Role::MainLiftLower, "3-5", "Main Lift"),
                slot(22, "Romanian Deadlift (RDL)", Role::Accessory, "2-3", "Accessory"),
                slot(23, "Leg Press", Role::Accessory, "1.5-2", "Accessory"),
                slot(24, "Hamstring Curl", Role::Accessory, "1-1.5", "Accessory"),
                slot(25, plank, Role::Core, "1", "Core"),
            ],
        ),
        day(
            "Thursday (UB)",
            vec![
                slot(31, "Overhead Press (OHP)", Role::MainLiftUpper, "3-4", "Main Lift"),
                slot(32, "Incline DB Press", Role::Accessory, "2-3", "Lighter Incline day"),
                slot(33, pullup, Role::Pullup, "See T2", "Follow specific progression"),
                slot(34, "Lat Pulldown", Role::Accessory, "1.5-2", "Accessory"),
                slot(35, "Dumbbell Bench Press", Role::Accessory, "1-1.5", "Accessory"),
            ],
        ),
        day(
            "Friday (LB)",
            vec![
                slot(41, "Deadlift", Role::MainLiftLower, "4-5", "Main Lift (1 top set)"),
                slot(42, "Front Squat", Role::Accessory, "2-3", "Accessory"),
                slot(43, "Glute Bridge/Hip Thrust", Role::Accessory, "1.5-2", "Accessory"),
                slot(44, "Standing Calf Raise", Role::Accessory, "1-1.5", "Accessory"),
                slot(45, leg_raise, Role::Core, "1", "Core"),
            ],
        ),
    ]
}

fn day(label: &str, exercises: Vec<ExerciseSlot>) -> Day {
    Day {
        label: label.to_string(),
        exercises,
    }
}

fn slot(id: u128, name: &str, role: Role, rest: &str, notes: &str) -> ExerciseSlot {
    let (base_sets, base_reps) = match role {
        Role::MainLiftUpper | Role::MainLiftLower => (Quantity::Range(3, 4), Quantity::Range(8, 10)),
        Role::Pullup => (Quantity::Fixed(3), Quantity::Range(8, 10)),
        Role::Accessory | Role::Core => (Quantity::Fixed(3), Quantity::Range(10, 15)),
    };
    ExerciseSlot {
        id: id.into(),
        name: name.to_string(),
        role,
        base_sets,
        base_reps,
        rest: rest.to_string(),
        rpe: 0,
        notes: notes.to_string(),
    }
}
