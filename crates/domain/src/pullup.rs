use crate::{ProgramConfig, Quantity, Week, format_weight, round_to_nearest};

/// Lifters with 1 to this many unbroken reps accumulate volume with low-rep sets.
const ACCUMULATION_MAX_REPS: f64 = 7.0;
/// Lifters with at least this many unbroken reps start the cycle at bodyweight.
const BODYWEIGHT_START_MIN_REPS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullUpInput {
    pub week: Week,
    /// Lifetime maximum of unbroken reps, as entered in the 1RM table.
    pub max_reps: f64,
    /// Actual weight of the preceding week, 0 if not logged or bodyweight.
    pub prev_week_weight: f64,
    /// Actual total reps of the preceding week, 0 if not logged.
    pub prev_week_reps: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullUpSuggestion {
    pub sets: Quantity,
    pub reps: Quantity,
    /// Added weight, 0 means bodyweight.
    pub weight: f64,
    pub notes: String,
}

/// Autoregulated pull-up progression.
///
/// The deload week scales down the preceding week. In all other weeks, lifters without a
/// single rep train negatives and lifters with few reps accumulate low-rep sets. Everyone
/// else adds weight once the average reps per set of the preceding week exceed the threshold.
/// The average is based on the prescribed set count, not the number of sets performed.
/// Regimes are selected on the entered value as is, so values such as 7.5 or -1 fall into
/// neither regime.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn suggest(config: &ProgramConfig, input: &PullUpInput) -> PullUpSuggestion {
    if input.week.is_deload() {
        return suggest_deload(config, input);
    }

    let pullup = &config.pullup;
    let mut sets = Quantity::Fixed(pullup.sets);
    let mut reps = pullup.reps.clone();
    let mut weight = 0.0;
    let mut base_notes = "Aim for reps.".to_string();
    let mut progression_notes = String::new();

    if let Some(prev_week) = input.week.previous() {
        let threshold = pullup.reps_per_set_threshold;
        let avg_reps_per_set = if pullup.sets > 0 {
            f64::from(input.prev_week_reps) / f64::from(pullup.sets)
        } else {
            0.0
        };
        if avg_reps_per_set > f64::from(threshold) {
            weight = input.prev_week_weight + pullup.increment;
            progression_notes = format!(
                "Add {} lbs (Avg >{threshold} reps/set Wk{prev_week})",
                format_weight(pullup.increment)
            );
        } else {
            weight = input.prev_week_weight;
            progression_notes = if input.prev_week_weight > 0.0 {
                format!(
                    "Repeat {} lbs (Avg reps/set <= {threshold} Wk{prev_week})",
                    format_weight(input.prev_week_weight)
                )
            } else {
                format!("Repeat BW (Avg reps/set <= {threshold} Wk{prev_week})")
            };
        }
    } else if input.max_reps >= BODYWEIGHT_START_MIN_REPS {
        progression_notes = "Start Bodyweight".to_string();
    }

    if input.max_reps == 0.0 {
        sets = Quantity::Range(3, 5);
        reps = Quantity::Label("3-5 Negatives".to_string());
        weight = 0.0;
        base_notes = "Focus on Negatives (3-5 sec lowering)".to_string();
        progression_notes.clear();
    } else if (1.0..=ACCUMULATION_MAX_REPS).contains(&input.max_reps) {
        sets = Quantity::Label("Multiple".to_string());
        reps = Quantity::Range(1, 3);
        weight = 0.0;
        base_notes = format!(
            "Accumulate reps via low-rep sets (Max: {})",
            format_weight(input.max_reps)
        );
        progression_notes.clear();
    }

    PullUpSuggestion {
        sets,
        reps,
        weight,
        notes: format!("{base_notes} {progression_notes}").trim().to_string(),
    }
}

fn suggest_deload(config: &ProgramConfig, input: &PullUpInput) -> PullUpSuggestion {
    let pullup = &config.pullup;
    let sets = Quantity::Fixed(pullup.deload_sets);

    if input.prev_week_weight > 0.0 {
        if input.prev_week_weight <= pullup.increment * 2.0 {
            return PullUpSuggestion {
                sets,
                reps: Quantity::Fixed(pullup.deload_reps),
                weight: 0.0,
                notes: format!(
                    "Deload: Bodyweight Focus (~50% Wk5 reps: {})",
                    input.prev_week_reps
                ),
            };
        }
        return PullUpSuggestion {
            sets,
            reps: Quantity::Fixed(pullup.deload_reps),
            weight: round_to_nearest(
                input.prev_week_weight * pullup.deload_percentage,
                config.weight_rounding,
            ),
            notes: format!(
                "Deload: Use ~{:.0}% of Week 5 weight ({} lbs)",
                pullup.deload_percentage * 100.0,
                format_weight(input.prev_week_weight)
            ),
        };
    }

    if input.prev_week_reps > 0 {
        let total_reps = (input.prev_week_reps / 2).max(1);
        let reps_per_set = if pullup.deload_sets > 0 {
            (total_reps / pullup.deload_sets).max(3)
        } else {
            3
        };
        return PullUpSuggestion {
            sets,
            reps: Quantity::Label(format!("~{reps_per_set}")),
            weight: 0.0,
            notes: format!(
                "Deload: ~50% of Week 5 total reps ({} reps)",
                input.prev_week_reps
            ),
        };
    }

    PullUpSuggestion {
        sets,
        reps: Quantity::Label("Light".to_string()),
        weight: 0.0,
        notes: "Deload: Light effort".to_string(),
    }
}
