use crate::{PerformanceEntry, ProgramConfig, Quantity, Week, round_to_nearest};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MainLiftInput {
    pub week: Week,
    pub one_rep_max: f64,
    /// Logged performance of the same slot in the preceding week.
    pub prev_week: Option<PerformanceEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainLiftTarget {
    pub weight: f64,
    /// Explanation appended to the slot notes.
    pub notes: String,
}

/// Target weight of a barbell lift.
///
/// Week 1 and the deload week are a fixed percentage of the 1RM. In between, the weight of the
/// preceding week is increased only if the prescribed total reps of that week were reached.
#[must_use]
pub fn target(config: &ProgramConfig, input: &MainLiftInput) -> MainLiftTarget {
    let main_lift = &config.main_lift;
    let rounding = config.weight_rounding;

    if input.week.is_deload() {
        return MainLiftTarget {
            weight: round_to_nearest(input.one_rep_max * main_lift.deload_percentage, rounding),
            notes: format!(
                "(Deload Target: {:.0}% 1RM)",
                main_lift.deload_percentage * 100.0
            ),
        };
    }

    let initial_weight = input.one_rep_max * main_lift.initial_percentage;

    let Some(prev_week) = input.week.previous() else {
        return MainLiftTarget {
            weight: round_to_nearest(initial_weight, rounding),
            notes: format!(
                "(Wk1 Target: {:.1}% 1RM)",
                main_lift.initial_percentage * 100.0
            ),
        };
    };

    let performance = input.prev_week.unwrap_or_default();
    let prev_weight = if performance.actual_weight > 0.0 {
        performance.actual_weight
    } else {
        initial_weight
    };
    let prescribed_reps = main_lift.prescribed_total_reps(prev_week);

    if prescribed_reps > 0 && performance.actual_reps >= prescribed_reps {
        MainLiftTarget {
            weight: round_to_nearest(prev_weight * (1.0 + main_lift.increase_on_success), rounding),
            notes: format!(
                "(Target based on Wk{prev_week} Actuals. Increase by {:.0}% if reps >= {prescribed_reps})",
                main_lift.increase_on_success * 100.0
            ),
        }
    } else {
        MainLiftTarget {
            weight: round_to_nearest(prev_weight, rounding),
            notes: format!("(Target based on Wk{prev_week} Actuals)"),
        }
    }
}

/// Note appended to accessory and core slots, whose load is chosen by the lifter.
#[must_use]
pub fn accessory_notes(week: Week, reps: &Quantity) -> String {
    if week.is_deload() {
        "(Deload)".to_string()
    } else {
        format!(
            "(Increase wt ~2-3% when hitting {} reps)",
            reps.upper_bound()
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn input(week: u8, one_rep_max: f64, prev_week: Option<(f64, u32)>) -> MainLiftInput {
        MainLiftInput {
            week: Week::new(week).unwrap(),
            one_rep_max,
            prev_week: prev_week.map(|(actual_weight, actual_reps)| PerformanceEntry {
                actual_weight,
                actual_reps,
            }),
        }
    }

    #[rstest]
    #[case(275.0, 170.0)]
    #[case(280.0, 175.0)]
    #[case(155.0, 95.0)]
    #[case(0.0, 0.0)]
    fn test_target_week_1(#[case] one_rep_max: f64, #[case] expected: f64) {
        let target = target(&ProgramConfig::default(), &input(1, one_rep_max, None));
        assert_approx_eq!(target.weight, expected);
        assert_eq!(target.notes, "(Wk1 Target: 62.5% 1RM)");
    }

    #[rstest]
    #[case(None)]
    #[case(Some((300.0, 40)))]
    fn test_target_deload_ignores_history(#[case] prev_week: Option<(f64, u32)>) {
        let target = target(&ProgramConfig::default(), &input(6, 275.0, prev_week));
        assert_approx_eq!(target.weight, 150.0);
        assert_eq!(target.notes, "(Deload Target: 55% 1RM)");
    }

    #[test]
    fn test_target_increase_when_prescribed_reps_reached() {
        assert_eq!(
            target(
                &ProgramConfig::default(),
                &input(3, 275.0, Some((185.0, 40)))
            ),
            MainLiftTarget {
                weight: 190.0,
                notes: "(Target based on Wk2 Actuals. Increase by 4% if reps >= 24)".to_string(),
            }
        );
    }

    #[rstest]
    #[case(24, 190.0)]
    #[case(23, 185.0)]
    #[case(0, 185.0)]
    fn test_target_threshold_is_prescribed_total_reps(
        #[case] actual_reps: u32,
        #[case] expected: f64,
    ) {
        let target = target(
            &ProgramConfig::default(),
            &input(3, 275.0, Some((185.0, actual_reps))),
        );
        assert_approx_eq!(target.weight, expected);
    }

    #[test]
    fn test_target_repeat_rounds_prior_weight() {
        assert_eq!(
            target(
                &ProgramConfig::default(),
                &input(4, 275.0, Some((183.0, 10)))
            ),
            MainLiftTarget {
                weight: 185.0,
                notes: "(Target based on Wk3 Actuals)".to_string(),
            }
        );
    }

    #[rstest]
    #[case(None, 170.0)]
    #[case(Some((0.0, 30)), 180.0)]
    #[case(Some((0.0, 5)), 170.0)]
    fn test_target_seeds_missing_weight_from_one_rep_max(
        #[case] prev_week: Option<(f64, u32)>,
        #[case] expected: f64,
    ) {
        let target = target(&ProgramConfig::default(), &input(2, 275.0, prev_week));
        assert_approx_eq!(target.weight, expected);
    }

    #[test]
    fn test_target_no_increase_without_prescribed_reps() {
        let mut config = ProgramConfig::default();
        config.main_lift.reps[0] = Quantity::Label("AMRAP".to_string());
        let target = target(&config, &input(2, 275.0, Some((185.0, 50))));
        assert_approx_eq!(target.weight, 185.0);
    }

    #[rstest]
    #[case(1, Quantity::Range(10, 15), "(Increase wt ~2-3% when hitting 15 reps)")]
    #[case(5, Quantity::Fixed(12), "(Increase wt ~2-3% when hitting 12 reps)")]
    #[case(6, Quantity::Range(10, 15), "(Deload)")]
    fn test_accessory_notes(#[case] week: u8, #[case] reps: Quantity, #[case] expected: &str) {
        assert_eq!(accessory_notes(Week::new(week).unwrap(), &reps), expected);
    }
}
