use anyhow::{bail, Result};
use jmt_planner::trajectory::{jerk_minimizing_trajectory, KinematicState};
use jmt_planner::verification::{CheckOutcome, ToleranceCheck};

/// One solver scenario with its reference coefficients
struct TestCase {
    start: [f64; 3],
    end: [f64; 3],
    duration: f64,
    expected: [f64; 6],
}

fn reference_cases() -> Vec<TestCase> {
    vec![
        TestCase {
            start: [0.0, 10.0, 0.0],
            end: [10.0, 10.0, 0.0],
            duration: 1.0,
            expected: [0.0, 10.0, 0.0, 0.0, 0.0, 0.0],
        },
        TestCase {
            start: [0.0, 10.0, 0.0],
            end: [20.0, 15.0, 20.0],
            duration: 2.0,
            expected: [0.0, 10.0, 0.0, 0.0, -0.625, 0.3125],
        },
        TestCase {
            start: [5.0, 10.0, 2.0],
            end: [-30.0, -20.0, -4.0],
            duration: 5.0,
            expected: [5.0, 10.0, 1.0, -3.0, 0.64, -0.0432],
        },
    ]
}

fn main() -> Result<()> {
    println!("Running quintic trajectory solver checks...");

    let check = ToleranceCheck::default();
    let mut all_passed = true;

    for (i, case) in reference_cases().iter().enumerate() {
        let start = KinematicState::from(case.start);
        let end = KinematicState::from(case.end);
        let poly = jerk_minimizing_trajectory(&start, &end, case.duration)?;

        match check.check(poly.coefficients(), &case.expected) {
            CheckOutcome::Pass => println!("case {}: passed", i + 1),
            CheckOutcome::LengthMismatch { actual, expected } => {
                println!(
                    "case {}: wrong coefficient count ({} instead of {})",
                    i + 1,
                    actual,
                    expected
                );
                all_passed = false;
            }
            CheckOutcome::ValueMismatch {
                index,
                actual,
                expected,
            } => {
                println!(
                    "case {}: coefficient {} differs by more than {} ({} vs {})",
                    i + 1,
                    index,
                    check.tolerance(),
                    actual,
                    expected
                );
                all_passed = false;
            }
        }
    }

    if !all_passed {
        bail!("trajectory output did not match the reference coefficients");
    }
    println!("All trajectory cases passed");
    Ok(())
}
