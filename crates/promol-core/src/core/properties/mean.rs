use thiserror::Error;

/// Tolerance below which an exponent is treated as integral.
const INTEGRAL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PowerMeanError {
    #[error("power mean of an empty value set is undefined")]
    EmptyInput,

    #[error("power mean with power = 0 is undefined")]
    ZeroPower,

    #[error("power mean with non-integer power {power} requires strictly positive values, got {value} at index {index}")]
    NonPositiveBase {
        power: f64,
        index: usize,
        value: f64,
    },

    #[error("power mean with power {power} is undefined for the given values")]
    Undefined { power: f64 },
}

fn integral_exponent(power: f64) -> Option<i32> {
    let rounded = power.round();
    if (power - rounded).abs() < INTEGRAL_TOLERANCE && rounded.abs() <= i32::MAX as f64 {
        Some(rounded as i32)
    } else {
        None
    }
}

/// Generalized (power) mean: `(1/n * sum(v_i^p))^(1/p)`.
///
/// `p = 1` is the arithmetic mean and accepts values of any sign. `p = 0` is
/// undefined. Non-integer powers require strictly positive values; integer
/// powers accept any sign but fail explicitly, never via NaN, when the rooted
/// mean has no real value.
pub fn power_mean(values: &[f64], power: f64) -> Result<f64, PowerMeanError> {
    if values.is_empty() {
        return Err(PowerMeanError::EmptyInput);
    }
    let exponent = integral_exponent(power);
    if exponent == Some(0) {
        return Err(PowerMeanError::ZeroPower);
    }
    if exponent.is_none() {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v <= 0.0) {
            return Err(PowerMeanError::NonPositiveBase {
                power,
                index,
                value,
            });
        }
    }

    let sum: f64 = match exponent {
        Some(1) => values.iter().sum(),
        Some(p) => values.iter().map(|v| v.powi(p)).sum(),
        None => values.iter().map(|v| v.powf(power)).sum(),
    };
    let mean = sum / values.len() as f64;

    // Near-integral powers root with the snapped exponent so the limit is exact.
    let result = match exponent {
        Some(1) => mean,
        Some(p) => mean.powf(1.0 / p as f64),
        None => mean.powf(1.0 / power),
    };

    if result.is_nan() {
        return Err(PowerMeanError::Undefined { power });
    }
    Ok(result)
}
