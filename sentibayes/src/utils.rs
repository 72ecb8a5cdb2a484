use crate::errors::{Result, SentibayesError};

pub fn check_smoothing(arg: &'static str, value: f64) -> Result<()> {
    // `!(x > 0.0)` also catches NaN.
    if !(value > 0.0) || value.is_infinite() {
        return Err(SentibayesError::invalid_argument(
            arg,
            format!("must be a positive finite number, but got {value}"),
        ));
    }
    Ok(())
}

pub fn check_prior(arg: &'static str, value: f64) -> Result<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(SentibayesError::invalid_argument(
            arg,
            format!("must be in (0, 1), but got {value}"),
        ));
    }
    Ok(())
}

pub fn check_lambda(arg: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SentibayesError::invalid_argument(
            arg,
            format!("must be in [0, 1], but got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_smoothing() {
        assert!(check_smoothing("smoothing", 1e-10).is_ok());
        assert!(check_smoothing("smoothing", 0.0).is_err());
        assert!(check_smoothing("smoothing", -1.0).is_err());
        assert!(check_smoothing("smoothing", f64::NAN).is_err());
        assert!(check_smoothing("smoothing", f64::INFINITY).is_err());
        assert_eq!(
            "InvalidArgumentError: smoothing: must be a positive finite number, but got 0",
            &check_smoothing("smoothing", 0.0).unwrap_err().to_string()
        );
    }

    #[test]
    fn test_check_prior() {
        assert!(check_prior("pos_prior", 0.5).is_ok());
        assert!(check_prior("pos_prior", 0.0).is_err());
        assert!(check_prior("pos_prior", 1.0).is_err());
        assert!(check_prior("pos_prior", f64::NAN).is_err());
    }

    #[test]
    fn test_check_lambda() {
        assert!(check_lambda("bigram_lambda", 0.0).is_ok());
        assert!(check_lambda("bigram_lambda", 1.0).is_ok());
        assert!(check_lambda("bigram_lambda", 1.5).is_err());
        assert!(check_lambda("bigram_lambda", f64::NAN).is_err());
    }
}
