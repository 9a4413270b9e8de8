use crate::claims::{Claims, EXPIRATION};
use crate::error::{Error, Result};
use crate::limits::MAX_LEEWAY_MILLIS;
use miniserde::json::{Number, Value};

/// Configuration for token verification
///
/// The default applies the strict rule: a token is expired once `exp` is
/// less than or equal to the current time.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    leeway_millis: u64,
}

impl Validation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock skew tolerance for the `exp` check, in milliseconds
    ///
    /// # Security
    /// Leeway is limited to prevent effectively disabling expiration checks.
    /// Maximum allowed value is 300,000 ms (5 minutes).
    /// Values exceeding the limit are rejected during verification.
    pub fn leeway(mut self, millis: u64) -> Self {
        self.leeway_millis = millis;
        self
    }

    /// Configured leeway in milliseconds
    pub fn leeway_millis(&self) -> u64 {
        self.leeway_millis
    }

    /// Check configuration bounds
    pub(crate) fn check(&self) -> Result<()> {
        if self.leeway_millis > MAX_LEEWAY_MILLIS {
            return Err(Error::Configuration(format!(
                "leeway too large: {}ms (maximum: {}ms)",
                self.leeway_millis, MAX_LEEWAY_MILLIS
            )));
        }
        Ok(())
    }
}

/// Check the `exp` claim against `now` (milliseconds since the Unix epoch)
///
/// A missing or non-numeric `exp` counts as already expired.
pub(crate) fn validate_expiration(claims: &Claims, config: &Validation, now: i64) -> Result<()> {
    let expired = |expired_at| Error::ExpiredToken {
        expired_at,
        now,
        leeway: config.leeway_millis,
    };

    let exp = claims
        .get(EXPIRATION)
        .and_then(numeric_millis)
        .ok_or_else(|| expired(None))?;

    // i128 keeps `exp + leeway` free of overflow for any u64/i64 input
    if exp + i128::from(config.leeway_millis) <= i128::from(now) {
        return Err(expired(Some(saturate(exp))));
    }

    Ok(())
}

/// Numeric claim value as whole milliseconds, rounding fractions up
///
/// `now` is always whole, so `ceil(exp) <= now` holds exactly when
/// `exp <= now`.
fn numeric_millis(value: &Value) -> Option<i128> {
    match value {
        Value::Number(Number::U64(n)) => Some(i128::from(*n)),
        Value::Number(Number::I64(n)) => Some(i128::from(*n)),
        Value::Number(Number::F64(f)) if f.is_finite() => Some(f.ceil() as i128),
        _ => None,
    }
}

fn saturate(millis: i128) -> i64 {
    i64::try_from(millis).unwrap_or(if millis < 0 { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn claims_with_exp(exp: impl crate::claims::ClaimValue) -> Claims {
        Claims::new().with(EXPIRATION, exp)
    }

    #[test]
    fn test_future_exp_is_valid() {
        let claims = claims_with_exp(NOW + 1);
        assert!(validate_expiration(&claims, &Validation::default(), NOW).is_ok());
    }

    #[test]
    fn test_exp_equal_to_now_is_expired() {
        let claims = claims_with_exp(NOW);
        let result = validate_expiration(&claims, &Validation::default(), NOW);
        assert_eq!(
            result,
            Err(Error::ExpiredToken {
                expired_at: Some(NOW),
                now: NOW,
                leeway: 0
            })
        );
    }

    #[test]
    fn test_past_exp_is_expired() {
        let claims = claims_with_exp(NOW - 120_000);
        let result = validate_expiration(&claims, &Validation::default(), NOW);
        assert!(matches!(result, Err(Error::ExpiredToken { .. })));
    }

    #[test]
    fn test_missing_exp_is_expired() {
        let claims = Claims::new().with("sub", "alice");
        let result = validate_expiration(&claims, &Validation::default(), NOW);
        assert_eq!(
            result,
            Err(Error::ExpiredToken {
                expired_at: None,
                now: NOW,
                leeway: 0
            })
        );
    }

    #[test]
    fn test_non_numeric_exp_is_expired() {
        for claims in [
            claims_with_exp("9999999999999"),
            claims_with_exp(true),
            claims_with_exp(Value::Null),
            claims_with_exp(vec![NOW + 1000]),
        ] {
            let result = validate_expiration(&claims, &Validation::default(), NOW);
            assert!(
                matches!(result, Err(Error::ExpiredToken { expired_at: None, .. })),
                "exp {} should count as expired",
                claims.to_json()
            );
        }
    }

    #[test]
    fn test_fractional_exp() {
        // 0.5ms in the future is still in the future
        let claims = claims_with_exp(NOW as f64 + 0.5);
        assert!(validate_expiration(&claims, &Validation::default(), NOW).is_ok());

        let claims = claims_with_exp(NOW as f64 - 0.5);
        assert!(validate_expiration(&claims, &Validation::default(), NOW).is_err());
    }

    #[test]
    fn test_fractional_exp_reports_rounded_instant() {
        let claims = Claims::from_json(r#"{"exp":999.5}"#).unwrap();
        assert_eq!(
            validate_expiration(&claims, &Validation::default(), 2000),
            Err(Error::ExpiredToken {
                expired_at: Some(1000),
                now: 2000,
                leeway: 0
            })
        );
    }

    #[test]
    fn test_huge_exp_does_not_overflow() {
        let claims = claims_with_exp(u64::MAX);
        let config = Validation::default().leeway(MAX_LEEWAY_MILLIS);
        assert!(validate_expiration(&claims, &config, NOW).is_ok());

        let claims = claims_with_exp(i64::MIN);
        assert!(matches!(
            validate_expiration(&claims, &config, NOW),
            Err(Error::ExpiredToken {
                expired_at: Some(i64::MIN),
                ..
            })
        ));
    }

    #[test]
    fn test_leeway() {
        // Expired 30 seconds ago, inside a 60 second leeway
        let claims = claims_with_exp(NOW - 30_000);
        let config = Validation::default().leeway(60_000);
        assert!(validate_expiration(&claims, &config, NOW).is_ok());

        // Expired 90 seconds ago, outside a 60 second leeway
        let claims = claims_with_exp(NOW - 90_000);
        let result = validate_expiration(&claims, &config, NOW);
        assert!(matches!(
            result,
            Err(Error::ExpiredToken { leeway: 60_000, .. })
        ));
    }

    #[test]
    fn test_leeway_bounds() {
        assert!(Validation::default().check().is_ok());
        assert!(Validation::default().leeway(MAX_LEEWAY_MILLIS).check().is_ok());
        assert!(matches!(
            Validation::default().leeway(MAX_LEEWAY_MILLIS + 1).check(),
            Err(Error::Configuration(_))
        ));
    }
}
