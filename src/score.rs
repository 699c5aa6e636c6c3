use crate::error::{Result, ScoreError};
use closed01::Closed01;
use std::fmt;

/// Significant digits printed for a score.
const PRECISION: usize = 6;

/// `5.333·x³ − 4·x² + 2.667·x`. Strictly increasing on `[0, 1]`, from 0 to about 4.
#[inline]
pub fn score_curve(x: Closed01<f64>) -> f64 {
    let x = x.get();
    5.333 * x * x * x - 4.0 * x * x + 2.667 * x
}

/// `hits / total`. An empty reference graph has no ratio.
pub fn match_ratio(hits: usize, total: usize) -> Result<Closed01<f64>> {
    if total == 0 {
        return Err(ScoreError::invalid_input(
            "cannot score against a graph without edges",
        ));
    }
    if hits > total {
        return Err(ScoreError::invalid_input(format!(
            "{} hits exceed the {} edges available",
            hits, total
        )));
    }
    Ok(Closed01::new(hits as f64 / total as f64))
}

pub fn score(hits: usize, total: usize) -> Result<Score> {
    Ok(Score(score_curve(match_ratio(hits, total)?)))
}

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Prints like a default C++ stream: six significant digits, no trailing zeros,
/// scientific notation for very small or large magnitudes.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v == 0.0 || !v.is_finite() {
            return write!(f, "{}", v);
        }
        let exponent = v.abs().log10().floor() as i32;
        if exponent < -4 || exponent >= PRECISION as i32 {
            let s = format!("{:.*e}", PRECISION - 1, v);
            let (mantissa, exp) = match s.find('e') {
                Some(pos) => (&s[..pos], &s[pos + 1..]),
                None => return f.write_str(&s),
            };
            let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
        } else {
            let decimals = (PRECISION as i32 - 1 - exponent) as usize;
            f.write_str(trim_fraction(&format!("{:.*}", decimals, v)))
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
