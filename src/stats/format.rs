// Scorebook string formatting.
//
// Baseball convention is asymmetric: AVG, OBP, and fielding percentage drop
// the leading zero (".321"), while SLG, ERA, and WHIP keep it ("0.542",
// "3.42"). The zero-denominator placeholders follow the same split (".000"
// vs "0.00"), except SLG whose placeholder is ".000" despite its computed
// form keeping the leading digit. The asymmetry is a domain convention and
// must not be normalized away.

use crate::stats::rate::Rate;

/// Round half away from zero at `places` decimal places, returning the value
/// scaled to an integer. Inputs are non-negative, so `f64::round` (round
/// half away from zero) is exactly the rounding rule the scorebook uses.
fn scaled(value: f64, places: u32) -> i64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() as i64
}

/// Three decimal places with a leading zero stripped: 0.321 -> ".321".
///
/// Only the zero is stripped; a perfect 1.000 fielding percentage renders
/// "1.000". `Undefined` collapses to ".000".
pub fn thousandths_stripped(rate: Rate) -> String {
    match rate.value() {
        None => ".000".to_string(),
        Some(v) => {
            let s = scaled(v, 3);
            let whole = s / 1000;
            let frac = s % 1000;
            if whole == 0 {
                format!(".{frac:03}")
            } else {
                format!("{whole}.{frac:03}")
            }
        }
    }
}

/// Three decimal places with the leading digit kept: 0.571 -> "0.571".
///
/// `Undefined` collapses to ".000", the one spot where the stripped and
/// kept conventions cross over.
pub fn thousandths(rate: Rate) -> String {
    match rate.value() {
        None => ".000".to_string(),
        Some(v) => {
            let s = scaled(v, 3);
            format!("{}.{:03}", s / 1000, s % 1000)
        }
    }
}

/// Two decimal places with the leading digit kept: 3.4215 -> "3.42".
/// `Undefined` collapses to "0.00".
pub fn hundredths(rate: Rate) -> String {
    match rate.value() {
        None => "0.00".to_string(),
        Some(v) => {
            let s = scaled(v, 2);
            format!("{}.{:02}", s / 100, s % 100)
        }
    }
}
