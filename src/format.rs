//! Display Formatting
//!
//! id-ID rendering helpers for money and timestamps.

use wasm_bindgen::JsValue;

/// Rupiah display: "Rp " plus dot-grouped thousands (150000 -> "Rp 150.000").
pub fn rupiah(amount: i64) -> String {
    format!("Rp {}", group_thousands(amount))
}

/// id-ID thousands grouping with `.` separators.
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Server timestamp rendered in the id-ID locale, "-" when absent.
pub fn locale_datetime(value: Option<&str>) -> String {
    match value {
        Some(raw) if !raw.is_empty() => {
            let date = js_sys::Date::new(&JsValue::from_str(raw));
            date.to_locale_string("id-ID", &JsValue::UNDEFINED).into()
        }
        _ => "-".to_string(),
    }
}

/// Today as a long id-ID date (weekday, day, month) for the greeting line.
pub fn locale_date_long() -> String {
    let opts = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&opts, &"weekday".into(), &"long".into());
    let _ = js_sys::Reflect::set(&opts, &"day".into(), &"numeric".into());
    let _ = js_sys::Reflect::set(&opts, &"month".into(), &"long".into());
    let opts: JsValue = opts.into();
    js_sys::Date::new_0()
        .to_locale_date_string("id-ID", &opts)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupiah_groups_thousands_with_dots() {
        assert_eq!(rupiah(150000), "Rp 150.000");
        assert_eq!(rupiah(1500000), "Rp 1.500.000");
        assert_eq!(rupiah(999), "Rp 999");
        assert_eq!(rupiah(0), "Rp 0");
    }

    #[test]
    fn group_thousands_keeps_the_sign() {
        assert_eq!(group_thousands(-25000), "-25.000");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(100), "100");
    }
}
