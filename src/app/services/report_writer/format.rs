/// Format an amount with thousands separators and two decimals: ₹1,234.56
pub fn money(val: f64, symbol: &str) -> String {
    let (sign, digits) = group_thousands(val, 2);
    format!("{sign}{symbol}{digits}")
}

/// Format an amount rounded to whole units: ₹1,235
pub fn money_whole(val: f64, symbol: &str) -> String {
    let (sign, digits) = group_thousands(val, 0);
    format!("{sign}{symbol}{digits}")
}

/// Two-decimal percentage: 12.50%
pub fn percent(val: f64) -> String {
    format!("{:.2}%", val)
}

/// Float as written to data files; always carries a decimal point
pub fn plain_float(val: f64) -> String {
    format!("{:?}", val)
}

fn group_thousands(val: f64, decimals: usize) -> (&'static str, String) {
    let negative = val < 0.0;
    let fixed = format!("{:.*}", decimals, val.abs());
    let (int_part, dec_part) = match fixed.split_once('.') {
        Some((int_part, dec_part)) => (int_part, Some(dec_part)),
        None => (fixed.as_str(), None),
    };

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let mut grouped: String = with_commas.chars().rev().collect();

    if let Some(dec_part) = dec_part {
        grouped.push('.');
        grouped.push_str(dec_part);
    }

    // -0.00 prints as 0.00
    let is_zero = grouped.chars().all(|c| matches!(c, '0' | '.' | ','));
    (if negative && !is_zero { "-" } else { "" }, grouped)
}
