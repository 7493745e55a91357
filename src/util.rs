/// Format a unit delta with an explicit sign; zero stays bare.
pub fn format_signed(delta: i64) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Today's date key in the store format.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_deltas_get_a_plus() {
        assert_eq!(format_signed(2), "+2");
        assert_eq!(format_signed(-6), "-6");
        assert_eq!(format_signed(0), "0");
    }
}
