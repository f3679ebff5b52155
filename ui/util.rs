/// Formats a price as a whole rupee amount with thousands separators.
pub fn format_price(value: f64) -> String {
	let rounded = value.round() as i64;
	let sign = if rounded < 0 { "-" } else { "" };
	format!("{}₹{}", sign, group_thousands(rounded.unsigned_abs()))
}

fn group_thousands(value: u64) -> String {
	let digits = value.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, digit) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(digit);
	}
	grouped
}

#[test]
fn test_format_price() {
	assert_eq!(format_price(4523.7), "₹4,524");
	assert_eq!(format_price(999.4), "₹999");
	assert_eq!(format_price(0.0), "₹0");
	assert_eq!(format_price(123456.2), "₹123,456");
	assert_eq!(format_price(1000000.0), "₹1,000,000");
	assert_eq!(format_price(-2500.5), "-₹2,501");
}
