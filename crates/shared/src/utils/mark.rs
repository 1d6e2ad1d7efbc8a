/// Keeps the first and last four digits; enough for support staff to match
/// an account without putting the full number in the logs.
pub fn mask_account_number(number: &str) -> String {
    let len = number.chars().count();
    if len < 8 {
        "****".to_string()
    } else {
        let prefix: String = number.chars().take(4).collect();
        let suffix: String = number.chars().skip(len - 4).collect();
        format!("{prefix}****{suffix}")
    }
}
