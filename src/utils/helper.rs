use solana_sdk::pubkey::Pubkey;

/// Format lamports as SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / 1e9
}

/// Truncate a string to a maximum number of characters
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Format a pubkey for display (truncated)
pub fn format_pubkey(pubkey: &Pubkey) -> String {
    let s = pubkey.to_string();
    format!("{}...{}", &s[..4], &s[s.len() - 4..])
}
