use anchor_client::solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use voting_system::MAX_CANDIDATE_NAME_LEN;

pub fn parse_pubkey(s: &str) -> Result<Pubkey, String> {
    Pubkey::from_str(s).map_err(|e| format!("invalid pubkey: {e}"))
}

pub fn parse_candidate_name(s: &str) -> Result<String, String> {
    let name = s.trim();
    if name.is_empty() {
        return Err("candidate name must not be empty".to_string());
    }
    if name.len() > MAX_CANDIDATE_NAME_LEN {
        return Err(format!(
            "candidate name {:?} exceeds {} bytes",
            name, MAX_CANDIDATE_NAME_LEN
        ));
    }
    Ok(name.to_string())
}

pub fn parse_log_type(s: &str) -> Result<LogType, String> {
    match s.to_lowercase().as_str() {
        "election" => Ok(LogType::Election),
        "voter-record" => Ok(LogType::VoterRecord),
        _ => Err(format!("invalid log type: {}", s)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogType {
    Election,
    VoterRecord,
}
