use serde::Deserialize;

/// Raw envelope returned by the TianAPI trending-board endpoint.
/// `code == 200` means success; anything else carries a message in `msg`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub result: Option<ApiResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResult {
    #[serde(default)]
    pub list: Vec<ApiHotword>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiHotword {
    #[serde(default)]
    pub hotword: String,
    #[serde(default)]
    pub hotwordnum: String, // numeric string, may carry separators or unit suffixes
    #[serde(default)]
    pub hottag: String,
}
